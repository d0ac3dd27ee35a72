use std::path::PathBuf;

use clap::Args;
use hina_core::CodecOptions;

use crate::CliResult;

/// Unpacks a hidden file from a carrier image
#[derive(Args, Debug)]
pub struct ExtractFileArgs {
    /// Source image that contains hidden data
    #[arg(short = 'i', long = "in", value_name = "carrier image", required = true)]
    pub carrier: PathBuf,

    /// Folder the hidden file will be stored in under its own name, or a
    /// concrete target file path
    #[arg(short = 'o', long = "out", value_name = "destination", required = true)]
    pub destination: PathBuf,
}

impl ExtractFileArgs {
    pub fn run(self, options: &CodecOptions) -> CliResult<i32> {
        match hina_core::commands::extract_file(&self.carrier, &self.destination, options)? {
            Some(target) => {
                println!("{}", target.display());
                Ok(0)
            }
            None => {
                println!("no hidden file found");
                Ok(0)
            }
        }
    }
}

/// Renders the parity plane of a carrier image as an image
#[derive(Args, Debug)]
pub struct ExtractMaskArgs {
    /// Source image whose parity plane will be rendered
    #[arg(short = 'i', long = "in", value_name = "carrier image", required = true)]
    pub carrier: PathBuf,

    /// Rendering will be stored as file, always as PNG
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,
}

impl ExtractMaskArgs {
    pub fn run(self, options: &CodecOptions) -> CliResult<i32> {
        hina_core::commands::extract_mask(&self.carrier, &self.write_to_file, options)?;
        Ok(0)
    }
}

/// Renders the magnitude spectrum of a carrier image as an image
#[derive(Args, Debug)]
pub struct ExtractFreqArgs {
    /// Source image whose magnitude spectrum will be rendered
    #[arg(short = 'i', long = "in", value_name = "carrier image", required = true)]
    pub carrier: PathBuf,

    /// Rendering will be stored as file, always as PNG
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,
}

impl ExtractFreqArgs {
    pub fn run(self, options: &CodecOptions) -> CliResult<i32> {
        hina_core::commands::extract_frequency(&self.carrier, &self.write_to_file, options)?;
        Ok(0)
    }
}
