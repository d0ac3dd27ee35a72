use std::path::PathBuf;

use clap::Args;
use hina_core::CodecOptions;

use crate::CliResult;

/// Hides a data file in the least significant bits of a carrier image
#[derive(Args, Debug)]
pub struct EmbedFileArgs {
    /// Carrier image such as a PNG, JPEG or BMP file, used readonly
    #[arg(short = 'i', long = "in", value_name = "carrier image", required = true)]
    pub carrier: PathBuf,

    /// File to hide in the carrier
    #[arg(short = 'd', long = "data", value_name = "data file", required = true)]
    pub data_file: PathBuf,

    /// Final image will be stored as file, always as PNG
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,
}

impl EmbedFileArgs {
    pub fn run(self, options: &CodecOptions) -> CliResult<i32> {
        hina_core::commands::embed_file(&self.carrier, &self.data_file, &self.write_to_file, options)?;
        Ok(0)
    }
}

/// Commits a watermark mask onto the parity plane of a carrier image
#[derive(Args, Debug)]
pub struct EmbedMaskArgs {
    /// Carrier image such as a PNG, JPEG or BMP file, used readonly
    #[arg(short = 'i', long = "in", value_name = "carrier image", required = true)]
    pub carrier: PathBuf,

    /// Mask image, reduced to one bit per carrier pixel
    #[arg(short = 'm', long = "mask", value_name = "mask image", required = true)]
    pub mask: PathBuf,

    /// Final image will be stored as file, always as PNG
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,
}

impl EmbedMaskArgs {
    pub fn run(self, options: &CodecOptions) -> CliResult<i32> {
        hina_core::commands::embed_mask(&self.carrier, &self.mask, &self.write_to_file, options)?;
        Ok(0)
    }
}

/// Blends a watermark mask into the magnitude spectrum of a carrier image
#[derive(Args, Debug)]
pub struct EmbedFreqMaskArgs {
    /// Carrier image such as a PNG, JPEG or BMP file, used readonly
    #[arg(short = 'i', long = "in", value_name = "carrier image", required = true)]
    pub carrier: PathBuf,

    /// Mask image, blended into the magnitude spectrum at its own geometry
    #[arg(short = 'm', long = "mask", value_name = "mask image", required = true)]
    pub mask: PathBuf,

    /// Final image will be stored as file, always as PNG
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,
}

impl EmbedFreqMaskArgs {
    pub fn run(self, options: &CodecOptions) -> CliResult<i32> {
        hina_core::commands::embed_frequency_mask(
            &self.carrier,
            &self.mask,
            &self.write_to_file,
            options,
        )?;
        Ok(0)
    }
}
