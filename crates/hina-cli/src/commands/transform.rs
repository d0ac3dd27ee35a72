use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Rescales a carrier image
#[derive(Args, Debug)]
pub struct ResizeArgs {
    /// Source image, used readonly
    #[arg(short = 'i', long = "in", value_name = "carrier image", required = true)]
    pub carrier: PathBuf,

    /// Final image will be stored as file, always as PNG
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// Target width in pixels
    #[arg(long, value_name = "pixels", required = true)]
    pub width: u32,

    /// Target height in pixels
    #[arg(long, value_name = "pixels", required = true)]
    pub height: u32,
}

impl ResizeArgs {
    pub fn run(self) -> CliResult<i32> {
        hina_core::commands::resize(&self.carrier, &self.write_to_file, self.width, self.height)?;
        Ok(0)
    }
}

/// Mirrors a carrier image left to right
#[derive(Args, Debug)]
pub struct MirrorXArgs {
    /// Source image, used readonly
    #[arg(short = 'i', long = "in", value_name = "carrier image", required = true)]
    pub carrier: PathBuf,

    /// Final image will be stored as file, always as PNG
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,
}

impl MirrorXArgs {
    pub fn run(self) -> CliResult<i32> {
        hina_core::commands::mirror_x(&self.carrier, &self.write_to_file)?;
        Ok(0)
    }
}

/// Mirrors a carrier image top to bottom
#[derive(Args, Debug)]
pub struct MirrorYArgs {
    /// Source image, used readonly
    #[arg(short = 'i', long = "in", value_name = "carrier image", required = true)]
    pub carrier: PathBuf,

    /// Final image will be stored as file, always as PNG
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,
}

impl MirrorYArgs {
    pub fn run(self) -> CliResult<i32> {
        hina_core::commands::mirror_y(&self.carrier, &self.write_to_file)?;
        Ok(0)
    }
}
