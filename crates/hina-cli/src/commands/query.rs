use std::path::PathBuf;

use clap::Args;
use hina_core::CodecOptions;

use crate::CliResult;

/// Prints the name of the hidden file without extracting it
#[derive(Args, Debug)]
pub struct QueryNameArgs {
    /// Source image that contains hidden data
    #[arg(short = 'i', long = "in", value_name = "carrier image", required = true)]
    pub carrier: PathBuf,
}

impl QueryNameArgs {
    /// Exits with 2 when a hidden file name was found, so scripts can
    /// distinguish a hit from an empty carrier without parsing stdout.
    pub fn run(self, options: &CodecOptions) -> CliResult<i32> {
        match hina_core::commands::query_hidden_file_name(&self.carrier, options)? {
            Some(name) => {
                println!("{name}");
                Ok(2)
            }
            None => {
                println!("no hidden file found");
                Ok(0)
            }
        }
    }
}
