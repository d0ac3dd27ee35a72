mod cli;
mod commands;

use clap::Parser;
use log::debug;

use hina_core::{ChannelSelector, CodecOptions};

use crate::cli::{CliArgs, Commands};

pub(crate) type CliResult<T> = hina_core::Result<T>;

fn main() {
    env_logger::init();
    let args = CliArgs::parse();

    let code = run(args).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        e.exit_code()
    });
    std::process::exit(code);
}

fn run(args: CliArgs) -> CliResult<i32> {
    let options = CodecOptions {
        channels: ChannelSelector::try_from(args.channels)?,
        mask_threshold: args.mask_threshold,
        frequency_gain: args.frequency_gain,
        frequency_guard_band: args.guard_band,
    };
    debug!("codec options: {options:?}");

    match args.command {
        Commands::EmbedFile(cmd) => cmd.run(&options),
        Commands::EmbedMask(cmd) => cmd.run(&options),
        Commands::EmbedFreqMask(cmd) => cmd.run(&options),
        Commands::ExtractFile(cmd) => cmd.run(&options),
        Commands::ExtractMask(cmd) => cmd.run(&options),
        Commands::ExtractFreq(cmd) => cmd.run(&options),
        Commands::QueryName(cmd) => cmd.run(&options),
        Commands::Resize(cmd) => cmd.run(),
        Commands::MirrorX(cmd) => cmd.run(),
        Commands::MirrorY(cmd) => cmd.run(),
    }
}
