use clap::{Parser, Subcommand};

use crate::commands::{embed, extract, query, transform};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Color channels that carry payload bits: 0, 1 or 2 for a single stored
    /// channel, 3 for all of them
    #[arg(long = "channels", default_value = "3")]
    pub channels: u8,

    /// Luminance threshold at or above which a mask pixel becomes bit 1
    #[arg(long = "mask-threshold", default_value = "128")]
    pub mask_threshold: u8,

    /// Experimental: gain applied to a mask intensity before it is added
    /// into a spectrum magnitude
    #[arg(long = "x-frequency-gain", default_value = "50.0")]
    pub frequency_gain: f64,

    /// Experimental: radius of the low-frequency band around DC that a
    /// frequency blend leaves untouched
    #[arg(long = "x-guard-band", default_value = "8")]
    pub guard_band: usize,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Hides a data file in the least significant bits of a carrier image
    EmbedFile(embed::EmbedFileArgs),
    /// Commits a watermark mask onto the parity plane of a carrier image
    EmbedMask(embed::EmbedMaskArgs),
    /// Blends a watermark mask into the magnitude spectrum of a carrier image
    EmbedFreqMask(embed::EmbedFreqMaskArgs),
    /// Unpacks a hidden file from a carrier image
    ExtractFile(extract::ExtractFileArgs),
    /// Renders the parity plane of a carrier image as an image
    ExtractMask(extract::ExtractMaskArgs),
    /// Renders the magnitude spectrum of a carrier image as an image
    ExtractFreq(extract::ExtractFreqArgs),
    /// Prints the name of the hidden file without extracting it
    QueryName(query::QueryNameArgs),
    /// Rescales a carrier image
    Resize(transform::ResizeArgs),
    /// Mirrors a carrier image left to right
    MirrorX(transform::MirrorXArgs),
    /// Mirrors a carrier image top to bottom
    MirrorY(transform::MirrorYArgs),
}
