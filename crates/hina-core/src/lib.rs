//! # Hina Core API
//!
//! Hides arbitrary files, watermark masks and frequency-domain marks inside
//! raster images. The public surface is the [`commands`] module, one function
//! per operation:
//!
//! - [`commands::embed_file`] / [`commands::extract_file`] pack a file into
//!   the least significant bits of the carrier's color channels
//! - [`commands::embed_mask`] / [`commands::extract_mask`] commit a one bit
//!   per pixel mask onto the parity plane
//! - [`commands::embed_frequency_mask`] / [`commands::extract_frequency`]
//!   blend a mask into the magnitude spectrum and render it back
//! - [`commands::query_hidden_file_name`] answers "what is hidden here"
//!   without extracting the payload
//!
//! # Usage Examples
//!
//! ## Hide a file inside an image
//!
//! ```rust
//! use std::fs;
//!
//! use hina_core::commands::{embed_file, extract_file};
//! use hina_core::CodecOptions;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = dir.path().join("carrier.png");
//! image::RgbImage::new(64, 64)
//!     .save(&carrier)
//!     .expect("Failed to write the carrier");
//!
//! let secret = dir.path().join("note.txt");
//! fs::write(&secret, b"meet at dawn").expect("Failed to write the secret");
//!
//! let stego = dir.path().join("stego.png");
//! let opts = CodecOptions::default();
//! embed_file(&carrier, &secret, &stego, &opts).expect("Failed to hide the file");
//!
//! let out = dir.path().join("out");
//! fs::create_dir(&out).expect("Failed to create the output directory");
//! let unpacked = extract_file(&stego, &out, &opts)
//!     .expect("Failed to extract")
//!     .expect("Nothing was hidden");
//! assert_eq!(fs::read(unpacked).unwrap(), b"meet at dawn");
//! ```

#![warn(clippy::redundant_else)]

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod commands;
pub mod container;
pub mod error;
pub mod media;
pub mod result;
pub mod universal_decoder;
pub mod universal_encoder;

pub use crate::error::HinaError;
pub use crate::media::{Carrier, ChannelSelector, CodecOptions, Persist};
pub use crate::result::Result;


#[cfg(test)]
mod test_utils {
    use image::{GrayImage, ImageBuffer, RgbImage};

    /// This image has some traits:
    /// --------------x-------------
    /// | 0,0 -> (0, 1, 2 ) | 1,0 -> (3, 4, 5 ) | ...
    /// | 0,1 -> (15,16,17) | 1,1 -> (18,19,20) | ...
    /// y ...
    /// | ..
    pub fn prepare_5x5_image() -> RgbImage {
        ImageBuffer::from_fn(5, 5, |x, y| {
            let i = (3 * x + 15 * y) as u8;
            image::Rgb([i, i + 1, i + 2])
        })
    }

    /// A deterministic gradient: channel values grow linearly with the
    /// row-major pixel index, wrapped at a prime so no FFT size aligns
    /// with the wrap period.
    pub fn prepare_linear_image(width: u32, height: u32) -> RgbImage {
        ImageBuffer::from_fn(width, height, |x, y| {
            let i = ((y * width + x) * 3) as usize;
            image::Rgb([(i % 251) as u8, ((i + 1) % 251) as u8, ((i + 2) % 251) as u8])
        })
    }

    /// Binary checkerboard mask, full white on even cells.
    pub fn prepare_checker_mask(width: u32, height: u32) -> GrayImage {
        ImageBuffer::from_fn(width, height, |x, y| {
            image::Luma([if (x + y) % 2 == 0 { u8::MAX } else { 0 }])
        })
    }
}
