use std::io::Write;
use std::path::Path;

use log::debug;

use crate::container;
use crate::media::frequency::FrequencyCodec;
use crate::media::image::{LsbCodec, MaskCodec};
use crate::media::{load_mask, Carrier, CodecOptions, Persist};
use crate::result::Result;
use crate::HinaError;

use super::ensure_input;

/// Embeds a mask image into the parity plane of the carrier's selected
/// channels and saves the result.
pub fn embed_mask(
    carrier: &Path,
    mask: &Path,
    write_to_file: &Path,
    opts: &CodecOptions,
) -> Result<()> {
    ensure_input(carrier)?;
    let mut carrier = Carrier::from_file(carrier)?;
    let mask = load_mask(mask)?;

    MaskCodec::embed(carrier.image_mut(), &mask, opts);
    carrier.save_as(write_to_file)
}

/// Packs a file into a container record and embeds it into the carrier's
/// least significant bits.
pub fn embed_file(
    carrier: &Path,
    data_file: &Path,
    write_to_file: &Path,
    opts: &CodecOptions,
) -> Result<()> {
    ensure_input(carrier)?;
    ensure_input(data_file)?;
    let mut carrier = Carrier::from_file(carrier)?;

    let record = container::pack_file(data_file)?;
    let needed_bits = record.len() * 8;
    let capacity_bits = carrier.capacity_bits(opts.channels);
    if needed_bits > capacity_bits {
        return Err(HinaError::CapacityExceeded {
            needed_bits,
            capacity_bits,
        });
    }
    debug!("embedding {needed_bits} of {capacity_bits} available bits");

    LsbCodec::encoder(carrier.image_mut(), opts)
        .write_all(&record)
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::WriteZero => HinaError::CapacityExceeded {
                needed_bits,
                capacity_bits,
            },
            _ => HinaError::ImageEncodingError,
        })?;

    carrier.save_as(write_to_file)
}

/// Blends a mask into the magnitude spectrum of the carrier's selected
/// channels and reconstructs the carrier from the modified spectrum.
pub fn embed_frequency_mask(
    carrier: &Path,
    mask: &Path,
    write_to_file: &Path,
    opts: &CodecOptions,
) -> Result<()> {
    ensure_input(carrier)?;
    let mut carrier = Carrier::from_file(carrier)?;
    let mask = load_mask(mask)?;

    let mut spectrum = FrequencyCodec::forward(carrier.image(), opts.channels);
    FrequencyCodec::embed_mask(&mut spectrum, &mask, opts);
    FrequencyCodec::inverse(&spectrum, carrier.image_mut());

    carrier.save_as(write_to_file)
}
