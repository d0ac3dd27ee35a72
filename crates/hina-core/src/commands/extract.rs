use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::container;
use crate::media::frequency::FrequencyCodec;
use crate::media::image::{LsbCodec, MaskCodec};
use crate::media::{Carrier, CodecOptions};
use crate::result::Result;
use crate::HinaError;

use super::ensure_input;

/// Prefix for an extracted file whose name already exists at the destination.
const COLLISION_PREFIX: &str = "hina_";

/// Renders the parity pattern of the carrier's selected channels as an image.
///
/// There is no header on the parity plane, so this renders whatever pattern
/// is present, embedded mask or natural parity noise alike.
pub fn extract_mask(carrier: &Path, write_to_file: &Path, opts: &CodecOptions) -> Result<()> {
    ensure_input(carrier)?;
    let carrier = Carrier::from_file(carrier)?;

    MaskCodec::extract(carrier.image(), opts)
        .save_with_format(write_to_file, image::ImageFormat::Png)
        .map_err(|_e| HinaError::ImageEncodingError)
}

/// Unpacks a hidden file from the carrier's least significant bits.
///
/// Returns the path the payload was written to, or `None` when the carrier
/// holds no packed record, which is a normal outcome and not an error.
///
/// When `destination` is a directory the record's own file name is used,
/// prefixed with `hina_` if that name already exists there; an existing file
/// is never overwritten silently. When `destination` is a concrete file path
/// the payload is written there verbatim and the record name is ignored.
pub fn extract_file(
    carrier: &Path,
    destination: &Path,
    opts: &CodecOptions,
) -> Result<Option<PathBuf>> {
    ensure_input(carrier)?;
    let carrier = Carrier::from_file(carrier)?;

    let data = read_bit_plane(&carrier, opts)?;
    let Some(record) = container::unpack(&data)? else {
        info!("no packed record present in the carrier");
        return Ok(None);
    };

    let target = if destination.is_dir() {
        // never trust a decoded name with path components
        let file_name = Path::new(&record.file_name)
            .file_name()
            .ok_or(HinaError::InvalidFileName)?;
        let target = destination.join(file_name);
        if target.exists() {
            let mut prefixed = std::ffi::OsString::from(COLLISION_PREFIX);
            prefixed.push(file_name);
            destination.join(prefixed)
        } else {
            target
        }
    } else {
        destination.to_owned()
    };

    File::create(&target)
        .and_then(|mut f| f.write_all(&record.payload))
        .map_err(|source| HinaError::WriteError { source })?;

    Ok(Some(target))
}

/// Renders the magnitude spectrum of the carrier's selected channels.
///
/// This is how a frequency watermark is read: by visual inspection of the
/// rendered spectrum. There is no numeric recovery of the embedded mask.
pub fn extract_frequency(carrier: &Path, write_to_file: &Path, opts: &CodecOptions) -> Result<()> {
    ensure_input(carrier)?;
    let carrier = Carrier::from_file(carrier)?;

    let spectrum = FrequencyCodec::forward(carrier.image(), opts.channels);
    FrequencyCodec::render_magnitude(&spectrum)
        .save_with_format(write_to_file, image::ImageFormat::Png)
        .map_err(|_e| HinaError::ImageEncodingError)
}

/// Reads the full channel capacity as a byte stream. The decoder does not
/// know the payload length in advance, the marker scan happens afterwards.
pub(crate) fn read_bit_plane(carrier: &Carrier, opts: &CodecOptions) -> Result<Vec<u8>> {
    let mut data = vec![0u8; carrier.capacity_bits(opts.channels) / 8];
    LsbCodec::decoder(carrier.image(), opts)
        .read_exact(&mut data)
        .map_err(|source| HinaError::ReadError { source })?;
    Ok(data)
}
