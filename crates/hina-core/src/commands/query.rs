use std::path::Path;

use crate::container;
use crate::media::{Carrier, CodecOptions};
use crate::result::Result;

use super::ensure_input;
use super::extract::read_bit_plane;

/// Name-only query: decodes the hidden file's name without writing the
/// payload anywhere.
pub fn query_hidden_file_name(carrier: &Path, opts: &CodecOptions) -> Result<Option<String>> {
    ensure_input(carrier)?;
    let carrier = Carrier::from_file(carrier)?;

    let data = read_bit_plane(&carrier, opts)?;
    container::unpack_file_name(&data)
}
