use std::path::Path;

use crate::media::{Carrier, Persist};
use crate::result::Result;

use super::ensure_input;

/// Rescales a carrier image to the given dimensions.
pub fn resize(input: &Path, write_to_file: &Path, width: u32, height: u32) -> Result<()> {
    ensure_input(input)?;
    let mut carrier = Carrier::from_file(input)?;
    carrier.resize(width, height);
    carrier.save_as(write_to_file)
}

/// Mirrors a carrier image along the vertical axis (left-right flip).
pub fn mirror_x(input: &Path, write_to_file: &Path) -> Result<()> {
    ensure_input(input)?;
    let mut carrier = Carrier::from_file(input)?;
    carrier.mirror_x();
    carrier.save_as(write_to_file)
}

/// Mirrors a carrier image along the horizontal axis (top-bottom flip).
pub fn mirror_y(input: &Path, write_to_file: &Path) -> Result<()> {
    ensure_input(input)?;
    let mut carrier = Carrier::from_file(input)?;
    carrier.mirror_y();
    carrier.save_as(write_to_file)
}
