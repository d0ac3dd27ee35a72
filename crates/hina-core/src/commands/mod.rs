//! The boundary operations: each one is a straight-line pipeline of
//! load carrier → run one codec in one domain → persist. No retries, no
//! branching beyond the protocol's own error checks.

mod embed;
mod extract;
mod query;
mod transform;

pub use embed::{embed_file, embed_frequency_mask, embed_mask};
pub use extract::{extract_file, extract_frequency, extract_mask};
pub use query::query_hidden_file_name;
pub use transform::{mirror_x, mirror_y, resize};

use std::path::Path;

use crate::result::Result;
use crate::HinaError;

pub(crate) fn ensure_input(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(HinaError::InputNotFound(path.to_owned()))
    }
}
