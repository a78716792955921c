//! Ignore-file blocks

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::SetupResult;

/// Append `block` to the file at `path` unless it is already present,
/// creating the file if it does not exist.
///
/// Presence is a substring check: a file that contains the block
/// anywhere, even mid-line, counts as already configured. That matches
/// the upstream behavior this tool replaces.
///
/// # Errors
/// Returns an I/O error if the file cannot be read or written.
pub fn append_block(path: &Path, block: &str) -> SetupResult<()> {
    if path.exists() {
        let existing = fs::read_to_string(path)?;
        if !existing.contains(block) {
            let mut file = OpenOptions::new().append(true).open(path)?;
            file.write_all(block.as_bytes())?;
        }
    } else {
        fs::write(path, block)?;
    }
    Ok(())
}
