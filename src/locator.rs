use std::path::{Path, PathBuf};

use crate::models::IconError;

/// Return the first candidate (resolved against `base`) that exists on disk.
/// Only checks existence; nothing is opened or written.
pub fn locate_source(base: &Path, candidates: &[PathBuf]) -> Result<PathBuf, IconError> {
    candidates
        .iter()
        .map(|c| base.join(c))
        .find(|p| p.exists())
        .ok_or(IconError::SourceNotFound)
}
