//! Input path validation
//!
//! Every path given on the command line must name an existing regular file.
//! Validation runs before any parsing so a typo never produces a partial
//! merge.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::{Error, Result};

/// Split paths into (valid, invalid), preserving input order
pub fn partition_paths(paths: &[PathBuf]) -> (Vec<PathBuf>, Vec<PathBuf>) {
    paths.iter().cloned().partition(|path| is_regular_file(path))
}

/// Fail with [`Error::InvalidInputPath`] listing every invalid path
pub fn ensure_regular_files(paths: &[PathBuf]) -> Result<()> {
    let (valid, invalid) = partition_paths(paths);
    debug!("{} valid input path(s), {} invalid", valid.len(), invalid.len());

    if invalid.is_empty() {
        return Ok(());
    }

    for path in &invalid {
        warn!("Not an existing regular file: {}", path.display());
    }
    Err(Error::invalid_input_path(invalid))
}

fn is_regular_file(path: &Path) -> bool {
    // metadata() follows symlinks, so a link to a file counts as a file
    std::fs::metadata(path)
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}
