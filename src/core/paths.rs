//! Path utilities
//!
//! Resolves the scan root and produces root-relative display paths.

use std::path::{Path, PathBuf};

use crate::core::model::ScanError;

/// Resolve the scan root to an absolute directory path
pub fn resolve_root(path: &Path) -> Result<PathBuf, ScanError> {
    let root = path
        .canonicalize()
        .map_err(|source| ScanError::RootNotFound {
            path: path.to_path_buf(),
            source,
        })?;

    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root));
    }

    Ok(root)
}

/// Make a path relative to the root directory, keeping platform separators
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root)
        .ok()
        .map(|p| p.to_string_lossy().into_owned())
}
