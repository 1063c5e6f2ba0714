//! File scanning backend
//!
//! Uses walkdir to enumerate client-side source files under a root

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::core::model::ScanError;
use crate::core::rules::TargetRules;

/// Collect every file under `root` that passes the target rules.
///
/// Ignored directories are pruned before descent. Traversal errors are
/// fatal. Paths come back in file-name order.
pub fn collect_target_files(root: &Path, rules: &TargetRules) -> Result<Vec<PathBuf>, ScanError> {
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_pruned(entry, rules));

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if rules.is_target_file(&name) {
            files.push(entry.into_path());
        }
    }

    debug!(root = %root.display(), count = files.len(), "collected target files");
    Ok(files)
}

fn is_pruned(entry: &DirEntry, rules: &TargetRules) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    let pruned = rules.is_ignored_dir(&name);
    if pruned {
        debug!(dir = %entry.path().display(), "pruned ignored directory");
    }
    pruned
}
