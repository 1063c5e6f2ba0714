//! Estimate module - Heuristic detection of hardcoded user-facing text
//!
//! This module provides:
//! - Comment stripping and candidate extraction (extract)
//! - Code-like string classification (classify)
//! - Per-file estimation combining both

pub mod classify;
pub mod extract;

use std::collections::BTreeSet;
use std::path::Path;

use crate::core::file_reader::{read_source, SkipReason};
use crate::core::model::Estimate;
use classify::is_code_like;
use extract::{normalize, raw_candidates, strip_comments, utf16_len};

/// Distinct normalized candidates found in a file's content
pub fn candidates(raw: &str) -> BTreeSet<String> {
    let text = strip_comments(raw);
    raw_candidates(&text)
        .into_iter()
        .filter_map(normalize)
        .collect()
}

/// Estimate hardcoded text in a file's content
pub fn estimate_content(raw: &str) -> Estimate {
    let candidates = candidates(raw);
    let user_facing: Vec<&str> = candidates
        .iter()
        .map(String::as_str)
        .filter(|c| !is_code_like(c))
        .collect();

    Estimate {
        estimated: candidates.len(),
        user_facing: user_facing.len(),
        words: user_facing.iter().map(|s| s.split_whitespace().count()).sum(),
        chars: user_facing.iter().map(|s| utf16_len(s)).sum(),
    }
}

/// Read and estimate a single file
pub fn estimate_file(path: &Path) -> Result<Estimate, SkipReason> {
    let content = read_source(path)?;
    Ok(estimate_content(&content))
}
