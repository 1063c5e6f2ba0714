//! Audit flow - Estimate hardcoded user-facing text across a source tree
//!
//! Walks the root, estimates every target file and assembles a sorted report.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::backends::scan::collect_target_files;
use crate::core::model::{FileRecord, Report, ScanError};
use crate::core::paths::make_relative;
use crate::core::render::{RenderConfig, Renderer};
use crate::core::rules::TargetRules;
use crate::estimate::estimate_file;

/// Audit a resolved root directory
pub fn audit(root: &Path, rules: &TargetRules) -> Result<Report, ScanError> {
    let files = collect_target_files(root, rules)?;
    if files.is_empty() {
        return Ok(Report::NoTargetFiles);
    }

    let records = estimate_files(root, &files);
    info!(
        files = files.len(),
        with_candidates = records.len(),
        "audit complete"
    );

    Ok(Report::from_records(records))
}

#[cfg(not(feature = "parallel"))]
fn estimate_files(root: &Path, files: &[PathBuf]) -> Vec<FileRecord> {
    files
        .iter()
        .filter_map(|path| estimate_one(root, path))
        .collect()
}

#[cfg(feature = "parallel")]
fn estimate_files(root: &Path, files: &[PathBuf]) -> Vec<FileRecord> {
    files
        .par_iter()
        .filter_map(|path| estimate_one(root, path))
        .collect()
}

fn estimate_one(root: &Path, path: &Path) -> Option<FileRecord> {
    let estimate = match estimate_file(path) {
        Ok(estimate) => estimate,
        Err(reason) => {
            debug!(
                path = %path.display(),
                code = reason.code(),
                %reason,
                "skipping unreadable file"
            );
            return None;
        }
    };

    if estimate.estimated == 0 {
        return None;
    }

    let relative = make_relative(path, root)?;
    debug!(
        path = %relative,
        estimated = estimate.estimated,
        user_facing = estimate.user_facing,
        "estimated file"
    );
    Some(FileRecord::new(relative, estimate))
}

/// Run the audit command
pub fn run_audit(root: &Path, config: RenderConfig) -> Result<()> {
    let report = audit(root, &TargetRules::default())
        .with_context(|| format!("failed to audit {}", root.display()))?;

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&report));

    Ok(())
}
