//! Audit result model
//!
//! Every run produces a `Report`; renderers only ever see this model.

use serde::Serialize;
use std::path::PathBuf;

/// Counts produced by estimating a single file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Estimate {
    /// Distinct candidate strings, regardless of classification
    pub estimated: usize,
    /// Candidates that do not look like code
    pub user_facing: usize,
    /// Whitespace-delimited words across user-facing candidates
    pub words: usize,
    /// Characters across user-facing candidates
    pub chars: usize,
}

/// Per-file status shown in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// At least one candidate looks user-facing
    Completed,
    /// Candidates were found but every one of them looks technical
    CodeLikeOnly,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Completed => "completed",
            Status::CodeLikeOnly => "skipped (technical/code-like only)",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// File path relative to the scan root
    pub path: String,
    pub estimated: usize,
    pub user_facing: usize,
    pub words: usize,
    pub chars: usize,
    pub status: Status,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, estimate: Estimate) -> Self {
        let status = if estimate.user_facing > 0 {
            Status::Completed
        } else {
            Status::CodeLikeOnly
        };

        Self {
            path: path.into(),
            estimated: estimate.estimated,
            user_facing: estimate.user_facing,
            words: estimate.words,
            chars: estimate.chars,
            status,
        }
    }
}

/// Aggregate counts over every reported file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub estimated: usize,
    pub user_facing: usize,
    pub words: usize,
    pub chars: usize,
}

impl Totals {
    pub fn from_records(records: &[FileRecord]) -> Self {
        records.iter().fold(Self::default(), |acc, r| Self {
            estimated: acc.estimated + r.estimated,
            user_facing: acc.user_facing + r.user_facing,
            words: acc.words + r.words,
            chars: acc.chars + r.chars,
        })
    }
}

/// Outcome of an audit run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report {
    /// No file under the root passed the target rules
    NoTargetFiles,
    /// Target files exist but none yielded a candidate
    NoCandidates,
    /// Rows sorted by estimate (descending), then path
    Found {
        files: Vec<FileRecord>,
        totals: Totals,
    },
}

impl Report {
    /// Build a report from per-file records, dropping files without candidates
    pub fn from_records(mut records: Vec<FileRecord>) -> Self {
        records.retain(|r| r.estimated > 0);
        if records.is_empty() {
            return Report::NoCandidates;
        }

        records.sort_by(|a, b| {
            b.estimated
                .cmp(&a.estimated)
                .then_with(|| a.path.cmp(&b.path))
        });
        let totals = Totals::from_records(&records);

        Report::Found {
            files: records,
            totals,
        }
    }
}

/// Fatal errors raised while enumerating the scan root
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("root directory {} does not exist or cannot be resolved", path.display())]
    RootNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("root {} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, estimated: usize, user_facing: usize) -> FileRecord {
        FileRecord::new(
            path,
            Estimate {
                estimated,
                user_facing,
                words: user_facing * 2,
                chars: user_facing * 10,
            },
        )
    }

    #[test]
    fn test_status_from_user_facing_count() {
        assert_eq!(record("a.ts", 3, 1).status, Status::Completed);
        assert_eq!(record("a.ts", 3, 0).status, Status::CodeLikeOnly);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::Completed.to_string(), "completed");
        assert_eq!(
            Status::CodeLikeOnly.to_string(),
            "skipped (technical/code-like only)"
        );
    }

    #[test]
    fn test_report_sorts_by_estimate_then_path() {
        let report = Report::from_records(vec![
            record("src/b.ts", 5, 1),
            record("src/z.ts", 9, 1),
            record("src/a.ts", 5, 0),
        ]);

        let Report::Found { files, .. } = report else {
            panic!("expected rows");
        };
        let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["src/z.ts", "src/a.ts", "src/b.ts"]);
    }

    #[test]
    fn test_report_totals_skip_empty_files() {
        let report = Report::from_records(vec![
            record("a.ts", 2, 2),
            record("b.ts", 0, 0),
            record("c.ts", 4, 1),
        ]);

        let Report::Found { files, totals } = report else {
            panic!("expected rows");
        };
        assert_eq!(files.len(), 2);
        assert_eq!(
            totals,
            Totals {
                estimated: 6,
                user_facing: 3,
                words: 6,
                chars: 30,
            }
        );
    }

    #[test]
    fn test_report_without_candidates() {
        assert_eq!(Report::from_records(Vec::new()), Report::NoCandidates);
        assert_eq!(
            Report::from_records(vec![record("a.ts", 0, 0)]),
            Report::NoCandidates
        );
    }

    #[test]
    fn test_report_serialization_tag() {
        let json = serde_json::to_value(Report::NoTargetFiles).unwrap();
        assert_eq!(json["status"], "no_target_files");

        let json = serde_json::to_value(Report::from_records(vec![record("a.ts", 1, 0)])).unwrap();
        assert_eq!(json["status"], "found");
        assert_eq!(json["files"][0]["status"], "code_like_only");
        assert_eq!(json["totals"]["estimated"], 1);
    }
}
