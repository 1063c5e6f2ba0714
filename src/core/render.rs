//! Renderer module
//!
//! Renders a Report to different output formats: md, json, jsonl

use crate::core::model::{Report, Totals};

pub const NO_TARGET_FILES_MESSAGE: &str = "No client-side files found.";
pub const NO_CANDIDATES_MESSAGE: &str = "No likely hardcoded user-facing text found.";

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for audit reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string (no trailing newline)
    pub fn render(&self, report: &Report) -> String {
        match self.config.format {
            OutputFormat::Markdown => render_markdown(report),
            OutputFormat::Json => self.render_json(report),
            OutputFormat::Jsonl => self.render_jsonl(report),
        }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> String {
        let rendered = if self.config.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.unwrap_or_else(|_| "{}".to_string())
    }

    /// Render as a single JSON document
    fn render_json(&self, report: &Report) -> String {
        self.to_json(report)
    }

    /// Render as JSON Lines: one object per file, then the totals
    fn render_jsonl(&self, report: &Report) -> String {
        match report {
            Report::Found { files, totals } => files
                .iter()
                .map(|file| self.to_json(file))
                .chain(std::iter::once(
                    self.to_json(&serde_json::json!({ "totals": totals })),
                ))
                .collect::<Vec<_>>()
                .join(if self.config.pretty { "\n\n" } else { "\n" }),
            other => self.to_json(other),
        }
    }
}

/// Render as a Markdown table followed by the totals line
fn render_markdown(report: &Report) -> String {
    let (files, totals) = match report {
        Report::NoTargetFiles => return NO_TARGET_FILES_MESSAGE.to_string(),
        Report::NoCandidates => return NO_CANDIDATES_MESSAGE.to_string(),
        Report::Found { files, totals } => (files, totals),
    };

    let mut lines = Vec::with_capacity(files.len() + 4);
    lines.push("| # | File | Est. Strings | Status |".to_string());
    lines.push("|---|------|--------------|--------|".to_string());
    for (idx, file) in files.iter().enumerate() {
        lines.push(format!(
            "| {} | {} | ~{} | {} |",
            idx + 1,
            file.path,
            file.estimated,
            file.status
        ));
    }
    lines.push(String::new());
    lines.push(totals_line(totals));

    lines.join("\n")
}

/// The summary line printed under the table
pub fn totals_line(totals: &Totals) -> String {
    format!(
        "Totals: estimated strings={}, likely user-facing strings={}, words={}, chars={}",
        totals.estimated, totals.user_facing, totals.words, totals.chars
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Estimate, FileRecord};

    fn sample_report() -> Report {
        Report::from_records(vec![
            FileRecord::new(
                "src/constants.ts",
                Estimate {
                    estimated: 3,
                    ..Default::default()
                },
            ),
            FileRecord::new(
                "src/App.tsx",
                Estimate {
                    estimated: 5,
                    user_facing: 4,
                    words: 9,
                    chars: 40,
                },
            ),
        ])
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!(
            "Markdown".parse::<OutputFormat>().unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_markdown_table() {
        let renderer = Renderer::with_config(RenderConfig::default());
        let expected = "\
| # | File | Est. Strings | Status |
|---|------|--------------|--------|
| 1 | src/App.tsx | ~5 | completed |
| 2 | src/constants.ts | ~3 | skipped (technical/code-like only) |

Totals: estimated strings=8, likely user-facing strings=4, words=9, chars=40";
        assert_eq!(renderer.render(&sample_report()), expected);
    }

    #[test]
    fn test_render_markdown_messages() {
        let renderer = Renderer::with_config(RenderConfig::default());
        assert_eq!(
            renderer.render(&Report::NoTargetFiles),
            "No client-side files found."
        );
        assert_eq!(
            renderer.render(&Report::NoCandidates),
            "No likely hardcoded user-facing text found."
        );
    }

    #[test]
    fn test_render_json() {
        let renderer = Renderer::with_config(RenderConfig::with_pretty(OutputFormat::Json, false));
        let value: serde_json::Value =
            serde_json::from_str(&renderer.render(&sample_report())).unwrap();
        assert_eq!(value["status"], "found");
        assert_eq!(value["files"][0]["path"], "src/App.tsx");
        assert_eq!(value["totals"]["chars"], 40);
    }

    #[test]
    fn test_render_jsonl() {
        let renderer = Renderer::with_config(RenderConfig::with_pretty(OutputFormat::Jsonl, false));
        let output = renderer.render(&sample_report());
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1]["path"], "src/constants.ts");
        assert_eq!(lines[2]["totals"]["estimated"], 8);
    }

    #[test]
    fn test_render_jsonl_empty_outcome() {
        let renderer = Renderer::with_config(RenderConfig::with_pretty(OutputFormat::Jsonl, false));
        assert_eq!(
            renderer.render(&Report::NoCandidates),
            r#"{"status":"no_candidates"}"#
        );
    }
}
