//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::paths::resolve_root;
use crate::core::render::{OutputFormat, RenderConfig};

/// uitext - estimate hardcoded user-facing strings in a client-side source tree.
#[derive(Parser, Debug)]
#[command(name = "uitext")]
#[command(
    author,
    version,
    about,
    long_about = r#"uitext walks a client-side source tree and estimates how many hardcoded,
user-facing strings it contains, to help prioritize internationalization work.

Files scanned: .js .jsx .ts .tsx .html .vue .svelte
Skipped: *.test.* / *.spec.* files and the .git, node_modules, dist, build,
.next, .nuxt, coverage, out and .cache directories.

Candidates come from user-facing attributes (title, alt, placeholder, label,
aria-label, aria-placeholder), quoted string literals and markup text nodes.
Candidates that look like URLs, paths, identifiers, constants, numbers or code
are counted but not treated as user-facing. The result is an estimate, not a parse.

Examples:
    uitext
    uitext ./web
    uitext ./web --format json --pretty
"#
)]
pub struct Cli {
    /// Root directory to scan.
    #[arg(
        value_name = "ROOT",
        long_help = "Root directory to scan (defaults to the current directory).\n\n\
The path is resolved to an absolute path before traversal. File paths in the\n\
report are relative to it."
    )]
    pub root: Option<PathBuf>,

    /// Output format (md/json/jsonl).
    #[arg(
        long,
        default_value = "md",
        value_name = "FORMAT",
        value_parser = ["md", "markdown", "json", "jsonl"],
        long_help = "Select the output format for the report.\n\n\
Supported values:\n\
- md (default): Markdown table followed by a totals line\n\
- json: a single JSON document\n\
- jsonl: one JSON object per file, then a totals object"
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        long_help = "Pretty-print JSON and JSONL output with indentation for human readability.\n\n\
Has no effect on md output."
    )]
    pub pretty: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        long_help = "Enable debug diagnostics on stderr, including every file that was skipped\n\
because it could not be read as UTF-8 text. The report on stdout is unchanged."
    )]
    pub verbose: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    let requested = cli.root.unwrap_or_else(|| PathBuf::from("."));
    let root = resolve_root(&requested)?;

    crate::flows::audit::run_audit(&root, render_config)
}
