//! Target selection rules
//!
//! Fixed lists describing which files are worth estimating and which
//! directories are never descended into.

/// Extensions of client-side source and markup files (without the dot)
pub const TARGET_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "html", "vue", "svelte"];

/// Directory names pruned from traversal
pub const IGNORE_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "dist",
    "build",
    ".next",
    ".nuxt",
    "coverage",
    "out",
    ".cache",
];

/// HTML/JSX attributes whose values are usually shown to users
pub const USER_FACING_ATTRS: &[&str] = &[
    "title",
    "alt",
    "placeholder",
    "aria-label",
    "aria-placeholder",
    "label",
];

/// Name segments marking test files (matched case-insensitively)
const TEST_MARKERS: &[&str] = &[".spec.", ".test."];

/// Immutable rule set consulted by the directory walker
#[derive(Debug, Clone, Copy)]
pub struct TargetRules {
    pub extensions: &'static [&'static str],
    pub ignore_dirs: &'static [&'static str],
}

impl Default for TargetRules {
    fn default() -> Self {
        Self {
            extensions: TARGET_EXTENSIONS,
            ignore_dirs: IGNORE_DIRS,
        }
    }
}

impl TargetRules {
    /// Whether a directory with this name is pruned
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignore_dirs.contains(&name)
    }

    /// Whether a file with this name should be estimated
    pub fn is_target_file(&self, name: &str) -> bool {
        let has_target_ext = std::path::Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.contains(&ext))
            .unwrap_or(false);

        has_target_ext && !is_test_file(name)
    }
}

/// Check if a file name looks like a unit test or spec (`foo.test.ts`, `Foo.SPEC.jsx`)
pub fn is_test_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    TEST_MARKERS.iter().any(|marker| lower.contains(marker))
}
