//! Source file reading
//!
//! Files that cannot be read as UTF-8 text are reported as a `SkipReason`
//! so the caller can leave them out of the audit without aborting it.

use std::fs;
use std::path::Path;

/// Why a file was left out of the audit
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    #[error("cannot read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("file contains invalid UTF-8 sequences")]
    InvalidUtf8,
}

impl SkipReason {
    pub fn code(&self) -> &'static str {
        match self {
            SkipReason::Io(_) => "FILE_UNREADABLE",
            SkipReason::InvalidUtf8 => "FILE_SKIPPED_ENCODING",
        }
    }
}

/// Read a file strictly as UTF-8
pub fn read_source(path: &Path) -> Result<String, SkipReason> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| SkipReason::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_source_success() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("app.ts");
        fs::write(&file, "const greeting = \"Hello\";").unwrap();

        let content = read_source(&file).unwrap();
        assert_eq!(content, "const greeting = \"Hello\";");
    }

    #[test]
    fn test_read_source_missing_file() {
        let temp = tempdir().unwrap();
        let err = read_source(&temp.path().join("missing.ts")).unwrap_err();
        assert!(matches!(err, SkipReason::Io(_)));
        assert_eq!(err.code(), "FILE_UNREADABLE");
    }

    #[test]
    fn test_read_source_invalid_utf8() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("latin1.js");
        fs::write(&file, [b'"', 0xE9, 0x74, 0xE9, b'"']).unwrap();

        let err = read_source(&file).unwrap_err();
        assert!(matches!(err, SkipReason::InvalidUtf8));
        assert_eq!(err.code(), "FILE_SKIPPED_ENCODING");
    }

    #[test]
    fn test_read_source_directory() {
        let temp = tempdir().unwrap();
        assert!(read_source(temp.path()).is_err());
    }
}
