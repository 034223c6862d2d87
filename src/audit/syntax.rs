//! Per-file syntax validation.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Structured formats the auditor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// `.yaml` / `.yml`, parsed with serde_yaml
    Yaml,
    /// `.json`, parsed with serde_json
    Json,
}

impl FileFormat {
    pub const ALL: [FileFormat; 2] = [FileFormat::Yaml, FileFormat::Json];

    pub fn name(&self) -> &'static str {
        match self {
            FileFormat::Yaml => "YAML",
            FileFormat::Json => "JSON",
        }
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            FileFormat::Yaml => &["yaml", "yml"],
            FileFormat::Json => &["json"],
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of validating one file. Read and parse failures share this shape.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxOutcome {
    pub path: PathBuf,
    pub format: FileFormat,
    pub ok: bool,
    pub message: String,
}

/// Parses `path` as `format` and reports whether it is syntactically valid.
///
/// Never fails: unreadable files are reported like parse errors so a scan
/// can carry on with the next file.
pub fn parse_structured_file(path: &Path, format: FileFormat) -> SyntaxOutcome {
    let (ok, message) = match fs::read_to_string(path) {
        Ok(content) => check_syntax(&content, format),
        Err(e) => (false, format!("Cannot read file: {}", e)),
    };

    debug!("{} {}: {}", format, path.display(), message);

    SyntaxOutcome {
        path: path.to_path_buf(),
        format,
        ok,
        message,
    }
}

/// Syntax check on already-loaded text.
pub fn check_syntax(content: &str, format: FileFormat) -> (bool, String) {
    let result = match format {
        FileFormat::Yaml => serde_yaml::from_str::<serde_yaml::Value>(content)
            .map(|_| ())
            .map_err(|e| e.to_string()),
        FileFormat::Json => serde_json::from_str::<serde_json::Value>(content)
            .map(|_| ())
            .map_err(|e| e.to_string()),
    };

    match result {
        Ok(()) => (true, format!("Valid {} syntax", format)),
        Err(e) => (false, format!("Invalid {}: {}", format, e)),
    }
}
