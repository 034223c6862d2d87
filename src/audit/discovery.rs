//! Recursive discovery of structured config files under the scan root.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::syntax::FileFormat;
use super::AuditError;

/// Builds the recursive glob pattern for one extension below `root`.
fn pattern_for(root: &Path, extension: &str) -> String {
    let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
    format!("{}/**/*.{}", escaped_root.trim_end_matches('/'), extension)
}

/// Finds every regular file of `format` below `root`, in walk order.
///
/// Entries that cannot be read during the walk are logged and skipped.
pub fn discover_files(root: &Path, format: FileFormat) -> Result<Vec<PathBuf>, AuditError> {
    let mut files = Vec::new();

    for extension in format.extensions() {
        let pattern = pattern_for(root, extension);
        let entries = glob::glob(&pattern).map_err(|source| AuditError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;

        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(path) => debug!("Skipping non-file match: {}", path.display()),
                Err(e) => warn!("Skipping unreadable path {}: {}", e.path().display(), e.error()),
            }
        }
    }

    debug!(
        "Discovered {} {} files under {}",
        files.len(),
        format,
        root.display()
    );
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discovers_nested_files_by_format() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("datadog").join("slos");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("root.yml"), "a: 1\n").unwrap();
        fs::write(nested.join("slo.yaml"), "b: 2\n").unwrap();
        fs::write(nested.join("dash.json"), "{}").unwrap();
        fs::write(nested.join("notes.txt"), "ignored").unwrap();

        let mut yaml = discover_files(dir.path(), FileFormat::Yaml).unwrap();
        yaml.sort();
        assert_eq!(yaml, vec![nested.join("slo.yaml"), dir.path().join("root.yml")]);

        let json = discover_files(dir.path(), FileFormat::Json).unwrap();
        assert_eq!(json, vec![nested.join("dash.json")]);
    }

    #[test]
    fn test_directories_named_like_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("weird.json")).unwrap();
        let json = discover_files(dir.path(), FileFormat::Json).unwrap();
        assert!(json.is_empty());
    }

    #[test]
    fn test_root_with_glob_metacharacters() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("configs [prod]");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("a.json"), "[]").unwrap();
        let json = discover_files(&root, FileFormat::Json).unwrap();
        assert_eq!(json, vec![root.join("a.json")]);
    }
}
