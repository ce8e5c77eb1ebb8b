use std::fs;
use std::path::{Path, PathBuf};

use crate::common::result::{LsreposResult, ResultExt};

/// A single child directory produced by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedDirectory {
    /// Base name of the child directory
    pub name: String,

    /// Full path to the child directory
    pub path: PathBuf,
}

/// Lists the immediate child directories of a base path
///
/// Entries are returned in the order the underlying directory listing yields
/// them; no sorting is applied. Non-directory entries are filtered out before
/// further processing.
#[derive(Debug, Default)]
pub struct DirectoryScanner;

impl DirectoryScanner {
    /// Create a new scanner instance
    pub fn new() -> Self {
        Self
    }

    /// Scan `base_dir` and return its immediate child directories
    pub fn scan(&self, base_dir: &Path) -> LsreposResult<Vec<ScannedDirectory>> {
        let entries = fs::read_dir(base_dir)
            .with_filesystem_error("Failed to read directory", Some(base_dir.to_path_buf()))?;

        let mut directories = Vec::new();
        for entry in entries {
            let entry = entry.with_filesystem_error(
                "Failed to read directory entry",
                Some(base_dir.to_path_buf()),
            )?;

            let file_type = entry
                .file_type()
                .with_filesystem_error("Failed to inspect directory entry", Some(entry.path()))?;
            if !file_type.is_dir() {
                continue;
            }

            directories.push(ScannedDirectory {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.path(),
            });
        }

        tracing::debug!(
            "Scanned {}: {} child directories",
            base_dir.display(),
            directories.len()
        );

        Ok(directories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scan_returns_only_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("alpha")).unwrap();
        fs::create_dir(temp_dir.path().join("beta")).unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "not a directory\n").unwrap();

        let scanner = DirectoryScanner::new();
        let mut names: Vec<String> = scanner
            .scan(temp_dir.path())
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        names.sort();

        assert_eq!(names, vec!["alpha".to_string(), "beta".to_string()]);
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let scanner = DirectoryScanner::new();
        assert!(scanner.scan(temp_dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_scan_nonexistent_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let scanner = DirectoryScanner::new();
        let result = scanner.scan(&missing);
        assert!(result.is_err(), "Scanning a missing path should fail");
    }

    #[test]
    fn test_scanned_directory_paths_point_into_base() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("child")).unwrap();

        let scanner = DirectoryScanner::new();
        let directories = scanner.scan(temp_dir.path()).unwrap();

        assert_eq!(directories.len(), 1);
        assert_eq!(directories[0].path, temp_dir.path().join("child"));
    }
}
