//! Test fixtures for creating test data
//!
//! This module provides reusable fixtures for building scan targets: plain
//! directories, git repositories in various states, and broken checkouts.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Run a git command in `dir`, panicking on failure
fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Test fixture for building scan targets under a temporary directory
pub struct ScanDirFixture;

impl ScanDirFixture {
    /// Create a plain (non-repository) subdirectory
    pub fn plain_dir(base: &Path, name: &str) -> PathBuf {
        let dir = base.join(name);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Create a git repository on `branch` with a single commit
    pub fn clean_repo(base: &Path, name: &str, branch: &str) -> PathBuf {
        let dir = Self::plain_dir(base, name);
        git(&dir, &["init", "--quiet"]);
        git(
            &dir,
            &["symbolic-ref", "HEAD", &format!("refs/heads/{branch}")],
        );
        git(&dir, &["config", "user.name", "Test User"]);
        git(&dir, &["config", "user.email", "test@example.com"]);
        git(&dir, &["config", "commit.gpgsign", "false"]);
        std::fs::write(dir.join("README.md"), "# Test Repository\n").unwrap();
        git(&dir, &["add", "README.md"]);
        git(&dir, &["commit", "--quiet", "-m", "initial commit"]);
        dir
    }

    /// Create a git repository with one uncommitted modification
    pub fn dirty_repo(base: &Path, name: &str, branch: &str) -> PathBuf {
        let dir = Self::clean_repo(base, name, branch);
        std::fs::write(dir.join("README.md"), "# Test Repository\n\nEdited.\n").unwrap();
        dir
    }

    /// Create a git repository without any commit
    ///
    /// `git status -b --porcelain` reports an unborn branch with a summary
    /// line that does not follow the `## <branch>` convention.
    pub fn unborn_repo(base: &Path, name: &str) -> PathBuf {
        let dir = Self::plain_dir(base, name);
        git(&dir, &["init", "--quiet"]);
        dir
    }

    /// Create a directory whose `.git` marker is corrupt, so the status
    /// command exits non-zero
    pub fn broken_repo(base: &Path, name: &str) -> PathBuf {
        let dir = Self::plain_dir(base, name);
        std::fs::write(dir.join(".git"), "gitdir: /nonexistent\n").unwrap();
        dir
    }
}
