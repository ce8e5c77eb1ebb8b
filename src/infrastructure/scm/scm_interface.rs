use async_trait::async_trait;
use std::path::Path;

/// Result of a repository status probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScmStatus {
    /// Current branch, if the branch line could be parsed
    pub branch: Option<String>,

    /// Whether there are uncommitted changes (staged, unstaged, or untracked)
    pub has_changes: bool,
}

/// Errors that can occur during SCM operations
#[derive(Debug, thiserror::Error)]
pub enum ScmError {
    #[error("SCM executable not found: {executable}")]
    ExecutableNotFound { executable: String },

    #[error("Command execution failed: {command}, exit code: {exit_code}, stderr: {stderr}")]
    CommandFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl ScmError {
    /// Create an executable not found error
    pub fn executable_not_found(executable: impl Into<String>) -> Self {
        Self::ExecutableNotFound {
            executable: executable.into(),
        }
    }

    /// Create a command failed error
    pub fn command_failed(
        command: impl Into<String>,
        exit_code: i32,
        stderr: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            command: command.into(),
            exit_code,
            stderr: stderr.into(),
        }
    }
}

/// Common interface for probing repository status
///
/// The probe's textual contract is the one git's porcelain status follows: a
/// branch summary line, then one line per changed or untracked file. Any SCM
/// producing conformant output is interchangeable behind this trait.
#[async_trait]
pub trait ScmStatusProbe: Send + Sync {
    /// Check if a directory is a valid repository for this SCM
    fn is_repository(&self, path: &Path) -> bool;

    /// Query branch and dirty state for the repository at `repo_path`
    async fn status(&self, repo_path: &Path) -> Result<ScmStatus, ScmError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_display() {
        let error = ScmError::command_failed("git status -b --porcelain", 128, "fatal: oops");
        assert_eq!(
            error.to_string(),
            "Command execution failed: git status -b --porcelain, exit code: 128, stderr: fatal: oops"
        );
    }

    #[test]
    fn test_executable_not_found_display() {
        let error = ScmError::executable_not_found("git");
        assert_eq!(error.to_string(), "SCM executable not found: git");
    }
}
