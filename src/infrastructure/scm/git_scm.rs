use async_trait::async_trait;
use regex::Regex;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use super::scm_interface::{ScmError, ScmStatus, ScmStatusProbe};

/// Git implementation of the status probe
///
/// Runs `git status -b --porcelain` in the candidate directory and parses the
/// branch summary line plus the change entries that follow it.
pub struct GitScm {
    git_executable: String,
    branch_pattern: Regex,
}

impl Default for GitScm {
    fn default() -> Self {
        Self {
            git_executable: "git".to_string(),
            // Branch summary line: "## <branch>", optionally followed by
            // "...<tracking>". The branch token carries no whitespace and no
            // periods.
            branch_pattern: Regex::new(r"^## ([^\s.]+)(\.{3}|$)").unwrap(),
        }
    }
}

impl GitScm {
    /// Create a new Git SCM instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new Git SCM instance with custom executable path
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            git_executable: executable.into(),
            ..Self::default()
        }
    }

    /// Execute a git command with the given working directory
    async fn execute_git_command(
        &self,
        args: &[&str],
        working_dir: &Path,
    ) -> Result<std::process::Output, ScmError> {
        let output = Command::new(&self.git_executable)
            .args(args)
            .current_dir(working_dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ScmError::executable_not_found(&self.git_executable)
                } else {
                    ScmError::from(e)
                }
            })?;

        Ok(output)
    }

    /// Extract the branch token from the first porcelain status line
    fn parse_branch_line(&self, line: &str) -> Option<String> {
        self.branch_pattern
            .captures(line)
            .map(|captures| captures[1].to_string())
    }

    /// Parse the full porcelain status output into branch and dirty state
    ///
    /// The first line is the branch summary; any non-blank line after it is a
    /// change entry (staged, unstaged, or untracked).
    fn parse_status_output(&self, output: &str) -> ScmStatus {
        let mut lines = output.lines();
        let branch = lines.next().and_then(|line| self.parse_branch_line(line.trim()));
        let has_changes = lines.any(|line| !line.trim().is_empty());

        ScmStatus {
            branch,
            has_changes,
        }
    }
}

#[async_trait]
impl ScmStatusProbe for GitScm {
    fn is_repository(&self, path: &Path) -> bool {
        path.join(".git").exists()
    }

    async fn status(&self, repo_path: &Path) -> Result<ScmStatus, ScmError> {
        let args = ["status", "-b", "--porcelain"];
        let output = self.execute_git_command(&args, repo_path).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let command = format!("{} {}", self.git_executable, args.join(" "));
            return Err(ScmError::command_failed(
                command,
                output.status.code().unwrap_or(-1),
                stderr.trim().to_string(),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(self.parse_status_output(&stdout))
    }
}
