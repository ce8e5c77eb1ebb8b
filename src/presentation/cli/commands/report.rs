use anyhow::Result;
use std::path::PathBuf;

use crate::application::use_cases::report_status::{
    StatusReportConfig, StatusReportError, StatusReportUseCase,
};
use crate::presentation::table;

/// Handler for the report command
pub struct ReportCommand {
    pub directory: PathBuf,
    pub git_executable: Option<String>,
    pub verbose: bool,
}

impl ReportCommand {
    pub fn new(directory: PathBuf, git_executable: Option<String>, verbose: bool) -> Self {
        Self {
            directory,
            git_executable,
            verbose,
        }
    }

    pub async fn execute(&self) -> Result<()> {
        // Create configuration
        let config = StatusReportConfig {
            git_executable: self.git_executable.clone(),
            verbose: self.verbose,
        };

        // Execute the use case
        let use_case = StatusReportUseCase::new(config);

        match use_case.execute(&self.directory).await {
            Ok(report) => {
                // The table reaches stdout only after every probe succeeded
                print!("{}", table::render(&report.rows));
                Ok(())
            }
            Err(StatusReportError::ScanFailed { path, error }) => Err(anyhow::anyhow!(
                "Failed to scan directory '{}': {}",
                path,
                error
            )),
            Err(e) => Err(anyhow::anyhow!("Failed to report status: {}", e)),
        }
    }
}
