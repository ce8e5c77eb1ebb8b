pub mod commands;

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::EnvFilter;

use crate::presentation::cli::commands::report::ReportCommand;

/// lsrepos - List subdirectories with their git branch and dirty state
#[derive(Parser)]
#[command(name = "lsrepos")]
#[command(about = "List subdirectories with their git branch and dirty state")]
#[command(version)]
pub struct Cli {
    /// Directory whose immediate subdirectories are inspected
    pub directory: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Git executable used for status probes
    #[arg(long, env = "LSREPOS_GIT")]
    pub git: Option<String>,
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        // Set up colored output
        if self.cli.no_color {
            colored::control::set_override(false);
        }

        self.init_logging();

        // The directory argument is kept optional in the parser so the
        // missing-argument case can exit with status 1 instead of clap's 2.
        let Some(directory) = self.cli.directory.clone() else {
            eprintln!("Usage: lsrepos <directory>");
            exit(1);
        };

        // Handle the command
        match self.handle_report_command(directory).await {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    fn init_logging(&self) {
        let filter = if self.cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::from_default_env()
        };

        // Diagnostics go to stderr; stdout carries the table only
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    async fn handle_report_command(&self, directory: PathBuf) -> anyhow::Result<()> {
        let report_cmd = ReportCommand::new(directory, self.cli.git.clone(), self.cli.verbose);
        report_cmd.execute().await
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}
