//! # lsrepos - Subdirectory Git Status Reporter
//!
//! `lsrepos` is a command-line tool that lists the immediate subdirectories of
//! a path and reports, for each, whether it is a git checkout, its active
//! branch, and whether it has uncommitted changes, as an aligned text table.
//!
//! ## Quick Start
//!
//! ```bash
//! lsrepos ~/src
//! ```
//!
//! produces output like:
//!
//! ```text
//! Subdir      Branch      Status
//! ------------------------------
//! repoA       main
//! repoB       dev         changed
//! plainDir    <not repo>
//! ```
//!
//! ## Architecture
//!
//! The crate is organized using clean architecture principles:
//!
//! - [`domain`]: Core entities (the per-directory report row)
//! - [`application`]: Use cases (the scan/probe/collect workflow)
//! - [`infrastructure`]: External dependencies and I/O operations
//! - [`presentation`]: CLI interface and table rendering
//! - [`common`]: Shared utilities and error handling
//!
//! ## Behavior
//!
//! A subdirectory without a `.git` marker is reported as `<not repo>` and no
//! subprocess is invoked for it. For checkouts, `git status -b --porcelain`
//! is run with the subdirectory as working directory; the branch summary line
//! yields the branch (or `(unknown)` when it cannot be parsed) and any change
//! entry after it marks the row `changed`. A failing probe aborts the whole
//! run before any table output.
//!
//! ## Examples
//!
//! ### Using the Library
//!
//! ```rust,no_run
//! use lsrepos::application::use_cases::report_status::{
//!     StatusReportConfig, StatusReportUseCase,
//! };
//! use lsrepos::presentation::table;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), lsrepos::application::use_cases::report_status::StatusReportError> {
//! let use_case = StatusReportUseCase::new(StatusReportConfig::default());
//! let report = use_case.execute(Path::new(".")).await?;
//!
//! print!("{}", table::render(&report.rows));
//! # Ok(())
//! # }
//! ```

// Documentation attributes
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::LsreposError;
pub use crate::common::result::LsreposResult as Result;
