/// SCM (Source Control Management) status probing infrastructure
///
/// This module defines the probe interface and its git implementation.
pub mod git_scm;
pub mod scm_interface;

pub use git_scm::GitScm;
pub use scm_interface::{ScmError, ScmStatus, ScmStatusProbe};
