/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system
/// interactions:
/// - File system operations (directory scanning)
/// - SCM operations (git status probing)
pub mod filesystem;
pub mod scm;

// Re-export commonly used types
pub use filesystem::directory_scanner::{DirectoryScanner, ScannedDirectory};
pub use scm::{
    git_scm::GitScm,
    scm_interface::{ScmError, ScmStatus, ScmStatusProbe},
};
