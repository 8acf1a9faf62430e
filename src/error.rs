//! Application-level error types.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use crate::packager;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for packager application operations
pub type Result<T> = std::result::Result<T, PackagerError>;

/// Main error type for the packager application
#[derive(Error, Debug)]
pub enum PackagerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest could not be used as a release source
    #[error("Manifest error in {}: {reason}", path.display())]
    Manifest {
        /// Manifest path
        path: PathBuf,
        /// What was wrong
        reason: String,
    },

    /// Packaging errors
    #[error("{0}")]
    Package(#[from] packager::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl PackagerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            PackagerError::Package(packager::Error::MissingBinary { path }) => {
                let mut hints = Vec::new();
                if let Some(target) = target_from_binary_path(path) {
                    hints.push(format!("Run `cargo build --release --target {target}` first"));
                }
                hints.push(format!("Expected a prebuilt binary at {}", path.display()));
                hints
            }
            PackagerError::Package(packager::Error::DirectoryCreate { path, .. }) => vec![format!(
                "Check permissions and free space for {}",
                path.display()
            )],
            PackagerError::Package(packager::Error::ArchiveWrite { path, .. }) => vec![
                format!("Check permissions and free space for {}", path.display()),
                "Re-run after fixing; packaging is idempotent".to_string(),
            ],
            PackagerError::Package(packager::Error::InvalidComponent { .. })
            | PackagerError::Package(packager::Error::PathEscape { .. }) => vec![
                "Names, versions and targets must not contain path separators or '..'".to_string(),
            ],
            PackagerError::Package(packager::Error::InvalidVersion { .. }) => {
                vec!["Use a semantic version such as 0.1.0".to_string()]
            }
            PackagerError::Manifest { .. } => {
                vec!["Check the [package] name and version in the manifest".to_string()]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }

    /// Check if re-running after fixing the environment can succeed.
    ///
    /// Invalid input is not recoverable without changing the invocation.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            PackagerError::Cli(_)
                | PackagerError::Manifest { .. }
                | PackagerError::Package(packager::Error::InvalidComponent { .. })
                | PackagerError::Package(packager::Error::InvalidVersion { .. })
                | PackagerError::Package(packager::Error::PathEscape { .. })
        )
    }
}

/// Extracts `{target}` from `.../{target}/release/{app}`.
fn target_from_binary_path(path: &std::path::Path) -> Option<String> {
    let release_dir = path.parent()?;
    if release_dir.file_name()? != "release" {
        return None;
    }
    let target = release_dir.parent()?.file_name()?;
    Some(target.to_string_lossy().into_owned())
}
