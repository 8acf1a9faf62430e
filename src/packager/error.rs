//! Error types for packaging operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for packaging operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while staging and archiving release binaries.
#[derive(Error, Debug)]
pub enum Error {
    /// The prebuilt binary for a target was not found.
    #[error("prebuilt binary not found at {}", path.display())]
    MissingBinary {
        /// Expected location of the binary
        path: PathBuf,
    },

    /// A staging or output directory could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    DirectoryCreate {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The tarball could not be written.
    #[error("failed to write archive {}: {source}", path.display())]
    ArchiveWrite {
        /// Archive being written
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A name, version or target is not a single safe path component.
    #[error("invalid {field} {value:?}: must be a single path component")]
    InvalidComponent {
        /// Which descriptor field was rejected
        field: &'static str,
        /// Rejected value
        value: String,
    },

    /// The version string is not a semantic version.
    #[error("invalid version {value:?}: {source}")]
    InvalidVersion {
        /// Rejected value
        value: String,
        /// Parser error
        #[source]
        source: semver::Error,
    },

    /// A computed path resolved outside its designated root.
    #[error("{} escapes output directory {}", path.display(), root.display())]
    PathEscape {
        /// Offending path
        path: PathBuf,
        /// Directory it must stay within
        root: PathBuf,
    },

    /// Filesystem error with context.
    #[error("{context} {}: {source}", path.display())]
    Fs {
        /// What was being done
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// IO error without path context.
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    /// Directory traversal error.
    #[error("{0}")]
    WalkDir(#[from] walkdir::Error),

    /// Free-form error.
    #[error("{0}")]
    GenericError(String),
}

/// Turns a missing value into an error with a message.
pub trait Context<T> {
    /// Fails with [`Error::GenericError`] carrying `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static;
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

/// Adds path context to raw IO results.
pub trait ErrorExt<T> {
    /// Converts an IO error into [`Error::Fs`] naming the operation and path.
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.into(),
            source,
        })
    }
}

/// Returns early with a [`Error::GenericError`].
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::packager::Error::GenericError($msg.into()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::packager::Error::GenericError(format!($fmt, $($arg)*)))
    };
}
