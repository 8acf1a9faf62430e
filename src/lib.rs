//! Release packager for cliche.
//!
//! This library stages prebuilt binaries and writes one versioned,
//! architecture-tagged tarball per target:
//!
//! - `target/{triple}/release/cliche` is read
//! - `cliche-{version}-{triple}/bin/cliche` is the archive layout
//! - `target/package/cliche-{version}-{triple}.tar.gz` is written
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod metadata;
pub mod packager;

// Re-export commonly used types
pub use error::{CliError, PackagerError, Result};
