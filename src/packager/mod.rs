//! Release packaging.
//!
//! Turns prebuilt binaries at `{work_root}/{target}/release/{app}` into
//! `{app}-{version}-{target}.tar.gz` archives whose single top-level directory
//! holds `bin/{app}`.
//!
//! # Example
//!
//! ```no_run
//! use cliche_packager::packager::{Packager, ReleaseDescriptor, SettingsBuilder};
//!
//! # async fn example() -> cliche_packager::packager::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .work_root("target")
//!     .release(ReleaseDescriptor::builtin())
//!     .build()?;
//!
//! for artifact in Packager::new(settings).package().await? {
//!     println!("Created: {}", artifact.path.display());
//! }
//! # Ok(())
//! # }
//! ```

mod builder;
pub mod error;
mod settings;
pub mod utils;

use std::path::PathBuf;

pub use builder::Packager;
pub use error::{Error, Result};
pub use settings::{
    APP_NAME, DEFAULT_TARGETS, PackageLayout, ReleaseDescriptor, Settings, SettingsBuilder,
    VERSION,
};

/// A finished archive for one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagedArtifact {
    /// Target triple the archive was built for.
    pub target: String,
    /// `{app}-{version}-{target}`, also the archive's top-level directory.
    pub package_name: String,
    /// Location of the `.tar.gz`.
    pub path: PathBuf,
    /// Archive size in bytes.
    pub size: u64,
}
