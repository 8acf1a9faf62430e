//! Builder for constructing Settings.

use super::{ReleaseDescriptor, Settings};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use cliche_packager::packager::{ReleaseDescriptor, SettingsBuilder};
///
/// # fn example() -> cliche_packager::packager::Result<()> {
/// let settings = SettingsBuilder::new()
///     .work_root("/build/target")
///     .output_dir("/build/dist")
///     .release(ReleaseDescriptor::builtin())
///     .keep_staging(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    release: Option<ReleaseDescriptor>,
    work_root: Option<PathBuf>,
    staging_root: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    keep_staging: bool,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the work root holding `{target}/release/{app}` build outputs.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn work_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.work_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the release to package.
    ///
    /// Default: [`ReleaseDescriptor::builtin`]
    pub fn release(mut self, release: ReleaseDescriptor) -> Self {
        self.release = Some(release);
        self
    }

    /// Sets the parent directory of staging trees.
    ///
    /// Default: `{work_root}/package`
    pub fn staging_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.staging_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the directory receiving finished archives.
    ///
    /// Default: `{work_root}/package`
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keeps staging trees after archiving.
    ///
    /// Default: false
    pub fn keep_staging(mut self, keep: bool) -> Self {
        self.keep_staging = keep;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `work_root` is missing.
    pub fn build(self) -> crate::packager::Result<Settings> {
        use crate::packager::error::Context;

        let work_root = self.work_root.context("work_root is required")?;
        let package_dir = work_root.join("package");

        let staging_root = self.staging_root.unwrap_or_else(|| package_dir.clone());
        let output_dir = self.output_dir.unwrap_or(package_dir);

        Ok(Settings::new(
            self.release.unwrap_or_else(ReleaseDescriptor::builtin),
            work_root,
            staging_root,
            output_dir,
            self.keep_staging,
        ))
    }
}
