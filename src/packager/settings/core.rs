//! Core Settings struct and implementations.

use super::{PackageLayout, ReleaseDescriptor};
use std::path::{Path, PathBuf};

/// Main settings for packaging operations.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder). Holds the release
/// descriptor plus the directories the packager reads from and writes to.
///
/// # Examples
///
/// ```no_run
/// use cliche_packager::packager::{ReleaseDescriptor, SettingsBuilder};
///
/// # fn example() -> cliche_packager::packager::Result<()> {
/// let settings = SettingsBuilder::new()
///     .work_root("target")
///     .release(ReleaseDescriptor::builtin())
///     .build()?;
/// assert!(settings.output_dir().ends_with("package"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// What to package.
    release: ReleaseDescriptor,

    /// Root containing `{target}/release/{app}` build outputs.
    ///
    /// Typically `target`.
    work_root: PathBuf,

    /// Parent of the per-package staging trees.
    staging_root: PathBuf,

    /// Directory receiving the finished tarballs.
    output_dir: PathBuf,

    /// Leave staging trees in place after archiving.
    keep_staging: bool,
}

impl Settings {
    /// Returns the release descriptor.
    pub fn release(&self) -> &ReleaseDescriptor {
        &self.release
    }

    /// Returns the staging root.
    pub fn staging_root(&self) -> &Path {
        &self.staging_root
    }

    /// Returns the archive output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Whether staging trees survive a successful archive.
    pub fn keep_staging(&self) -> bool {
        self.keep_staging
    }

    /// Returns the path to the prebuilt binary for `target`.
    ///
    /// Layout: `{work_root}/{target}/release/{app_name}`.
    pub fn binary_path(&self, target: &str) -> PathBuf {
        self.work_root
            .join(target)
            .join("release")
            .join(self.release.app_name())
    }

    /// Computes every path involved in packaging `target`.
    pub fn layout(&self, target: &str) -> PackageLayout {
        let name = self.release.package_name(target);
        let staging_dir = self.staging_root.join(&name);
        let archive_path = self.output_dir.join(format!("{name}.tar.gz"));

        PackageLayout::new(
            name,
            self.binary_path(target),
            staging_dir,
            archive_path,
        )
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        release: ReleaseDescriptor,
        work_root: PathBuf,
        staging_root: PathBuf,
        output_dir: PathBuf,
        keep_staging: bool,
    ) -> Self {
        Self {
            release,
            work_root,
            staging_root,
            output_dir,
            keep_staging,
        }
    }
}
