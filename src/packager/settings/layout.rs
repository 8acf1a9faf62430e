//! Per-target package paths.

use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

use crate::packager::{Error, Result};

/// Every path involved in packaging one target.
///
/// Produced by [`Settings::layout`](super::Settings::layout). The staging tree
/// mirrors the archive layout: `{staging_dir}/bin/{app_name}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLayout {
    name: String,
    binary_source: PathBuf,
    staging_dir: PathBuf,
    archive_path: PathBuf,
}

impl PackageLayout {
    pub(super) fn new(
        name: String,
        binary_source: PathBuf,
        staging_dir: PathBuf,
        archive_path: PathBuf,
    ) -> Self {
        Self {
            name,
            binary_source,
            staging_dir,
            archive_path,
        }
    }

    /// `{app_name}-{version}-{target}`; also the archive's top-level directory.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prebuilt binary copied into the package.
    pub fn binary_source(&self) -> &Path {
        &self.binary_source
    }

    /// Root of the staging tree (`.../{name}`).
    pub fn staging_dir(&self) -> &Path {
        &self.staging_dir
    }

    /// `bin` directory inside the staging tree.
    pub fn staging_bin_dir(&self) -> PathBuf {
        self.staging_dir.join("bin")
    }

    /// Final archive location.
    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    /// Temporary file the archive is written to before the final rename.
    pub fn partial_archive_path(&self) -> PathBuf {
        let mut file_name = self
            .archive_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        file_name.push(".partial");
        self.archive_path.with_file_name(file_name)
    }

    /// Ensures the archive and staging paths stay inside their roots after
    /// lexical normalization.
    pub fn ensure_contained(&self, output_dir: &Path, staging_root: &Path) -> Result<()> {
        ensure_within(&self.archive_path, output_dir)?;
        ensure_within(&self.staging_dir, staging_root)
    }
}

fn ensure_within(path: &Path, root: &Path) -> Result<()> {
    let abs_root = root.absolutize()?;
    let abs_path = path.absolutize()?;

    // Must be a strict descendant; the root itself is not a valid package path.
    if abs_path == abs_root || !abs_path.starts_with(&abs_root) {
        return Err(Error::PathEscape {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(archive: &str) -> PackageLayout {
        PackageLayout::new(
            "cliche-0.1.0-x86_64-unknown-linux-gnu".into(),
            PathBuf::from("/w/x86_64-unknown-linux-gnu/release/cliche"),
            PathBuf::from("/w/package/cliche-0.1.0-x86_64-unknown-linux-gnu"),
            PathBuf::from(archive),
        )
    }

    #[test]
    fn partial_path_sits_next_to_archive() {
        let l = layout("/w/package/cliche-0.1.0-x86_64-unknown-linux-gnu.tar.gz");
        assert_eq!(
            l.partial_archive_path(),
            PathBuf::from("/w/package/cliche-0.1.0-x86_64-unknown-linux-gnu.tar.gz.partial")
        );
    }

    #[test]
    fn contained_paths_pass() {
        let l = layout("/w/package/cliche-0.1.0-x86_64-unknown-linux-gnu.tar.gz");
        l.ensure_contained(Path::new("/w/package"), Path::new("/w/package"))
            .unwrap();
    }

    #[test]
    fn dotdot_archive_path_is_rejected() {
        let l = layout("/w/package/../../etc/cliche.tar.gz");
        let err = l
            .ensure_contained(Path::new("/w/package"), Path::new("/w/package"))
            .unwrap_err();
        assert!(matches!(err, Error::PathEscape { .. }));
    }
}
