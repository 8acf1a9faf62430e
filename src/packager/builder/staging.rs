//! Staging tree assembly.
//!
//! The staging tree is `{staging_dir}/bin/{app_name}`, the exact layout the
//! archive will reproduce under its top-level directory.

use std::path::PathBuf;

use crate::packager::{
    PackageLayout, Result,
    error::{Error, ErrorExt},
    utils::fs,
};

/// Fails with [`Error::MissingBinary`] unless the prebuilt binary is a regular file.
///
/// Runs before anything is written so a missing build never leaves a
/// half-populated package behind.
pub async fn ensure_binary(layout: &PackageLayout) -> Result<()> {
    let path = layout.binary_source();
    match tokio::fs::metadata(path).await {
        Ok(m) if m.is_file() => Ok(()),
        Ok(_) => Err(Error::MissingBinary {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::MissingBinary {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(e).fs_context("reading binary metadata", path),
    }
}

/// Builds a fresh staging tree for `layout` and returns the staged binary path.
///
/// A stale tree left by an earlier run is erased first so the archive only
/// ever contains the current binary.
pub async fn stage(layout: &PackageLayout, app_name: &str) -> Result<PathBuf> {
    fs::create_dir_all(layout.staging_dir(), true).await?;

    let bin_dir = layout.staging_bin_dir();
    fs::create_dir_all(&bin_dir, false).await?;

    let staged = bin_dir.join(app_name);
    fs::copy_file(layout.binary_source(), &staged).await?;

    log::debug!(
        "Staged {} -> {}",
        layout.binary_source().display(),
        staged.display()
    );
    Ok(staged)
}

/// Removes the staging tree. Failure is logged, not returned.
pub async fn cleanup(layout: &PackageLayout) {
    if let Err(e) = fs::remove_dir_all(layout.staging_dir()).await {
        log::warn!(
            "Failed to remove staging directory {}: {}",
            layout.staging_dir().display(),
            e
        );
    } else {
        log::debug!("Removed staging directory {}", layout.staging_dir().display());
    }
}
