//! File system utilities for packaging.
//!
//! Idempotent directory helpers and a permission-preserving file copy, with
//! errors mapped onto the packager's error kinds.

use crate::packager::error::{Error, ErrorExt, Result};
use std::{io, path::Path};
use tokio::fs;

/// Creates all of the directories of the specified path, erasing it first if specified.
///
/// Succeeds if the directory already exists.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_dir_all(path).await?;
    }

    fs::create_dir_all(path)
        .await
        .map_err(|source| Error::DirectoryCreate {
            path: path.to_path_buf(),
            source,
        })
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).fs_context("removing directory", path),
    }
}

/// Removes a file if it exists.
pub async fn remove_file(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).fs_context("removing file", path),
    }
}

/// Copies a regular file, creating any parent directories of the destination
/// path as necessary.
///
/// Permission bits travel with the content, so an executable stays executable.
/// Fails with [`Error::MissingBinary`] if the source is absent or not a file.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    let metadata = match fs::metadata(from).await {
        Ok(m) if m.is_file() => m,
        Ok(_) => {
            return Err(Error::MissingBinary {
                path: from.to_path_buf(),
            });
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::MissingBinary {
                path: from.to_path_buf(),
            });
        }
        Err(e) => return Err(e).fs_context("reading metadata", from),
    };

    if let Some(dest_dir) = to.parent() {
        create_dir_all(dest_dir, false).await?;
    }
    fs::copy(from, to).await.fs_context("copying file", to)?;

    // fs::copy already carries the mode on unix; set it explicitly so a
    // pre-existing destination with narrower bits is corrected too.
    fs::set_permissions(to, metadata.permissions())
        .await
        .fs_context("setting permissions", to)?;
    Ok(())
}
