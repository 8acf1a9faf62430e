//! Deterministic tar.gz writer.
//!
//! Entries are appended in sorted order with normalized headers (zero mtime,
//! root ownership), and the gzip header carries no timestamp, so the same
//! staging tree always produces the same bytes.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use flate2::{Compression, write::GzEncoder};
use walkdir::WalkDir;

use crate::{
    bail,
    packager::{
        PackageLayout, Result,
        error::{Error, ErrorExt},
        utils::fs,
    },
};

const DIR_MODE: u32 = 0o755;

/// Archives `layout.staging_dir()` into `layout.archive_path()`.
///
/// The archive is written to a `.partial` sibling and renamed into place, so
/// the final path only ever holds a complete archive. On failure the partial
/// file is removed.
pub async fn write_archive(layout: &PackageLayout) -> Result<PathBuf> {
    let archive_path = layout.archive_path().to_path_buf();
    let partial = layout.partial_archive_path();

    if let Some(parent) = archive_path.parent() {
        fs::create_dir_all(parent, false).await?;
    }

    let staging_dir = layout.staging_dir().to_path_buf();
    let root_name = layout.name().to_string();
    let partial_for_task = partial.clone();

    let written = tokio::task::spawn_blocking(move || {
        write_tar_gz(&staging_dir, &root_name, &partial_for_task)
    })
    .await
    .map_err(|e| Error::GenericError(format!("Archive task panicked: {}", e)))?;

    let result = match written {
        Ok(()) => tokio::fs::rename(&partial, &archive_path)
            .await
            .map_err(|source| Error::ArchiveWrite {
                path: archive_path.clone(),
                source,
            }),
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        if let Err(cleanup) = fs::remove_file(&partial).await {
            log::warn!("Failed to remove partial archive: {}", cleanup);
        }
        return Err(e);
    }

    log::debug!("Wrote archive {}", archive_path.display());
    Ok(archive_path)
}

/// Writes the staging tree rooted at `staging_dir` as `root_name/...` into a
/// gzip-compressed tar at `dest`.
fn write_tar_gz(staging_dir: &Path, root_name: &str, dest: &Path) -> Result<()> {
    let archive_err = |source: io::Error| Error::ArchiveWrite {
        path: dest.to_path_buf(),
        source,
    };

    let file = File::create(dest).map_err(archive_err)?;
    let encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for entry in WalkDir::new(staging_dir)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(staging_dir)
            .map_err(|e| Error::GenericError(e.to_string()))?;
        let archive_name = Path::new(root_name).join(rel);
        let file_type = entry.file_type();

        let mut header = tar::Header::new_gnu();
        header.set_mtime(0);
        header.set_uid(0);
        header.set_gid(0);

        if file_type.is_dir() {
            header.set_entry_type(tar::EntryType::Directory);
            header.set_mode(DIR_MODE);
            header.set_size(0);
            header.set_cksum();
            builder
                .append_data(&mut header, &archive_name, io::empty())
                .map_err(archive_err)?;
        } else if file_type.is_file() {
            let metadata = entry.metadata()?;
            let reader = File::open(entry.path()).fs_context("opening staged file", entry.path())?;

            header.set_entry_type(tar::EntryType::Regular);
            header.set_mode(file_mode(&metadata));
            header.set_size(metadata.len());
            header.set_cksum();
            builder
                .append_data(&mut header, &archive_name, reader)
                .map_err(archive_err)?;
        } else {
            bail!(
                "unsupported entry in staging tree: {}",
                entry.path().display()
            );
        }
    }

    let encoder = builder.into_inner().map_err(archive_err)?;
    let mut writer = encoder.finish().map_err(archive_err)?;
    writer.flush().map_err(archive_err)?;
    let file = writer.into_inner().map_err(|e| archive_err(e.into_error()))?;
    file.sync_all().map_err(archive_err)?;
    Ok(())
}

#[cfg(unix)]
fn file_mode(metadata: &std::fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn file_mode(_metadata: &std::fs::Metadata) -> u32 {
    0o755
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;

    fn stage_tree(root: &Path) -> PathBuf {
        let staging = root.join("pkg-1.0.0-x");
        std::fs::create_dir_all(staging.join("bin")).unwrap();
        std::fs::write(staging.join("bin/pkg"), b"binary").unwrap();
        staging
    }

    fn entry_names(archive: &Path) -> Vec<String> {
        let mut archive = tar::Archive::new(GzDecoder::new(File::open(archive).unwrap()));
        archive
            .entries()
            .unwrap()
            .map(|e| {
                let path = e.unwrap().path().unwrap().to_string_lossy().into_owned();
                path.trim_end_matches('/').to_string()
            })
            .collect()
    }

    #[test]
    fn entries_are_rooted_at_package_name_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        let staging = stage_tree(tmp.path());
        let dest = tmp.path().join("out.tar.gz");

        write_tar_gz(&staging, "pkg-1.0.0-x", &dest).unwrap();

        assert_eq!(
            entry_names(&dest),
            vec!["pkg-1.0.0-x", "pkg-1.0.0-x/bin", "pkg-1.0.0-x/bin/pkg"]
        );
    }

    #[test]
    fn same_tree_gives_identical_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let staging = stage_tree(tmp.path());
        let first = tmp.path().join("a.tar.gz");
        let second = tmp.path().join("b.tar.gz");

        write_tar_gz(&staging, "pkg-1.0.0-x", &first).unwrap();
        // Touch the file so its filesystem mtime differs between runs.
        std::fs::write(staging.join("bin/pkg"), b"binary").unwrap();
        write_tar_gz(&staging, "pkg-1.0.0-x", &second).unwrap();

        assert_eq!(std::fs::read(first).unwrap(), std::fs::read(second).unwrap());
    }

    #[test]
    fn unwritable_destination_is_archive_write_error() {
        let tmp = tempfile::tempdir().unwrap();
        let staging = stage_tree(tmp.path());
        let dest = tmp.path().join("missing-dir/out.tar.gz");

        let err = write_tar_gz(&staging, "pkg-1.0.0-x", &dest).unwrap_err();
        assert!(matches!(err, Error::ArchiveWrite { .. }));
    }
}
