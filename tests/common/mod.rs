//! Shared helpers for packaging tests

#![allow(dead_code)]

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

pub const MUSL: &str = "x86_64-unknown-linux-musl";
pub const GNU: &str = "x86_64-unknown-linux-gnu";

/// Writes a fake prebuilt binary at `{work_root}/{target}/release/{app}`.
pub fn write_binary(work_root: &Path, target: &str, app: &str, contents: &[u8]) -> PathBuf {
    let dir = work_root.join(target).join("release");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(app);
    std::fs::write(&path, contents).unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    path
}

/// One extracted archive member.
#[derive(Debug)]
pub struct Member {
    pub path: String,
    pub is_dir: bool,
    pub mode: u32,
    pub data: Vec<u8>,
}

/// Reads every member of a tar.gz, with trailing slashes trimmed from paths.
pub fn read_archive(path: &Path) -> Vec<Member> {
    let mut archive = tar::Archive::new(GzDecoder::new(File::open(path).unwrap()));
    let mut members = Vec::new();
    for entry in archive.entries().unwrap() {
        let mut entry = entry.unwrap();
        let path = entry
            .path()
            .unwrap()
            .to_string_lossy()
            .trim_end_matches('/')
            .to_string();
        let is_dir = entry.header().entry_type().is_dir();
        let mode = entry.header().mode().unwrap();
        let mut data = Vec::new();
        entry.read_to_end(&mut data).unwrap();
        members.push(Member {
            path,
            is_dir,
            mode,
            data,
        });
    }
    members
}

/// Names of regular files inside `dir`, sorted.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().unwrap().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
