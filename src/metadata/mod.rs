//! Release metadata read from a Cargo.toml.

use crate::error::{PackagerError, Result};
use crate::packager::ReleaseDescriptor;
use serde::Deserialize;
use std::path::Path;

/// Package metadata extracted from Cargo.toml
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    /// Package name from `[package]`
    pub name: String,

    /// Package version from `[package]` (e.g., "0.1.0")
    pub version: String,

    /// Primary binary name (first `[[bin]]`, else the package name)
    pub binary_name: String,
}

impl PackageMetadata {
    /// Builds a release descriptor for `targets` from this metadata.
    ///
    /// The archive and binary are named after the binary, which is what ends
    /// up at `{target}/release/{name}`.
    pub fn release(&self, targets: Vec<String>) -> Result<ReleaseDescriptor> {
        Ok(ReleaseDescriptor::new(
            self.binary_name.clone(),
            self.version.clone(),
            targets,
        )?)
    }
}

#[derive(Deserialize)]
struct RawManifest {
    package: Option<RawPackage>,
    #[serde(default)]
    bin: Vec<RawBin>,
}

#[derive(Deserialize)]
struct RawPackage {
    name: Option<String>,
    version: Option<toml::Value>,
}

#[derive(Deserialize)]
struct RawBin {
    name: Option<String>,
}

/// Loads name, version and binary name from a Cargo.toml.
///
/// Workspace-inherited versions (`version.workspace = true`) are not resolved
/// and are reported as an error.
pub fn load_manifest(cargo_toml_path: &Path) -> Result<PackageMetadata> {
    let manifest_err = |reason: String| PackagerError::Manifest {
        path: cargo_toml_path.to_path_buf(),
        reason,
    };

    let contents = std::fs::read_to_string(cargo_toml_path)
        .map_err(|e| manifest_err(format!("failed to read: {}", e)))?;

    let raw: RawManifest =
        toml::from_str(&contents).map_err(|e| manifest_err(format!("failed to parse: {}", e)))?;

    let package = raw
        .package
        .ok_or_else(|| manifest_err("no [package] section".to_string()))?;

    let name = package
        .name
        .ok_or_else(|| manifest_err("missing 'name' in [package]".to_string()))?;

    let version = match package.version {
        Some(toml::Value::String(v)) => v,
        Some(_) => {
            return Err(manifest_err(
                "'version' in [package] must be a literal string".to_string(),
            ));
        }
        None => return Err(manifest_err("missing 'version' in [package]".to_string())),
    };

    let binary_name = raw
        .bin
        .into_iter()
        .find_map(|b| b.name)
        .unwrap_or_else(|| name.clone());

    log::debug!(
        "Loaded manifest {}: {} {} (binary {})",
        cargo_toml_path.display(),
        name,
        version,
        binary_name
    );

    Ok(PackageMetadata {
        name,
        version,
        binary_name,
    })
}
