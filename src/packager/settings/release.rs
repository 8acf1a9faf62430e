//! Release descriptor: what gets packaged.

use crate::packager::{Error, Result};

/// Application name of the packaged binary.
pub const APP_NAME: &str = "cliche";

/// Release version stamped into archive names.
pub const VERSION: &str = "0.1.0";

/// Target triples packaged when none are given explicitly.
pub const DEFAULT_TARGETS: &[&str] = &["x86_64-unknown-linux-musl", "x86_64-unknown-linux-gnu"];

/// Application name, version and ordered target list for one packaging run.
///
/// Every field is validated to be a single path component on construction,
/// so names derived from it cannot reach outside their parent directory.
///
/// # Examples
///
/// ```
/// use cliche_packager::packager::ReleaseDescriptor;
///
/// let release = ReleaseDescriptor::new(
///     "cliche",
///     "0.1.0",
///     vec!["x86_64-unknown-linux-gnu".to_string()],
/// )
/// .unwrap();
/// assert_eq!(
///     release.package_name("x86_64-unknown-linux-gnu"),
///     "cliche-0.1.0-x86_64-unknown-linux-gnu"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDescriptor {
    app_name: String,
    version: String,
    targets: Vec<String>,
}

impl ReleaseDescriptor {
    /// Creates a validated descriptor.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidComponent`] if the name, version or a target is empty,
    ///   `.`/`..`, or contains a path separator
    /// - [`Error::InvalidVersion`] if `version`, minus an optional leading `v`,
    ///   is not a semantic version
    pub fn new(
        app_name: impl Into<String>,
        version: impl Into<String>,
        targets: Vec<String>,
    ) -> Result<Self> {
        let app_name = app_name.into();
        let version = version.into();

        validate_component("app name", &app_name)?;
        validate_component("version", &version)?;
        // Tag-style `v1.2.3` is accepted; the name keeps the literal string.
        let bare = version.strip_prefix('v').unwrap_or(&version);
        semver::Version::parse(bare).map_err(|source| Error::InvalidVersion {
            value: version.clone(),
            source,
        })?;

        if targets.is_empty() {
            return Err(Error::GenericError(
                "at least one target is required".to_string(),
            ));
        }
        for target in &targets {
            validate_component("target", target)?;
        }

        Ok(Self {
            app_name,
            version,
            targets,
        })
    }

    /// Descriptor for the compiled-in release: `cliche` 0.1.0 on the default targets.
    pub fn builtin() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            version: VERSION.to_string(),
            targets: DEFAULT_TARGETS.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Returns the application (and binary) name.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Returns the version string.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the targets in packaging order.
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Returns `{app_name}-{version}-{target}`.
    pub fn package_name(&self, target: &str) -> String {
        format!("{}-{}-{}", self.app_name, self.version, target)
    }
}

/// Rejects anything that is not exactly one normal path component.
fn validate_component(field: &'static str, value: &str) -> Result<()> {
    let invalid = value.is_empty()
        || value == "."
        || value == ".."
        || value.contains(['/', '\\', '\0']);

    if invalid {
        return Err(Error::InvalidComponent {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
