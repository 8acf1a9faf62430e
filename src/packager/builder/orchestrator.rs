//! Main packager orchestration.
//!
//! This module provides the [`Packager`] that walks the release's targets and
//! turns each prebuilt binary into a versioned tarball.

use crate::packager::{PackagedArtifact, Result, Settings, error::ErrorExt};

use super::{archive, staging};

/// Main packaging orchestrator.
///
/// Targets are processed sequentially in descriptor order. The first failure
/// aborts the run; archives already written for earlier targets are kept.
///
/// # Examples
///
/// ```no_run
/// use cliche_packager::packager::{Packager, SettingsBuilder};
///
/// # async fn example() -> cliche_packager::packager::Result<()> {
/// let settings = SettingsBuilder::new().work_root("target").build()?;
/// let artifacts = Packager::new(settings).package().await?;
///
/// for artifact in artifacts {
///     println!("{} ({} bytes)", artifact.path.display(), artifact.size);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Packager {
    settings: Settings,
}

impl Packager {
    /// Creates a new packager with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Packages every target of the release.
    ///
    /// # Returns
    ///
    /// One [`PackagedArtifact`] per target, in target order.
    pub async fn package(&self) -> Result<Vec<PackagedArtifact>> {
        let targets = self.settings.release().targets();
        let mut artifacts = Vec::with_capacity(targets.len());

        for target in targets {
            artifacts.push(self.package_target(target).await?);
        }

        Ok(artifacts)
    }

    /// Packages a single target.
    ///
    /// # Process
    ///
    /// 1. Verifies the computed paths stay inside their roots
    /// 2. Checks the prebuilt binary exists (nothing is written otherwise)
    /// 3. Stages `{name}/bin/{app}`
    /// 4. Writes `{name}.tar.gz`
    /// 5. Removes the staging tree unless configured to keep it
    pub async fn package_target(&self, target: &str) -> Result<PackagedArtifact> {
        let release = self.settings.release();
        let layout = self.settings.layout(target);

        layout.ensure_contained(self.settings.output_dir(), self.settings.staging_root())?;
        staging::ensure_binary(&layout).await?;

        log::info!("Packaging {} for {}", release.app_name(), target);
        log::debug!("Source binary: {}", layout.binary_source().display());

        // A half-built staging tree is removed the same as a finished one.
        let archived = match staging::stage(&layout, release.app_name()).await {
            Ok(_) => archive::write_archive(&layout).await,
            Err(e) => Err(e),
        };
        if !self.settings.keep_staging() {
            staging::cleanup(&layout).await;
        }
        let path = archived?;

        let size = tokio::fs::metadata(&path)
            .await
            .fs_context("reading archive metadata", &path)?
            .len();

        log::info!("Created {} ({} bytes)", path.display(), size);

        Ok(PackagedArtifact {
            target: target.to_string(),
            package_name: layout.name().to_string(),
            path,
            size,
        })
    }
}
