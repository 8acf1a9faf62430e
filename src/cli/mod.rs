//! Command line interface for the cliche release packager.
//!
//! This module provides argument parsing, release resolution and user
//! feedback around [`Packager`](crate::packager::Packager).

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::error::{CliError, PackagerError, Result};
use crate::metadata;
use crate::packager::{APP_NAME, Packager, ReleaseDescriptor, SettingsBuilder, VERSION};

/// Exit code for failures that a re-run can fix (missing build, disk, permissions).
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for invalid invocations that need different input.
pub const EXIT_USAGE: i32 = 2;

/// Main CLI entry point
///
/// Returns the process exit code.
pub async fn run() -> i32 {
    let args = Args::parse_args();
    let config = RuntimeConfig::from(&args);

    match execute(&args, &config).await {
        Ok(()) => 0,
        Err(e) => report_error(&config, &e),
    }
}

/// Runs a packaging pass for already-parsed arguments.
pub async fn execute(args: &Args, config: &RuntimeConfig) -> Result<()> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let release = resolve_release(args)?;

    let mut builder = SettingsBuilder::new()
        .work_root(&args.work_root)
        .release(release)
        .keep_staging(args.keep_staging);
    if let Some(output_dir) = &args.output_dir {
        builder = builder.output_dir(output_dir);
    }
    let settings = builder.build()?;

    let release = settings.release();
    config.section(&format!(
        "Packaging {} {} ({} target{})",
        release.app_name(),
        release.version(),
        release.targets().len(),
        if release.targets().len() == 1 { "" } else { "s" }
    ))?;
    for target in release.targets() {
        config.progress(&format!(
            "{} <- {}",
            target,
            settings.binary_path(target).display()
        ))?;
    }

    let artifacts = Packager::new(settings).package().await?;

    for artifact in &artifacts {
        config.success(&format!("{}", artifact.path.display()))?;
        config.indent(&format!("{} bytes", artifact.size))?;
    }

    Ok(())
}

/// Prints the error with its recovery hints and picks the exit code.
fn report_error(config: &RuntimeConfig, err: &PackagerError) -> i32 {
    // Nothing sensible remains if stderr itself is gone.
    let _ = config.error(&err.to_string());
    for hint in err.recovery_suggestions() {
        let _ = config.hint(&hint);
    }

    if err.is_recoverable() {
        EXIT_FAILURE
    } else {
        EXIT_USAGE
    }
}

/// Picks the release source: manifest, explicit targets, or the built-in release.
fn resolve_release(args: &Args) -> Result<ReleaseDescriptor> {
    if let Some(manifest) = &args.manifest {
        let meta = metadata::load_manifest(manifest)?;
        return meta.release(args.resolved_targets());
    }

    if args.targets.is_empty() {
        Ok(ReleaseDescriptor::builtin())
    } else {
        Ok(ReleaseDescriptor::new(
            APP_NAME,
            VERSION,
            args.resolved_targets(),
        )?)
    }
}
