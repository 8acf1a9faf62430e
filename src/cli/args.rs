//! Command line argument parsing and validation.
//!
//! Every flag is optional: a bare invocation packages the compiled-in release
//! from `./target`.

use clap::Parser;
use std::path::PathBuf;

/// Release packager for cliche binaries
#[derive(Parser, Debug)]
#[command(
    name = "cliche-package",
    version,
    about = "Packages prebuilt cliche binaries into per-target tarballs",
    long_about = "Stages target/{triple}/release/cliche as cliche-{version}-{triple}/bin/cliche and writes
cliche-{version}-{triple}.tar.gz for each target.

Usage:
  cliche-package
  cliche-package --work-root /build/target --output-dir /build/dist
  cliche-package --target aarch64-unknown-linux-musl --manifest Cargo.toml

Exit code 0 = every archive exists at its output path."
)]
pub struct Args {
    /// Directory holding `{target}/release/{app}` build outputs
    #[arg(
        short = 'w',
        long,
        value_name = "PATH",
        env = "CLICHE_WORK_ROOT",
        default_value = "target"
    )]
    pub work_root: PathBuf,

    /// Directory receiving the archives [default: {work-root}/package]
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output_dir: Option<PathBuf>,

    /// Target triple to package; repeat for several [default: x86_64 musl and gnu]
    #[arg(short = 't', long = "target", value_name = "TRIPLE")]
    pub targets: Vec<String>,

    /// Read the app name and version from this Cargo.toml
    #[arg(short = 'm', long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Keep the `{name}/bin/{app}` staging trees after archiving
    #[arg(long)]
    pub keep_staging: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.work_root.as_os_str().is_empty() {
            return Err("Work root cannot be empty".to_string());
        }

        let mut seen = std::collections::HashSet::new();
        for target in &self.targets {
            if !seen.insert(target.as_str()) {
                return Err(format!("Target listed more than once: {}", target));
            }
        }

        Ok(())
    }

    /// Targets to package: explicit ones, else the compiled-in defaults.
    pub fn resolved_targets(&self) -> Vec<String> {
        if self.targets.is_empty() {
            crate::packager::DEFAULT_TARGETS
                .iter()
                .map(|t| t.to_string())
                .collect()
        } else {
            self.targets.clone()
        }
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }

    /// Print a fatal error, even in quiet mode
    pub fn error(&self, message: &str) -> std::io::Result<()> {
        self.output.error(message)
    }

    /// Print a recovery hint, even in quiet mode
    pub fn hint(&self, message: &str) -> std::io::Result<()> {
        self.output.hint(message)
    }
}
