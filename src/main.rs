//! cliche-package - release packager for cliche binaries.
//!
//! Turns `target/{triple}/release/cliche` into versioned, architecture-tagged
//! tarballs. Exit code 0 guarantees every archive exists.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI; errors are reported inside with recovery hints
    let exit_code = cliche_packager::cli::run().await;

    process::exit(exit_code);
}
