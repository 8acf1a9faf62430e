//! Package orchestration.
//!
//! This module provides the [`Packager`], which coordinates the per-target
//! steps of a release:
//!
//! - [`staging`] - binary presence check and staging tree assembly
//! - [`archive`] - deterministic, atomically renamed tar.gz output
//! - [`orchestrator`] - the [`Packager`] driving both across targets

mod archive;
mod orchestrator;
mod staging;

pub use orchestrator::Packager;
