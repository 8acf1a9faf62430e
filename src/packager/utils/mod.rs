//! Shared helpers for packaging steps.

pub mod fs;
