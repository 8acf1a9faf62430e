//! Configuration structures for packaging operations.
//!
//! The [`ReleaseDescriptor`] says what to package, [`Settings`] says where to
//! read and write, and [`PackageLayout`] resolves both into concrete paths for
//! a single target.

mod builder;
mod core;
mod layout;
mod release;

pub use builder::SettingsBuilder;
pub use self::core::Settings;
pub use layout::PackageLayout;
pub use release::{APP_NAME, DEFAULT_TARGETS, ReleaseDescriptor, VERSION};
