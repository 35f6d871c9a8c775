//! ccdrive-core
//!
//! Core library for a minimal C build driver.
//!
//! This crate holds the build pipeline (discover, compile, link, finalize,
//! run) together with the filesystem and process gateways it drives. The CLI
//! is a thin wrapper; everything here is testable with injected gateways and
//! temporary directories.

pub mod config;
pub mod error;
pub mod filesystem;
pub mod model;
pub mod paths;
pub mod pipeline;
pub mod process;

pub use config::BuildConfig;
pub use error::{BuildError, ProcessError};
pub use pipeline::BuildPipeline;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
