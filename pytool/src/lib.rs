//! pytool library: produce skeletons for python programs
//!
//! The library half of the `pytool` CLI. It owns the configuration
//! directory protocol (resolution via `PYTOOL_DIR`/`HOME`, lazy idempotent
//! bootstrap, `pytool.ini` loading) and the scaffolding operations that
//! copy skeletons out of the on-disk template tree.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod scaffold;
pub mod templates;

// Re-export for binary and test usage
pub use config::{initialize, IniFile, Provenance};
pub use error::ConfigError;
pub use scaffold::Scaffolder;
