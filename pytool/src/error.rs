//! Error types for config resolution, bootstrap, and loading

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ini::IniParseError;

/// Failures while locating, creating, or loading the pytool configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Neither `PYTOOL_DIR` nor `HOME` names a usable config directory
    #[error("Please set PYTOOL_DIR or HOME")]
    Location,

    /// The home directory the config dir would live under does not exist
    #[error("{} is not a directory", .path.display())]
    MissingParent {
        /// The home directory that was expected to exist
        path: PathBuf,
    },

    /// A path that must be a directory exists as a plain file
    #[error("{} is a file, cannot create directory", .path.display())]
    PathIsFile {
        /// The conflicting path
        path: PathBuf,
    },

    /// No config file at the resolved path
    #[error("No such file or directory: '{}'", .path.display())]
    NotFound {
        /// The path that was probed
        path: PathBuf,
    },

    /// The config file exists but is not valid sectioned key/value text
    #[error("{}: {source}", .path.display())]
    Parse {
        /// The file that failed to parse
        path: PathBuf,
        /// Line-level failure detail
        source: IniParseError,
    },

    /// Underlying filesystem failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
