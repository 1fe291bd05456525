//! Configuration directory resolution and loading
//!
//! The config directory is found through environment precedence:
//! `PYTOOL_DIR` names it directly; otherwise it is `.pytool` under `HOME`.
//! An empty value counts as unset for both variables, so `PYTOOL_DIR=""`
//! falls through to `HOME` rather than naming the current directory.
//!
//! The directory holds `pytool.ini` plus the on-disk template tree the
//! scaffolding commands copy from. [`initialize`] is the usual entry point:
//! it bootstraps the directory on first use and returns the parsed config.

mod bootstrap;
pub mod ini;

pub use bootstrap::{ensure, ensure_at};
pub use ini::IniFile;

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

/// Environment variable naming the config directory directly.
pub const PYTOOL_DIR_VAR: &str = "PYTOOL_DIR";
/// Fallback variable; the config directory is `.pytool` under its value.
pub const HOME_VAR: &str = "HOME";
/// Config file name within the config directory.
pub const INI_NAME: &str = "pytool.ini";
/// Template subdirectory name within the config directory.
pub const TEMPLATES_DIR: &str = "templates";

/// Directory name appended to `HOME` when `PYTOOL_DIR` is not set.
const DOT_PYTOOL: &str = ".pytool";

/// Which environment variable determined the config directory location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// `PYTOOL_DIR` named the directory directly.
    EnvOverride,
    /// Derived as `.pytool` under `HOME`.
    HomeDefault,
}

/// Resolve the config directory path and its provenance.
///
/// Deterministic and side-effect free; nothing is created on disk.
///
/// # Errors
///
/// [`ConfigError::Location`] when neither `PYTOOL_DIR` nor `HOME` is set to
/// a non-empty value.
pub fn locate() -> Result<(PathBuf, Provenance), ConfigError> {
    resolve(env::var_os(PYTOOL_DIR_VAR), env::var_os(HOME_VAR))
}

/// Pure core of [`locate`], split out so the precedence matrix is testable
/// without mutating process environment.
fn resolve(
    override_dir: Option<OsString>,
    home_dir: Option<OsString>,
) -> Result<(PathBuf, Provenance), ConfigError> {
    if let Some(dir) = override_dir.filter(|value| !value.is_empty()) {
        let dir = PathBuf::from(dir);
        debug!(dir = %dir.display(), "config dir named by PYTOOL_DIR");
        return Ok((dir, Provenance::EnvOverride));
    }

    if let Some(home) = home_dir.filter(|value| !value.is_empty()) {
        let dir = Path::new(&home).join(DOT_PYTOOL);
        debug!(dir = %dir.display(), "config dir derived from HOME");
        return Ok((dir, Provenance::HomeDefault));
    }

    Err(ConfigError::Location)
}

/// Path of an existing `pytool.ini` under the resolved config directory.
///
/// # Errors
///
/// [`ConfigError::NotFound`] when the file does not exist (the config
/// directory has not been bootstrapped yet), or any [`locate`] failure.
pub fn ini_path() -> Result<PathBuf, ConfigError> {
    let (dir, _) = locate()?;
    let path = dir.join(INI_NAME);
    if path.exists() {
        Ok(path)
    } else {
        Err(ConfigError::NotFound { path })
    }
}

/// Load the config file.
///
/// With `explicit` the file is read from that path verbatim; otherwise the
/// path is resolved via [`locate`] plus the fixed `pytool.ini` name. The
/// file is never created here; a missing file is an error, not a trigger
/// for bootstrap.
///
/// # Errors
///
/// [`ConfigError::NotFound`] for an absent file, [`ConfigError::Parse`] for
/// malformed content, or any [`locate`] failure on the implicit path.
pub fn load(explicit: Option<&Path>) -> Result<IniFile, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let (dir, _) = locate()?;
            dir.join(INI_NAME)
        }
    };

    if !path.exists() {
        return Err(ConfigError::NotFound { path });
    }

    let text = fs::read_to_string(&path)?;
    IniFile::parse(&text).map_err(|source| ConfigError::Parse { path, source })
}

/// Resolve, lazily bootstrap, and load the configuration.
///
/// A missing `pytool.ini` triggers [`ensure`] exactly once, after which the
/// path is re-resolved and loaded; a second failure propagates without
/// further retries. Any other resolution failure propagates immediately.
///
/// # Errors
///
/// Whatever [`locate`], [`ensure`], or [`load`] raise.
pub fn initialize() -> Result<IniFile, ConfigError> {
    match ini_path() {
        Ok(path) => load(Some(&path)),
        Err(ConfigError::NotFound { .. }) => {
            bootstrap::ensure()?;
            load(Some(&ini_path()?))
        }
        Err(err) => Err(err),
    }
}
