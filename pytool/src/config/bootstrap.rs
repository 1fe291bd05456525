//! One-time creation of the config directory and template tree
//!
//! Bootstrap lays down everything the scaffolding commands read at
//! runtime: the seed `pytool.ini` and the template tree it points at.
//! Every step is idempotent, so re-running against an already-populated
//! directory rewrites the same content and changes nothing.

use std::fs;
use std::path::Path;

use tracing::info;

use super::{locate, Provenance, INI_NAME, TEMPLATES_DIR};
use crate::error::ConfigError;
use crate::templates;

/// Create and populate the config directory if needed.
///
/// Not safe against concurrent invocation: two simultaneous bootstraps of
/// the same directory race on file creation and the last writer wins.
/// pytool is a single-user interactive tool, so no locking is attempted.
///
/// # Errors
///
/// Any [`locate`] failure, plus the validation and I/O failures of
/// [`ensure_at`].
pub fn ensure() -> Result<(), ConfigError> {
    let (dir, provenance) = locate()?;
    ensure_at(&dir, provenance)
}

/// [`ensure`] against an explicit directory, with the provenance the
/// caller resolved for it.
///
/// # Errors
///
/// [`ConfigError::MissingParent`] under home provenance when the home
/// directory itself does not exist; [`ConfigError::PathIsFile`] when the
/// config directory or any directory inside the template tree already
/// exists as a plain file; [`ConfigError::Io`] for other filesystem
/// failures. A failure partway through leaves the tree partially
/// populated; there is no rollback.
pub fn ensure_at(config_dir: &Path, provenance: Provenance) -> Result<(), ConfigError> {
    if provenance == Provenance::HomeDefault {
        // `.pytool` is created on demand, but the home directory above it
        // must already exist.
        if let Some(home) = config_dir.parent() {
            if !home.is_dir() {
                return Err(ConfigError::MissingParent {
                    path: home.to_path_buf(),
                });
            }
        }
    }

    info!(dir = %config_dir.display(), "setting up config dir");
    ensure_dir(config_dir)?;

    info!("writing config files");
    fs::write(config_dir.join(INI_NAME), templates::pytool_ini(config_dir))?;

    let tmpl = config_dir.join(TEMPLATES_DIR); // <cfgdir>/templates
    let prjdir = tmpl.join("prjdir"); //          <cfgdir>/templates/prjdir
    let pkgdir = prjdir.join("prjdir"); //        <cfgdir>/templates/prjdir/prjdir
    let testdir = prjdir.join("test"); //         <cfgdir>/templates/prjdir/test
    for dir in [&tmpl, &prjdir, &pkgdir, &testdir] {
        ensure_dir(dir)?;
    }

    fs::write(tmpl.join(templates::PROG_FILE), templates::PROG_PY)?;
    fs::write(tmpl.join(templates::TOOL_FILE), templates::TOOL_PY)?;
    fs::write(pkgdir.join("__init__.py"), templates::INIT_PY)?;
    fs::write(prjdir.join("README.md"), templates::README_MD)?;
    fs::write(prjdir.join("setup.py"), templates::SETUP_PY)?;
    fs::write(testdir.join("test_stub.py"), templates::TEST_STUB_PY)?;

    Ok(())
}

/// Create a directory if absent. An existing directory is a no-op; an
/// existing plain file at the path is a hard error.
fn ensure_dir(path: &Path) -> Result<(), ConfigError> {
    if path.is_file() {
        return Err(ConfigError::PathIsFile {
            path: path.to_path_buf(),
        });
    }
    fs::create_dir_all(path)?;
    Ok(())
}
