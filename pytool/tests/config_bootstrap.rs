//! Integration tests for config-directory bootstrap and loading

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use pytool::config::{self, ensure_at, Provenance};
use pytool::error::ConfigError;
use tempfile::TempDir;

/// Serializes tests that mutate process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Restores (or removes) an environment variable when dropped.
struct EnvGuard {
    var: &'static str,
    saved: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(var: &'static str, value: &Path) -> Self {
        let saved = std::env::var_os(var);
        std::env::set_var(var, value);
        Self { var, saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.saved.take() {
            Some(value) => std::env::set_var(self.var, value),
            None => std::env::remove_var(self.var),
        }
    }
}

/// Sorted (relative path, content) snapshot of a directory tree.
fn tree_snapshot(root: &Path) -> Vec<(PathBuf, Option<Vec<u8>>)> {
    let mut entries: Vec<(PathBuf, Option<Vec<u8>>)> = walkdir::WalkDir::new(root)
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            let relative = entry.path().strip_prefix(root).unwrap().to_path_buf();
            let content = if entry.file_type().is_dir() {
                None
            } else {
                Some(fs::read(entry.path()).unwrap())
            };
            (relative, content)
        })
        .collect();
    entries.sort();
    entries
}

/// Test that one bootstrap pass lays down the full persisted layout
#[test]
fn bootstrap_creates_the_full_layout() {
    let temp_dir = TempDir::new().unwrap();
    let cfg_dir = temp_dir.path().join("cfg");

    ensure_at(&cfg_dir, Provenance::EnvOverride).unwrap();

    let expected = [
        "pytool.ini",
        "templates/prog.py",
        "templates/tool.py",
        "templates/prjdir/setup.py",
        "templates/prjdir/README.md",
        "templates/prjdir/prjdir/__init__.py",
        "templates/prjdir/test/test_stub.py",
    ];
    for relative in &expected {
        let path = cfg_dir.join(relative);
        assert!(path.is_file(), "missing file: {}", path.display());
    }

    let init = fs::read_to_string(cfg_dir.join("templates/prjdir/prjdir/__init__.py")).unwrap();
    let prog = fs::read_to_string(cfg_dir.join("templates/prog.py")).unwrap();
    assert_eq!(init, prog, "__init__.py seed must match prog.py");
}

/// Test that a second bootstrap is a no-op, not an error
#[test]
fn bootstrap_twice_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let cfg_dir = temp_dir.path().join("cfg");

    ensure_at(&cfg_dir, Provenance::EnvOverride).unwrap();
    let first = tree_snapshot(&cfg_dir);

    ensure_at(&cfg_dir, Provenance::EnvOverride).unwrap();
    let second = tree_snapshot(&cfg_dir);

    assert_eq!(first, second);
}

/// Test that the seed config round-trips through the loader
#[test]
fn seed_config_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let cfg_dir = temp_dir.path().join("cfg");
    ensure_at(&cfg_dir, Provenance::EnvOverride).unwrap();

    let config = config::load(Some(&cfg_dir.join("pytool.ini"))).unwrap();
    assert_eq!(
        config.get("pytool", "templates_dir"),
        Some(cfg_dir.join("templates").display().to_string().as_str())
    );
}

/// Test that home provenance requires the home directory to exist
#[test]
fn missing_home_directory_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().join("nohome");
    let cfg_dir = home.join(".pytool");

    let err = ensure_at(&cfg_dir, Provenance::HomeDefault).unwrap_err();
    match err {
        ConfigError::MissingParent { path } => assert_eq!(path, home),
        other => panic!("expected MissingParent, got {other:?}"),
    }
    assert_eq!(
        ConfigError::MissingParent { path: home.clone() }.to_string(),
        format!("{} is not a directory", home.display())
    );
}

/// Test that an override config path must not be an existing plain file
#[test]
fn config_dir_existing_as_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let cfg_dir = temp_dir.path().join("cfg");
    fs::write(&cfg_dir, "not a directory").unwrap();

    let err = ensure_at(&cfg_dir, Provenance::EnvOverride).unwrap_err();
    match err {
        ConfigError::PathIsFile { path } => assert_eq!(path, cfg_dir),
        other => panic!("expected PathIsFile, got {other:?}"),
    }
}

/// Test that the same conflict is caught deeper in the template tree
#[test]
fn template_dir_existing_as_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let cfg_dir = temp_dir.path().join("cfg");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(cfg_dir.join("templates"), "not a directory").unwrap();

    let err = ensure_at(&cfg_dir, Provenance::EnvOverride).unwrap_err();
    match err {
        ConfigError::PathIsFile { path } => assert_eq!(path, cfg_dir.join("templates")),
        other => panic!("expected PathIsFile, got {other:?}"),
    }
}

/// Test that loading an absent config file is NotFound, never auto-repair
#[test]
fn load_of_missing_file_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("pytool.ini");

    let err = config::load(Some(&path)).unwrap_err();
    match err {
        ConfigError::NotFound { path: reported } => assert_eq!(reported, path),
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(!path.exists(), "load must not create the file");
}

/// Test that a malformed config file surfaces a line-numbered parse error
#[test]
fn load_of_malformed_file_is_a_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("pytool.ini");
    fs::write(&path, "[pytool]\ntemplates_dir /tmp/t\n").unwrap();

    let err = config::load(Some(&path)).unwrap_err();
    match err {
        ConfigError::Parse { path: reported, source } => {
            assert_eq!(reported, path);
            assert_eq!(source.line, 2);
        }
        other => panic!("expected Parse, got {other:?}"),
    }
}

/// Test the full first-run composition: resolve, bootstrap once, load
#[test]
fn initialize_bootstraps_then_loads() {
    let _lock = ENV_LOCK.lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let cfg_dir = temp_dir.path().join("cfg");
    let _guard = EnvGuard::set("PYTOOL_DIR", &cfg_dir);

    let config = pytool::initialize().unwrap();
    assert_eq!(
        config.get("pytool", "templates_dir"),
        Some(cfg_dir.join("templates").display().to_string().as_str())
    );
    assert!(cfg_dir.join("templates/prjdir/test/test_stub.py").is_file());

    // Second call finds the config present and does a plain load.
    let config = pytool::initialize().unwrap();
    assert!(config.get("pytool", "templates_dir").is_some());
}

/// Test that a config broken after bootstrap propagates, with no retry
#[test]
fn initialize_propagates_parse_failures() {
    let _lock = ENV_LOCK.lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let cfg_dir = temp_dir.path().join("cfg");
    let _guard = EnvGuard::set("PYTOOL_DIR", &cfg_dir);

    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(cfg_dir.join("pytool.ini"), "gibberish\n").unwrap();

    let err = pytool::initialize().unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}
