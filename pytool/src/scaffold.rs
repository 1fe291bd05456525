//! Template materialization
//!
//! Copies skeletons out of the on-disk template tree: single files for the
//! `program`/`tool` commands, and the whole project subtree (with the
//! `prjdir` placeholder segments renamed to the new project's name) for
//! `project`.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::debug;
use walkdir::WalkDir;

use crate::config::IniFile;

/// Section of `pytool.ini` holding the scaffolding settings.
const CONFIG_SECTION: &str = "pytool";
/// Key naming the on-disk template tree.
const TEMPLATES_KEY: &str = "templates_dir";
/// Placeholder path segment replaced by the new project's name.
const PROJECT_SEGMENT: &str = "prjdir";

/// Copies template files and the project skeleton out of the template tree.
///
/// The template tree is taken on faith from the loaded config; a
/// `templates_dir` pointing at a missing or unreadable directory surfaces
/// as plain I/O errors from the copy operations.
#[derive(Debug)]
pub struct Scaffolder {
    templates_dir: PathBuf,
}

impl Scaffolder {
    /// Build a scaffolder from a loaded config.
    ///
    /// # Errors
    ///
    /// Fails when the config has no `templates_dir` key under `[pytool]`,
    /// which can only happen to a hand-edited config file.
    pub fn from_config(config: &IniFile) -> Result<Self> {
        let templates_dir = config.get(CONFIG_SECTION, TEMPLATES_KEY).with_context(|| {
            format!("config has no '{TEMPLATES_KEY}' key under [{CONFIG_SECTION}]")
        })?;
        Ok(Self {
            templates_dir: PathBuf::from(templates_dir),
        })
    }

    /// Copy one template file to `dest`, overwriting any existing file.
    ///
    /// The copy is a snapshot of the template's bytes, not a link; later
    /// edits to the on-disk template leave `dest` untouched. The
    /// destination's parent directory must already exist.
    ///
    /// # Errors
    ///
    /// Propagates the underlying filesystem failure (missing template,
    /// missing destination parent, permissions).
    pub fn copy_file(&self, template: &str, dest: &Path) -> Result<()> {
        let src = self.templates_dir.join(template);
        debug!(src = %src.display(), dest = %dest.display(), "copying template file");
        fs::copy(&src, dest)
            .with_context(|| format!("failed to copy {} to {}", src.display(), dest.display()))?;
        Ok(())
    }

    /// Materialize the project skeleton at `dest`.
    ///
    /// Walks `<templates_dir>/prjdir` parent-first. Each entry's path
    /// relative to the template tree has every `prjdir` segment replaced
    /// by `dest`'s base name, and the rewritten path is joined onto
    /// `dest`'s parent: the top-level `prjdir` becomes the project
    /// directory itself, and the nested one becomes the importable
    /// package directory sharing the project's name. Target directories
    /// are created as needed; existing files are overwritten.
    ///
    /// # Errors
    ///
    /// Fails when `dest` has no base name to use as a project name, and
    /// propagates filesystem failures from the walk and the copies.
    pub fn copy_project_tree(&self, dest: &Path) -> Result<()> {
        let Some(project_name) = dest.file_name() else {
            bail!(
                "'{}' has no base name to use as a project name",
                dest.display()
            );
        };
        // Joining rewritten paths onto the parent lands the substituted
        // top-level segment exactly at `dest`.
        let parent = dest.parent().unwrap_or_else(|| Path::new(""));
        let source_root = self.templates_dir.join(PROJECT_SEGMENT);
        debug!(src = %source_root.display(), dest = %dest.display(), "copying project skeleton");

        for entry in WalkDir::new(&source_root) {
            let entry = entry.with_context(|| {
                format!("failed to walk template tree at {}", source_root.display())
            })?;
            let relative = entry
                .path()
                .strip_prefix(&self.templates_dir)
                .context("walked entry escaped the template tree")?;
            let target = parent.join(rename_segments(relative, project_name));

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target).with_context(|| {
                    format!("failed to create directory {}", target.display())
                })?;
            } else {
                if let Some(dir) = target.parent() {
                    fs::create_dir_all(dir).with_context(|| {
                        format!("failed to create directory {}", dir.display())
                    })?;
                }
                fs::copy(entry.path(), &target).with_context(|| {
                    format!(
                        "failed to copy {} to {}",
                        entry.path().display(),
                        target.display()
                    )
                })?;
            }
        }

        Ok(())
    }
}

/// Replace every `prjdir` segment of `relative` with `name`.
fn rename_segments(relative: &Path, name: &std::ffi::OsStr) -> PathBuf {
    relative
        .components()
        .map(|component| match component {
            Component::Normal(segment) if segment == PROJECT_SEGMENT => name,
            other => other.as_os_str(),
        })
        .collect()
}
