//! Program scaffolding command

use std::path::{Path, PathBuf};

use anyhow::Result;
use console::style;

use pytool::config;
use pytool::templates::PROG_FILE;
use pytool::Scaffolder;

/// Create a python program
pub struct ProgramCommand {
    path: PathBuf,
}

impl ProgramCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `path` - where the program file is written; the containing
    ///   directory must already exist
    pub fn new(path: PathBuf) -> Result<Self> {
        validate_destination(&path)?;
        Ok(Self { path })
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        let config = config::initialize()?;
        Scaffolder::from_config(&config)?.copy_file(PROG_FILE, &self.path)?;

        println!(
            "{} {}",
            style("Created python program:").green().bold(),
            style(self.path.display()).cyan()
        );
        Ok(())
    }
}

/// Reject destinations whose containing directory does not exist; the
/// copy only writes the file itself.
pub(crate) fn validate_destination(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        if !parent.is_dir() {
            anyhow::bail!("directory '{}' does not exist", parent.display());
        }
    }
    Ok(())
}
