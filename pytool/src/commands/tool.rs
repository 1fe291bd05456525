//! Tool-style program scaffolding command

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use pytool::config;
use pytool::templates::TOOL_FILE;
use pytool::Scaffolder;

use super::program::validate_destination;

/// Create a tool-style python program, with sub-command dispatch
pub struct ToolCommand {
    path: PathBuf,
}

impl ToolCommand {
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
        Scaffolder::from_config(&config)?.copy_file(TOOL_FILE, &self.path)?;

        println!(
            "{} {}",
            style("Created tool-style python program:").green().bold(),
            style(self.path.display()).cyan()
        );
        Ok(())
    }
}
