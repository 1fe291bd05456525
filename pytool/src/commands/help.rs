//! Command-description command

use anyhow::{bail, Result};

use pytool::templates::help::{
    HELP_HELP, HELP_OVERVIEW, HELP_PROGRAM, HELP_PROJECT, HELP_TOOL, HELP_VERSION,
};

/// Describe pytool commands
pub struct HelpCommand {
    command: Option<String>,
}

impl HelpCommand {
    /// Create a new command instance
    #[must_use]
    pub const fn new(command: Option<String>) -> Self {
        Self { command }
    }

    /// Execute the command
    ///
    /// The command set is closed, so this is a plain match; an unknown
    /// name is an error rather than a near-miss suggestion.
    pub fn execute(&self) -> Result<()> {
        match self.command.as_deref() {
            None => print!("{HELP_OVERVIEW}"),
            Some("project") => print!("{HELP_PROJECT}"),
            Some("program") => print!("{HELP_PROGRAM}"),
            Some("tool") => print!("{HELP_TOOL}"),
            Some("help") => print!("{HELP_HELP}"),
            Some("version") => print!("{HELP_VERSION}"),
            Some(other) => bail!("Unknown pytool command: '{other}'"),
        }
        Ok(())
    }
}
