//! Project scaffolding command

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use pytool::config;
use pytool::Scaffolder;

/// Create a python project skeleton
pub struct ProjectCommand {
    path: PathBuf,
}

impl ProjectCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `path` - where the project directory is created; its base name
    ///   becomes the project and package name
    pub fn new(path: PathBuf) -> Result<Self> {
        if path.file_name().is_none() {
            anyhow::bail!(
                "'{}' has no usable project name; give a path ending in the new project's name",
                path.display()
            );
        }
        Ok(Self { path })
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        let config = config::initialize()?;
        let scaffolder = Scaffolder::from_config(&config)?;

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message("Creating project skeleton...");

        scaffolder.copy_project_tree(&self.path)?;

        spinner.finish_and_clear();
        self.print_success();

        Ok(())
    }

    /// Print success message with next steps
    fn print_success(&self) {
        println!(
            "{} {}",
            style("Created python project:").green().bold(),
            style(self.path.display()).cyan().bold()
        );
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!("  {} Add version control:", style("1.").cyan());
        println!(
            "     {} {}",
            style("$").dim(),
            style(format!("cd {}", self.path.display())).cyan()
        );
        println!("     {} {}", style("$").dim(), style("git init").cyan());
        println!("     {} {}", style("$").dim(), style("git add .").cyan());
        println!();
        println!("  {} Describe your project in README.md", style("2.").cyan());
    }
}
