//! pytool CLI: produce skeletons for python programs

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{HelpCommand, ProgramCommand, ProjectCommand, ToolCommand};

#[derive(Parser)]
#[command(name = "pytool")]
#[command(version)]
#[command(about = "Produce skeletons for python programs", long_about = None)]
#[command(disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a python project in PATH
    Project {
        /// Where the project directory is created; the base name becomes
        /// the project and package name
        path: PathBuf,
        /// Enable debug logging
        #[arg(short = 'd', long)]
        debug: bool,
    },
    /// Create a python program in PATH
    Program {
        /// Where the program file is written
        path: PathBuf,
        /// Enable debug logging
        #[arg(short = 'd', long)]
        debug: bool,
    },
    /// Create a new tool-style python program in PATH
    Tool {
        /// Where the program file is written
        path: PathBuf,
        /// Enable debug logging
        #[arg(short = 'd', long)]
        debug: bool,
    },
    /// Print the pytool version
    Version,
    /// Describe pytool commands
    Help {
        /// Command to describe; omit for the full list
        command: Option<String>,
    },
}

impl Commands {
    const fn debug(&self) -> bool {
        match self {
            Self::Project { debug, .. } | Self::Program { debug, .. } | Self::Tool { debug, .. } => {
                *debug
            }
            Self::Version | Self::Help { .. } => false,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.debug());

    match cli.command {
        Commands::Project { path, .. } => ProjectCommand::new(path)?.execute()?,
        Commands::Program { path, .. } => ProgramCommand::new(path)?.execute()?,
        Commands::Tool { path, .. } => ToolCommand::new(path)?.execute()?,
        Commands::Version => println!("pytool {}", env!("CARGO_PKG_VERSION")),
        Commands::Help { command } => HelpCommand::new(command).execute()?,
    }

    Ok(())
}

/// Wire up the tracing subscriber. `-d` raises the default filter to
/// debug; an explicit `RUST_LOG` wins either way.
fn init_tracing(debug: bool) {
    let default = if debug { "pytool=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
