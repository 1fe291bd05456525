//! CLI command implementations

pub mod help;
pub mod program;
pub mod project;
pub mod tool;

pub use help::HelpCommand;
pub use program::ProgramCommand;
pub use project::ProjectCommand;
pub use tool::ToolCommand;
