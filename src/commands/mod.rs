//! Command implementations for import-carousel CLI
//!
//! This module contains the implementations for each CLI command:
//! - inspect: Walk a project and report its circular imports
//! - replay: Re-render a stored interchange artifact

pub mod inspect;
pub mod replay;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Inspect { .. } => inspect::execute_inspect_command(command),
        Commands::Replay { .. } => replay::execute_replay_command(command),
    }
}
