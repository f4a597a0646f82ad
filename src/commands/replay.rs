//! Replay command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ReplayConfig;
use crate::error::CarouselError;

impl FromCommand for ReplayConfig {
    fn from_command(command: Commands) -> Result<Self, CarouselError> {
        match command {
            Commands::Replay {
                input,
                format,
                cycle_display,
            } => ReplayConfig::builder()
                .with_input(input)
                .with_format(format.format)
                .with_max_cycles(cycle_display.max_cycles)
                .build(),
            _ => Err(CarouselError::ConfigurationError {
                message: "Invalid command type for ReplayConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ReplayConfig);

/// Execute the replay command for re-rendering an interchange artifact
pub fn execute_replay_command(command: Commands) -> Result<()> {
    let config = ReplayConfig::from_command(command)
        .wrap_err("Failed to parse replay command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::replay::ReplayExecutor;
    ReplayExecutor::execute(config)
}
