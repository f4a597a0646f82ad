//! Inspect command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{DiscoveryOptions, InspectConfig};
use crate::error::CarouselError;

impl FromCommand for InspectConfig {
    fn from_command(command: Commands) -> Result<Self, CarouselError> {
        match command {
            Commands::Inspect {
                common,
                format,
                cycle_display,
                output,
                error_on_cycles,
                mode,
            } => {
                let discovery = DiscoveryOptions::builder()
                    .with_root(common.get_root())
                    .with_max_files(common.file_cap())
                    .with_extra_excluded_dirs(common.exclude)
                    .build()?;

                InspectConfig::builder()
                    .with_discovery(discovery)
                    .with_format(format.format)
                    .with_output(output)
                    .with_error_on_cycles(error_on_cycles)
                    .with_max_cycles(cycle_display.max_cycles)
                    .with_mode(mode)
                    .build()
            }
            _ => Err(CarouselError::ConfigurationError {
                message: "Invalid command type for InspectConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(InspectConfig);

/// Execute the inspect command for detecting circular imports
pub fn execute_inspect_command(command: Commands) -> Result<()> {
    let config = InspectConfig::from_command(command)
        .wrap_err("Failed to parse inspect command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::inspect::InspectExecutor;
    InspectExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, OutputFormat};
    use crate::detector::CycleSearchMode;

    #[test]
    fn test_inspect_command_to_config() {
        let cli = Cli::try_parse_from([
            "import-carousel",
            "inspect",
            "repo",
            "--max-files",
            "10",
            "--exclude",
            "vendor",
            "--format",
            "json",
            "--mode",
            "exhaustive",
        ])
        .unwrap();

        let config = InspectConfig::try_from(cli.command).unwrap();

        assert_eq!(config.discovery.root, PathBuf::from("repo"));
        assert_eq!(config.discovery.max_files, 10);
        assert!(config.discovery.is_excluded_dir("vendor"));
        assert!(config.discovery.is_excluded_dir("node_modules"));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.mode, CycleSearchMode::Exhaustive);
        assert!(!config.error_on_cycles);
    }

    #[test]
    fn test_replay_command_is_rejected() {
        let cli = Cli::try_parse_from(["import-carousel", "replay", "cycles.txt"]).unwrap();

        assert!(matches!(
            InspectConfig::try_from(cli.command),
            Err(CarouselError::ConfigurationError { .. })
        ));
    }
}
