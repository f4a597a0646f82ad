//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Common arguments for commands that walk a project tree
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Project root to analyze (defaults to current directory)
    #[arg(value_name = "ROOT", env = "IMPORT_CAROUSEL_ROOT")]
    pub root: Option<PathBuf>,

    /// Stop discovery after this many source files (0 = unlimited)
    #[arg(long, default_value_t = 0, env = "IMPORT_CAROUSEL_MAX_FILES")]
    pub max_files: usize,

    /// Additional directory names to skip (repeatable)
    #[arg(
        long = "exclude",
        value_name = "DIR",
        env = "IMPORT_CAROUSEL_EXCLUDE",
        value_delimiter = ','
    )]
    pub exclude: Vec<String>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "IMPORT_CAROUSEL_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common cycle display arguments
#[derive(Args, Debug, Clone)]
pub struct CycleDisplayArgs {
    /// Maximum number of cycles to display (shows all by default)
    #[arg(long, env = "IMPORT_CAROUSEL_MAX_CYCLES")]
    pub max_cycles: Option<usize>,
}

impl CommonArgs {
    /// Get the root, using current directory if none provided
    pub fn get_root(&self) -> PathBuf {
        self.root
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// The file cap as discovery expects it
    pub fn file_cap(&self) -> Option<usize> {
        (self.max_files > 0).then_some(self.max_files)
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::CarouselError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::CarouselError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::CarouselError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
