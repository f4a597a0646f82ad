//! Replay command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::error::CarouselError;

/// Configuration for the replay command
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    /// Interchange artifact to parse
    pub input: PathBuf,
    /// Output format for the re-rendered report
    pub format: OutputFormat,
    /// Maximum number of cycles to display (None = all)
    pub max_cycles: Option<usize>,
}

impl ReplayConfig {
    pub fn builder() -> ReplayConfigBuilder {
        ReplayConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct ReplayConfigBuilder {
    input: Option<PathBuf>,
    format: Option<OutputFormat>,
    max_cycles: Option<usize>,
}

impl ReplayConfigBuilder {
    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = max_cycles;
        self
    }
}

impl crate::common::ConfigBuilder for ReplayConfigBuilder {
    type Config = ReplayConfig;

    fn build(self) -> Result<Self::Config, CarouselError> {
        Ok(ReplayConfig {
            input: self
                .input
                .ok_or_else(|| CarouselError::ConfigurationError {
                    message: "Missing required field: input".to_string(),
                })?,
            format: self
                .format
                .ok_or_else(|| CarouselError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                })?,
            max_cycles: self.max_cycles,
        })
    }
}
