//! Inspect command configuration

use std::path::PathBuf;

use super::DiscoveryOptions;
use crate::cli::OutputFormat;
use crate::detector::CycleSearchMode;
use crate::error::CarouselError;

/// Configuration for the inspect command
///
/// This struct contains all options for discovering a project, detecting
/// circular imports and reporting them.
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Which files to analyze
    pub discovery: DiscoveryOptions,
    /// Output format for the report
    pub format: OutputFormat,
    /// Interchange artifact path, written after a successful run
    pub output: Option<PathBuf>,
    /// Whether to exit with error code if cycles are found
    pub error_on_cycles: bool,
    /// Maximum number of cycles to display (None = all)
    pub max_cycles: Option<usize>,
    /// Cycle search strategy
    pub mode: CycleSearchMode,
}

impl InspectConfig {
    pub fn builder() -> InspectConfigBuilder {
        InspectConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct InspectConfigBuilder {
    discovery: Option<DiscoveryOptions>,
    format: Option<OutputFormat>,
    output: Option<Option<PathBuf>>,
    error_on_cycles: Option<bool>,
    max_cycles: Option<Option<usize>>,
    mode: Option<CycleSearchMode>,
}

impl InspectConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_discovery(mut self, discovery: DiscoveryOptions) -> Self {
        self.discovery = Some(discovery);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }

    pub fn with_mode(mut self, mode: CycleSearchMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

fn missing(field: &str) -> CarouselError {
    CarouselError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

impl crate::common::ConfigBuilder for InspectConfigBuilder {
    type Config = InspectConfig;

    fn build(self) -> Result<Self::Config, CarouselError> {
        Ok(InspectConfig {
            discovery: self.discovery.ok_or_else(|| missing("discovery"))?,
            format: self.format.ok_or_else(|| missing("format"))?,
            output: self.output.ok_or_else(|| missing("output"))?,
            error_on_cycles: self
                .error_on_cycles
                .ok_or_else(|| missing("error_on_cycles"))?,
            max_cycles: self.max_cycles.ok_or_else(|| missing("max_cycles"))?,
            mode: self.mode.unwrap_or_default(),
        })
    }
}
