//! Command executors that handle the actual logic for each command

pub mod inspect;
pub mod replay;

use miette::Result;

use crate::cli::OutputFormat;
use crate::error::CarouselError;
use crate::reports::{
    CycleReport, GitHubReportGenerator, HumanReportGenerator, InterchangeReportGenerator,
    JsonReportGenerator, ReportGenerator,
};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Render `report` in the requested output format
pub(crate) fn render_report(
    report: &CycleReport,
    format: OutputFormat,
    max_cycles: Option<usize>,
) -> Result<String, CarouselError> {
    match format {
        OutputFormat::Human => HumanReportGenerator::new(max_cycles).generate_report(report),
        OutputFormat::Json => JsonReportGenerator::new().generate_report(report),
        OutputFormat::GitHub => GitHubReportGenerator::new().generate_report(report),
        OutputFormat::Raw => InterchangeReportGenerator::new().generate_report(report),
    }
}
