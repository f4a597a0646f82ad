//! Replay command executor

use std::fs;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::render_report;
use crate::config::ReplayConfig;
use crate::executors::CommandExecutor;
use crate::reports::parse_interchange;

pub struct ReplayExecutor;

impl CommandExecutor for ReplayExecutor {
    type Config = ReplayConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let text = fs::read_to_string(&config.input)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read {}", config.input.display()))?;

        let parsed = parse_interchange(&text)
            .wrap_err_with(|| format!("Failed to parse {}", config.input.display()))?;

        if parsed.total_cycles != parsed.cycles.len() {
            eprintln!(
                "{} Summary line announces {} cycles but {} were listed",
                style("⚠").yellow(),
                parsed.total_cycles,
                parsed.cycles.len()
            );
        }

        let report = parsed.into_report();
        let rendered = render_report(&report, config.format, config.max_cycles)
            .into_diagnostic()
            .wrap_err("Failed to generate report")?;
        print!("{rendered}");

        Ok(())
    }
}
