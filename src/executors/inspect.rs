//! Inspect command executor

use std::fs;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::render_report;
use crate::config::InspectConfig;
use crate::detector::{CycleDetector, CycleSearchMode};
use crate::diagnostics::Diagnostics;
use crate::discovery::FileDiscovery;
use crate::executors::CommandExecutor;
use crate::graph::ImportGraphBuilder;
use crate::progress::ProgressReporter;
use crate::reports::{CycleReport, InterchangeReportGenerator, ReportGenerator};

pub struct InspectExecutor;

impl CommandExecutor for InspectExecutor {
    type Config = InspectConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Checking {} for circular imports...\n",
            style("🎠").cyan(),
            style(config.discovery.root.display()).bold()
        );

        // Create progress reporter if we're in an interactive terminal
        let mut progress = ProgressReporter::for_stderr();
        let mut diagnostics = Diagnostics::new();

        if let Some(p) = progress.as_mut() {
            p.start_discovery();
        }

        let discovery = FileDiscovery::new(config.discovery.clone());
        let files = discovery
            .discover(&mut diagnostics, progress.as_ref())
            .wrap_err("Failed to discover source files")?;

        if let Some(p) = progress.as_mut() {
            p.finish_discovery(files.len());
        } else {
            eprintln!(
                "{} Found {} source files",
                style("✓").green(),
                style(files.len()).yellow()
            );
        }

        let mut graph_builder = ImportGraphBuilder::new();
        let graph = graph_builder.build(&files, &mut diagnostics, progress.as_mut());
        eprintln!(
            "  {} {} files, {} resolved imports",
            style("→").dim(),
            graph.node_count(),
            graph.import_count()
        );

        if let Some(p) = progress.as_mut() {
            p.start_cycle_detection();
        }
        if config.mode == CycleSearchMode::Exhaustive {
            eprintln!(
                "  {} Exhaustive search: every elementary cycle is reported once",
                style("→").dim()
            );
        }

        let mut detector = CycleDetector::with_mode(config.mode);
        detector.detect_cycles(graph);

        if let Some(p) = progress.as_ref() {
            p.finish_cycle_detection(detector.cycle_count());
        }

        diagnostics.flush_to_stderr();

        let has_cycles = detector.has_cycles();
        let report = CycleReport::new(files.len(), detector.into_cycles());

        let rendered = render_report(&report, config.format, config.max_cycles)
            .into_diagnostic()
            .wrap_err("Failed to generate report")?;
        print!("{rendered}");

        if let Some(path) = config.output.as_ref() {
            let artifact = InterchangeReportGenerator::new()
                .generate_report(&report)
                .into_diagnostic()
                .wrap_err("Failed to generate interchange report")?;
            fs::write(path, artifact)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to write report to {}", path.display()))?;
            eprintln!(
                "{} Report written to {}",
                style("✓").green(),
                style(path.display()).bold()
            );
        }

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && has_cycles {
            std::process::exit(1);
        }

        Ok(())
    }
}
