//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{CycleReport, ReportGenerator, cycle_directories};
use crate::error::CarouselError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, report: &CycleReport) -> Result<String, CarouselError> {
        let mut output = String::new();

        writeln!(
            output,
            "\n{} Processed {} {}",
            style("📂").blue(),
            style(report.processed_files).yellow(),
            pluralize("file", report.processed_files)
        )?;

        if !report.has_cycles() {
            write!(
                output,
                "\n{} No circular imports detected! Your modules form a clean dependency \
                 graph.\n",
                style("✅").green().bold()
            )?;
            return Ok(output);
        }

        let total_cycles = report.cycle_count();
        write!(
            output,
            "\n{} Found {} circular {}:\n\n",
            style("❌").red().bold(),
            style(total_cycles).red().bold(),
            pluralize("import", total_cycles)
        )?;

        let limit = self.max_cycles.unwrap_or(total_cycles);

        for cycle in report.cycles.iter().take(limit) {
            writeln!(
                output,
                "{} Cycle #{} ({} {})",
                style("🔄").yellow(),
                cycle.id,
                cycle.len(),
                pluralize("file", cycle.len())
            )?;
            writeln!(
                output,
                "    {} {}",
                style("📁").dim(),
                style(cycle_directories(cycle).join(", ")).dim()
            )?;

            for hop in &cycle.hops {
                writeln!(
                    output,
                    "    {} {}{}",
                    style("→").dim(),
                    style(&hop.file_path).bold(),
                    style(format!(":{}", hop.line_number)).dim()
                )?;
                writeln!(output, "        {}", style(&hop.code).cyan())?;
            }

            if let Some(first) = cycle.hops.first() {
                writeln!(
                    output,
                    "    {} {}",
                    style("↩").dim(),
                    style(&first.file_path).dim()
                )?;
            }
            writeln!(output)?;
        }

        if limit < total_cycles {
            writeln!(
                output,
                "{} Showing {} of {} cycles. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(limit).yellow(),
                style(total_cycles).yellow()
            )?;
        }

        writeln!(output, "\n{} Hotspot directories:", style("📁").blue().bold())?;
        for (directory, count) in report.directory_counts() {
            writeln!(
                output,
                "    {} {} ({} {})",
                style("•").dim(),
                style(directory).bold(),
                style(count).yellow(),
                pluralize("import", count)
            )?;
        }

        writeln!(
            output,
            "\n{} To break a cycle, remove or invert at least one of its imports.",
            style("💡").yellow()
        )?;
        writeln!(
            output,
            "{} Consider moving shared code into a module that both sides can import.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::{CycleHop, CycleRecord};

    fn cycle(id: usize, paths: &[&str]) -> CycleRecord {
        CycleRecord {
            id,
            hops: paths
                .iter()
                .enumerate()
                .map(|(i, path)| CycleHop {
                    file_path: path.to_string(),
                    line_number: i + 1,
                    code: format!("import './{i}';"),
                })
                .collect(),
        }
    }

    fn plain(text: String) -> String {
        console::strip_ansi_codes(&text).into_owned()
    }

    #[test]
    fn test_no_cycles() {
        let report = CycleReport::new(4, vec![]);
        let output = plain(
            HumanReportGenerator::new(None)
                .generate_report(&report)
                .unwrap(),
        );

        assert!(output.contains("Processed 4 files"));
        assert!(output.contains("No circular imports detected"));
    }

    #[test]
    fn test_lists_every_hop() {
        let report = CycleReport::new(2, vec![cycle(1, &["src/a.ts", "src/b.ts"])]);
        let output = plain(
            HumanReportGenerator::new(None)
                .generate_report(&report)
                .unwrap(),
        );

        assert!(output.contains("Found 1 circular import:"));
        assert!(output.contains("Cycle #1 (2 files)"));
        assert!(output.contains("src/a.ts:1"));
        assert!(output.contains("src/b.ts:2"));
        assert!(output.contains("import './1';"));
        assert!(!output.contains("Showing"));
    }

    #[test]
    fn test_max_cycles_truncates() {
        let report = CycleReport::new(
            6,
            vec![
                cycle(1, &["a.ts", "b.ts"]),
                cycle(2, &["c.ts", "d.ts"]),
                cycle(3, &["e.ts", "f.ts"]),
            ],
        );
        let output = plain(
            HumanReportGenerator::new(Some(2))
                .generate_report(&report)
                .unwrap(),
        );

        assert!(output.contains("Cycle #2"));
        assert!(!output.contains("Cycle #3"));
        assert!(output.contains("Showing 2 of 3 cycles"));
    }

    #[test]
    fn test_hotspot_directories() {
        let report = CycleReport::new(
            5,
            vec![
                cycle(1, &["src/ui/a.ts", "lib/b.ts"]),
                cycle(2, &["src/ui/c.ts", "main.ts"]),
            ],
        );
        let output = plain(
            HumanReportGenerator::new(Some(1))
                .generate_report(&report)
                .unwrap(),
        );

        assert!(output.contains("📁 src/ui, lib"));
        assert!(output.contains("Hotspot directories:"));

        // Counts cover every cycle, not only the ones shown
        let hotspots = output.split("Hotspot directories:").nth(1).unwrap();
        let src_ui = hotspots.find("src/ui (2 imports)").unwrap();
        let lib = hotspots.find("lib (1 import)").unwrap();
        let root = hotspots.find("root (1 import)").unwrap();
        assert!(src_ui < lib && lib < root);
    }

    #[test]
    fn test_clean_run_has_no_hotspots() {
        let output = plain(
            HumanReportGenerator::new(None)
                .generate_report(&CycleReport::new(1, vec![]))
                .unwrap(),
        );

        assert!(!output.contains("Hotspot"));
    }
}
