//! GitHub Actions format report generation

use std::fmt::Write;

use super::{CycleReport, ReportGenerator};
use crate::error::CarouselError;

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

/// Escape workflow-command message data
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow-command property value such as `file=` or `title=`
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, report: &CycleReport) -> Result<String, CarouselError> {
        let mut output = String::new();

        if !report.has_cycles() {
            writeln!(
                output,
                "::notice title=Import Check::No circular imports detected in {} files ✅",
                report.processed_files
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "::error title=Circular Imports::Found {} circular import{}",
            report.cycle_count(),
            if report.cycle_count() == 1 { "" } else { "s" }
        )?;

        for cycle in &report.cycles {
            let chain = escape_data(&cycle.file_paths().join(" → "));
            for hop in &cycle.hops {
                let file = escape_property(&hop.file_path);
                // Sentinel hops carry line 0, which annotations cannot point at
                if hop.line_number == 0 {
                    writeln!(
                        output,
                        "::warning file={file},title=Cycle {}::{chain}",
                        cycle.id
                    )?;
                } else {
                    writeln!(
                        output,
                        "::warning file={file},line={},title=Cycle {}::{chain}",
                        hop.line_number, cycle.id
                    )?;
                }
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::detector::{CycleHop, CycleRecord};

    #[test]
    fn test_clean_run_is_a_notice() {
        let output = GitHubReportGenerator::new()
            .generate_report(&CycleReport::new(3, vec![]))
            .unwrap();

        assert!(output.starts_with("::notice"));
        assert!(output.contains("3 files"));
    }

    #[test]
    fn test_one_annotation_per_hop() {
        let report = CycleReport::new(
            2,
            vec![CycleRecord {
                id: 1,
                hops: vec![
                    CycleHop {
                        file_path: "src/a.ts".to_string(),
                        line_number: 4,
                        code: "import './b';".to_string(),
                    },
                    CycleHop {
                        file_path: "src/b.ts".to_string(),
                        line_number: 0,
                        code: "unknown import".to_string(),
                    },
                ],
            }],
        );

        let output = GitHubReportGenerator::new().generate_report(&report).unwrap();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "::error title=Circular Imports::Found 1 circular import",
                "::warning file=src/a.ts,line=4,title=Cycle 1::src/a.ts → src/b.ts",
                "::warning file=src/b.ts,title=Cycle 1::src/a.ts → src/b.ts",
            ]
        );
    }

    #[test]
    fn test_annotation_values_are_escaped() {
        let report = CycleReport::new(
            2,
            vec![CycleRecord {
                id: 3,
                hops: vec![
                    CycleHop {
                        file_path: "src/a,b:c.ts".to_string(),
                        line_number: 1,
                        code: "import './100%';".to_string(),
                    },
                    CycleHop {
                        file_path: "src/100%.ts".to_string(),
                        line_number: 2,
                        code: "import './a,b:c';".to_string(),
                    },
                ],
            }],
        );

        let output = GitHubReportGenerator::new().generate_report(&report).unwrap();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(
            lines[1..].to_vec(),
            vec![
                "::warning file=src/a%2Cb%3Ac.ts,line=1,title=Cycle 3::src/a,b:c.ts → src/100%25.ts",
                "::warning file=src/100%25.ts,line=2,title=Cycle 3::src/a,b:c.ts → src/100%25.ts",
            ]
        );
    }

    #[test]
    fn test_escape_helpers() {
        assert_eq!(escape_data("50%\r\nok"), "50%25%0D%0Aok");
        assert_eq!(escape_property("a:b,c\n"), "a%3Ab%2Cc%0A");
    }
}
