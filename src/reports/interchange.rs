//! Raw interchange artifact: writer and parser
//!
//! Layout (leading spaces are significant only to humans; the parser anchors
//! on the patterns below):
//!
//! ```text
//!  Running import-carousel analyzer
//!
//!  Processed 3 files
//!
//!  ✖ (1) circular dependencies found
//!
//!
//!  1.
//!
//!  -> a.ts (line 1): import './b';
//!  -> b.ts (line 2): import './a';
//! ```

use std::fmt::Write;
use std::sync::OnceLock;

use regex::Regex;

use super::{CycleReport, ReportGenerator};
use crate::detector::{CycleHop, CycleRecord};
use crate::error::CarouselError;

pub struct InterchangeReportGenerator;

impl Default for InterchangeReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl InterchangeReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for InterchangeReportGenerator {
    fn generate_report(&self, report: &CycleReport) -> Result<String, CarouselError> {
        let mut output = String::new();

        write!(
            output,
            "\n Running import-carousel analyzer\n\n Processed {} files\n\n ✖ ({}) circular \
             dependencies found\n\n",
            report.processed_files,
            report.cycle_count()
        )?;

        for (i, cycle) in report.cycles.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            write!(output, "\n {}. \n\n", cycle.id)?;
            for (j, hop) in cycle.hops.iter().enumerate() {
                if j > 0 {
                    output.push('\n');
                }
                write!(
                    output,
                    " -> {} (line {}): {}",
                    hop.file_path, hop.line_number, hop.code
                )?;
            }
            output.push('\n');
        }

        output.push('\n');
        Ok(output)
    }
}

/// A parsed interchange artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInterchange {
    /// From the " Processed <N> files" header, when present
    pub processed_files: Option<usize>,
    /// From the "(<N>) circular dependencies found" line
    pub total_cycles: usize,
    pub cycles: Vec<CycleRecord>,
}

impl ParsedInterchange {
    pub fn into_report(self) -> CycleReport {
        CycleReport::new(self.processed_files.unwrap_or(0), self.cycles)
    }
}

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

fn regex_processed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"Processed (\d+) files"))
}

fn regex_total() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"\((\d+)\) circular dependencies found"))
}

fn regex_cycle_start() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"^\s*(\d+)\.\s*$"))
}

fn regex_hop() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"^\s*-> (.+) \(line (\d+)\): (.+)$"))
}

fn parse_number(text: &str, line: usize) -> Result<usize, CarouselError> {
    text.parse()
        .map_err(|e| CarouselError::InterchangeParseError {
            line,
            message: format!("invalid number '{text}': {e}"),
        })
}

/// Parse an interchange artifact back into cycle records
///
/// Hop lines that appear before the first cycle header are ignored. A file
/// without the circular-dependency summary line is rejected.
pub fn parse_interchange(text: &str) -> Result<ParsedInterchange, CarouselError> {
    let mut processed_files = None;
    let mut total_cycles = None;
    let mut cycles: Vec<CycleRecord> = Vec::new();
    let mut line_count = 0;

    for (idx, raw_line) in text.split('\n').enumerate() {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        let line_number = idx + 1;
        line_count = line_number;

        if let Some(caps) = regex_cycle_start().captures(line) {
            cycles.push(CycleRecord {
                id: parse_number(&caps[1], line_number)?,
                hops: Vec::new(),
            });
            continue;
        }

        if let Some(caps) = regex_hop().captures(line) {
            if let Some(current) = cycles.last_mut() {
                current.hops.push(CycleHop {
                    file_path: caps[1].to_string(),
                    line_number: parse_number(&caps[2], line_number)?,
                    code: caps[3].to_string(),
                });
            }
            continue;
        }

        if total_cycles.is_none()
            && let Some(caps) = regex_total().captures(line)
        {
            total_cycles = Some(parse_number(&caps[1], line_number)?);
            continue;
        }

        if processed_files.is_none()
            && let Some(caps) = regex_processed().captures(line)
        {
            processed_files = Some(parse_number(&caps[1], line_number)?);
        }
    }

    let total_cycles = total_cycles.ok_or_else(|| CarouselError::InterchangeParseError {
        line: line_count,
        message: "missing '(<N>) circular dependencies found' summary line".to_string(),
    })?;

    Ok(ParsedInterchange {
        processed_files,
        total_cycles,
        cycles,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn hop(file_path: &str, line_number: usize, code: &str) -> CycleHop {
        CycleHop {
            file_path: file_path.to_string(),
            line_number,
            code: code.to_string(),
        }
    }

    fn sample_report() -> CycleReport {
        CycleReport::new(
            12,
            vec![
                CycleRecord {
                    id: 1,
                    hops: vec![
                        hop("src/a.ts", 1, "import { b } from './b';"),
                        hop("src/b.ts", 4, "const a = require('./a');"),
                    ],
                },
                CycleRecord {
                    id: 2,
                    hops: vec![
                        hop("packages/ui/index.ts", 2, "import theme from 'theme';"),
                        hop("packages/theme/index.ts", 7, "import { Button } from 'ui';"),
                        hop("packages/theme/colors (v2).ts", 1, "import './index';"),
                    ],
                },
            ],
        )
    }

    #[test]
    fn test_exact_layout() {
        let report = CycleReport::new(
            3,
            vec![CycleRecord {
                id: 1,
                hops: vec![hop("a.ts", 1, "import './b';"), hop("b.ts", 2, "import './a';")],
            }],
        );

        let text = InterchangeReportGenerator::new()
            .generate_report(&report)
            .unwrap();

        assert_eq!(
            text,
            "\n Running import-carousel analyzer\n\n Processed 3 files\n\n ✖ (1) circular \
             dependencies found\n\n\n 1. \n\n -> a.ts (line 1): import './b';\n -> b.ts (line \
             2): import './a';\n\n"
        );
    }

    #[test]
    fn test_written_report_parses_back() {
        let report = sample_report();
        let text = InterchangeReportGenerator::new()
            .generate_report(&report)
            .unwrap();

        let parsed = parse_interchange(&text).unwrap();

        assert_eq!(parsed.processed_files, Some(12));
        assert_eq!(parsed.total_cycles, 2);
        assert_eq!(parsed.into_report(), report);
    }

    #[test]
    fn test_empty_report() {
        let text = InterchangeReportGenerator::new()
            .generate_report(&CycleReport::new(5, vec![]))
            .unwrap();

        assert!(text.contains(" ✖ (0) circular dependencies found"));
        let parsed = parse_interchange(&text).unwrap();
        assert_eq!(parsed.total_cycles, 0);
        assert!(parsed.cycles.is_empty());
    }

    #[test]
    fn test_parses_crlf_and_ignores_stray_hops() {
        let text = " -> stray.ts (line 1): import 'x';\r\n ✖ (1) circular dependencies \
                    found\r\n 7.\r\n -> a.js (line 3): require('./b')\r\n";

        let parsed = parse_interchange(text).unwrap();

        assert_eq!(parsed.processed_files, None);
        assert_eq!(parsed.cycles.len(), 1);
        assert_eq!(parsed.cycles[0].id, 7);
        assert_eq!(parsed.cycles[0].hops, vec![hop("a.js", 3, "require('./b')")]);
    }

    #[test]
    fn test_rejects_text_without_summary() {
        let err = parse_interchange("hello\nworld\n").unwrap_err();

        assert!(matches!(
            err,
            CarouselError::InterchangeParseError { line: 3, .. }
        ));
    }
}
