//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - github: GitHub Actions annotations pointing at each import line
//! - interchange: the raw text artifact consumed by downstream renderers,
//!   plus its parser

pub mod github;
pub mod human;
pub mod interchange;
pub mod json;

use std::collections::HashMap;

use crate::constants::output::ROOT_DIRECTORY;
use crate::detector::CycleRecord;
use crate::error::CarouselError;

/// Everything a report needs: how many files were processed and which
/// cycles were found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub processed_files: usize,
    pub cycles: Vec<CycleRecord>,
}

impl CycleReport {
    pub fn new(processed_files: usize, cycles: Vec<CycleRecord>) -> Self {
        Self {
            processed_files,
            cycles,
        }
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    /// How many hops across all cycles fall in each directory, busiest first
    ///
    /// Ties keep alphabetical order.
    pub fn directory_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for hop in self.cycles.iter().flat_map(|c| &c.hops) {
            *counts.entry(directory_of(&hop.file_path)).or_default() += 1;
        }

        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        counts
    }
}

/// Grouping key for a root-relative path: its first two directory levels,
/// its only directory, or `root` for a top-level file
pub fn directory_of(file_path: &str) -> &str {
    let mut slashes = file_path.match_indices('/').map(|(i, _)| i);
    match (slashes.next(), slashes.next()) {
        (None, _) => ROOT_DIRECTORY,
        (Some(first), None) => &file_path[..first],
        (Some(_), Some(second)) => &file_path[..second],
    }
}

/// Directories a cycle passes through, in order of first appearance
pub fn cycle_directories(cycle: &CycleRecord) -> Vec<&str> {
    let mut directories: Vec<&str> = Vec::new();
    for hop in &cycle.hops {
        let directory = directory_of(&hop.file_path);
        if !directories.contains(&directory) {
            directories.push(directory);
        }
    }
    directories
}

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from cycle detection results
    fn generate_report(&self, report: &CycleReport) -> Result<String, CarouselError>;
}

// Re-export for convenience
pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use interchange::{InterchangeReportGenerator, ParsedInterchange, parse_interchange};
pub use json::JsonReportGenerator;
