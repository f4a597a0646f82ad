//! JSON format report generation

use serde_json::json;

use super::{CycleReport, ReportGenerator, cycle_directories};
use crate::error::CarouselError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, report: &CycleReport) -> Result<String, CarouselError> {
        let cycles: Vec<_> = report
            .cycles
            .iter()
            .map(|cycle| {
                let hops: Vec<_> = cycle
                    .hops
                    .iter()
                    .map(|hop| {
                        json!({
                            "file_path": hop.file_path,
                            "line_number": hop.line_number,
                            "code": hop.code,
                        })
                    })
                    .collect();

                json!({
                    "id": cycle.id,
                    "files": cycle.file_paths(),
                    "directories": cycle_directories(cycle),
                    "hops": hops,
                })
            })
            .collect();

        let directories: Vec<_> = report
            .directory_counts()
            .into_iter()
            .map(|(directory, count)| json!({ "directory": directory, "count": count }))
            .collect();

        let output = json!({
            "processed_files": report.processed_files,
            "has_cycles": report.has_cycles(),
            "cycle_count": report.cycle_count(),
            "cycles": cycles,
            "directories": directories,
        });

        serde_json::to_string_pretty(&output).map_err(CarouselError::Json)
    }
}
