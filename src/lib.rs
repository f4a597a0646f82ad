//! # Import Carousel - Detect Circular Imports in JavaScript and TypeScript
//!
//! Import Carousel walks a project tree, extracts ES-module `import` and
//! CommonJS `require` statements from every `.js`, `.jsx`, `.ts` and `.tsx`
//! file, resolves them to files inside the project and reports the import
//! cycles it finds. Every hop of a reported cycle carries the line number and
//! source text of the import that creates it.
//!
//! ## Main Components
//!
//! - **Discovery**: walks the root, skipping dependency and build output
//!   directories and `.d.ts` declaration files
//! - **Analyzer**: import extraction, the module path index and the resolver
//! - **Graph**: the directed file-level import graph
//! - **Detector**: depth-first cycle search
//! - **Reports**: human, JSON, GitHub annotations and the raw interchange text
//!
//! ## Usage
//!
//! ```no_run
//! use import_carousel::diagnostics::Diagnostics;
//! use import_carousel::reports::{CycleReport, HumanReportGenerator, ReportGenerator};
//! use import_carousel::{build_graph, discover_files, find_cycles};
//!
//! # fn main() -> miette::Result<()> {
//! let mut diagnostics = Diagnostics::new();
//!
//! // Step 1: Discover every source file under the project root
//! let files = discover_files("/path/to/web-app", None, &mut diagnostics)?;
//!
//! // Step 2: Extract and resolve imports into a graph
//! let graph = build_graph(&files, &mut diagnostics);
//!
//! // Step 3: Find the cycles
//! let cycles = find_cycles(&graph);
//!
//! for cycle in &cycles {
//!     println!("Cycle #{}: {}", cycle.id, cycle.file_paths().join(" -> "));
//! }
//!
//! // Step 4: Render a report
//! let report = CycleReport::new(files.len(), cycles);
//! println!("{}", HumanReportGenerator::new(Some(5)).generate_report(&report)?);
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Round-tripping the interchange artifact
//!
//! ```
//! use import_carousel::detector::{CycleHop, CycleRecord};
//! use import_carousel::reports::{
//!     CycleReport, InterchangeReportGenerator, ReportGenerator, parse_interchange,
//! };
//!
//! # fn main() -> miette::Result<()> {
//! let report = CycleReport::new(
//!     2,
//!     vec![CycleRecord {
//!         id: 1,
//!         hops: vec![
//!             CycleHop {
//!                 file_path: "a.ts".into(),
//!                 line_number: 1,
//!                 code: "import './b';".into(),
//!             },
//!             CycleHop {
//!                 file_path: "b.ts".into(),
//!                 line_number: 1,
//!                 code: "import './a';".into(),
//!             },
//!         ],
//!     }],
//! );
//!
//! let text = InterchangeReportGenerator::new().generate_report(&report)?;
//! assert!(text.contains("(1) circular dependencies found"));
//!
//! let parsed = parse_interchange(&text)?;
//! assert_eq!(parsed.into_report(), report);
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod diagnostics;
pub mod discovery;
pub mod error;
pub mod executors;
pub mod graph;
pub mod reports;

pub use detector::find_cycles;
pub use discovery::discover_files;
pub use graph::build_graph;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli.command)
}
