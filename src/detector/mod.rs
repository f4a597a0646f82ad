//! # Cycle Detection Module
//!
//! This module finds circular imports in the file graph and attaches the
//! import statement behind every hop.
//!
//! ## Algorithm
//!
//! The default [`CycleSearchMode::Traversal`] is a single depth-first pass
//! with a global visited set. It is deliberately not a complete enumerator:
//! once a file's subtree is finished it is never entered again, so a cycle
//! that could only be reached through a finished file goes unreported, and a
//! cycle closed by several import statements is reported once per statement.
//! Reported counts depend on this policy.
//!
//! [`CycleSearchMode::Exhaustive`] is an explicit alternative that restricts
//! the search to strongly connected components (Tarjan's algorithm) and
//! reports every elementary cycle exactly once.
//!
//! ## Key Components
//!
//! - **CycleDetector**: runs the selected search over an [`ImportGraph`]
//! - **CycleRecord**: a reported cycle with its id and hops
//! - **CycleHop**: file path, line number and source text of one import
//!
//! ## Example
//!
//! ```
//! use import_carousel::core::SourceFile;
//! use import_carousel::detector::CycleDetector;
//! use import_carousel::graph::{ImportEdge, ImportGraph};
//!
//! let mut graph = ImportGraph::new();
//! let a = graph.add_file(SourceFile::from_relative("a.ts"));
//! let b = graph.add_file(SourceFile::from_relative("b.ts"));
//! graph.add_import(a, b, ImportEdge { line_number: 1, code: "import './b';".into() });
//! graph.add_import(b, a, ImportEdge { line_number: 3, code: "import './a';".into() });
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&graph);
//!
//! assert!(detector.has_cycles());
//! assert_eq!(detector.cycles()[0].file_paths(), vec!["a.ts", "b.ts"]);
//! assert_eq!(detector.cycles()[0].hops[1].line_number, 3);
//! ```
//!
//! [`ImportGraph`]: crate::graph::ImportGraph

mod detector_impl;

pub use detector_impl::*;
