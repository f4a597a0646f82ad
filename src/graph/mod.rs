//! # Import Graph Module
//!
//! This module builds the directed file-level import graph that cycle
//! detection runs on.
//!
//! ## Components
//!
//! - **ImportGraphBuilder**: scans files, resolves imports and assembles the
//!   graph
//! - **ImportGraph**: node set, ordered adjacency and per-pair edge metadata
//! - **ImportEdge**: the line number and source text that created an edge
//!
//! ## Example
//!
//! ```
//! use import_carousel::analyzer::extract_imports;
//! use import_carousel::core::SourceFile;
//! use import_carousel::graph::ImportGraphBuilder;
//!
//! let files = vec![
//!     SourceFile::from_relative("src/api.ts"),
//!     SourceFile::from_relative("src/db.ts"),
//! ];
//! let imports = vec![
//!     extract_imports("import { query } from './db';"),
//!     extract_imports("import express from 'express';"),
//! ];
//!
//! let mut builder = ImportGraphBuilder::new();
//! let graph = builder.build_from_imports(&files, &imports);
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! ```

mod builder;
mod types;

pub use builder::{ImportGraphBuilder, build_graph};
pub use types::{ImportEdge, ImportGraph};
