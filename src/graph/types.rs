//! Core graph types
//!
//! This module contains the fundamental data structures used in the import
//! graph.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::core::SourceFile;

/// Evidence for one file importing another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEdge {
    pub line_number: usize,
    pub code: String,
}

/// Directed import graph over every discovered file
///
/// The petgraph storage holds exactly one edge per ordered (source, target)
/// pair, carrying the metadata of the first import that produced it. The
/// adjacency list keeps every resolved import occurrence, duplicates included,
/// in extraction order; traversal follows the adjacency list.
#[derive(Debug, Clone, Default)]
pub struct ImportGraph {
    graph: DiGraph<SourceFile, ImportEdge>,
    adjacency: Vec<Vec<NodeIndex>>,
    node_lookup: HashMap<String, NodeIndex>,
}

impl ImportGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file as a node; adding the same path twice returns the first node
    pub fn add_file(&mut self, file: SourceFile) -> NodeIndex {
        if let Some(&idx) = self.node_lookup.get(file.relative_path()) {
            return idx;
        }

        let key = file.relative_path().to_string();
        let idx = self.graph.add_node(file);
        self.adjacency.push(Vec::new());
        self.node_lookup.insert(key, idx);
        idx
    }

    /// Record one import occurrence from `source` to `target`
    ///
    /// Self-imports are dropped. The first occurrence of a pair keeps its
    /// metadata; later occurrences only extend the adjacency list. Returns
    /// whether anything was recorded.
    pub fn add_import(&mut self, source: NodeIndex, target: NodeIndex, edge: ImportEdge) -> bool {
        if source == target {
            return false;
        }

        self.adjacency[source.index()].push(target);
        if self.graph.find_edge(source, target).is_none() {
            self.graph.add_edge(source, target, edge);
        }
        true
    }

    pub fn graph(&self) -> &DiGraph<SourceFile, ImportEdge> {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct ordered (source, target) pairs
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of resolved import occurrences, duplicates included
    pub fn import_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Node indices in discovery order
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn files(&self) -> impl Iterator<Item = &SourceFile> + '_ {
        self.graph.node_weights()
    }

    pub fn file(&self, idx: NodeIndex) -> &SourceFile {
        &self.graph[idx]
    }

    pub fn node_index(&self, relative_path: &str) -> Option<NodeIndex> {
        self.node_lookup.get(relative_path).copied()
    }

    /// Outgoing import targets of `idx` in extraction order
    pub fn targets(&self, idx: NodeIndex) -> &[NodeIndex] {
        &self.adjacency[idx.index()]
    }

    pub fn edge_metadata(&self, source: NodeIndex, target: NodeIndex) -> Option<&ImportEdge> {
        self.graph
            .find_edge(source, target)
            .map(|edge| &self.graph[edge])
    }
}
