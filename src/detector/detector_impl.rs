use std::collections::HashSet;

use petgraph::algo::tarjan_scc;
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

use crate::constants::sentinel::{UNKNOWN_IMPORT, UNKNOWN_LINE};
use crate::graph::ImportGraph;

/// How cycles are enumerated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CycleSearchMode {
    /// Single depth-first pass; files are never re-entered once finished, so
    /// some overlapping cycles go unreported
    #[default]
    Traversal,
    /// Every elementary cycle exactly once; can be slow on dense graphs
    Exhaustive,
}

/// One step of a cycle: the importing file and the statement that imports
/// the next file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleHop {
    pub file_path: String,
    pub line_number: usize,
    pub code: String,
}

/// A reported cycle; ids start at 1 in discovery order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleRecord {
    pub id: usize,
    pub hops: Vec<CycleHop>,
}

impl CycleRecord {
    pub fn file_paths(&self) -> Vec<&str> {
        self.hops.iter().map(|h| h.file_path.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }
}

/// Detector for finding import cycles in a file graph
pub struct CycleDetector {
    mode: CycleSearchMode,
    cycles: Vec<CycleRecord>,
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleDetector {
    /// Create a detector using the traversal policy
    pub fn new() -> Self {
        Self::with_mode(CycleSearchMode::Traversal)
    }

    pub fn with_mode(mode: CycleSearchMode) -> Self {
        Self {
            mode,
            cycles: Vec::new(),
        }
    }

    pub fn mode(&self) -> CycleSearchMode {
        self.mode
    }

    /// Detect cycles in the graph and annotate every hop with its import
    pub fn detect_cycles(&mut self, graph: &ImportGraph) -> &[CycleRecord] {
        let raw_cycles = match self.mode {
            CycleSearchMode::Traversal => traversal_cycles(graph),
            CycleSearchMode::Exhaustive => exhaustive_cycles(graph),
        };

        let offset = self.cycles.len();
        self.cycles.extend(
            raw_cycles
                .iter()
                .enumerate()
                .map(|(i, raw)| annotate(graph, offset + i + 1, raw)),
        );

        &self.cycles
    }

    /// Get all detected cycles
    pub fn cycles(&self) -> &[CycleRecord] {
        &self.cycles
    }

    /// Check if any cycles were detected
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Get the number of detected cycles
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    pub fn into_cycles(self) -> Vec<CycleRecord> {
        self.cycles
    }
}

/// Enumerate cycles with the traversal policy and annotate them
pub fn find_cycles(graph: &ImportGraph) -> Vec<CycleRecord> {
    let mut detector = CycleDetector::new();
    detector.detect_cycles(graph);
    detector.into_cycles()
}

struct Frame {
    node: NodeIndex,
    next: usize,
}

/// Depth-first enumeration with a global visited set
///
/// Frames on the work stack are exactly the current branch, so the branch
/// path is read off the stack. Reaching a node that is on the branch closes a
/// cycle from that node's position to the end; reaching a finished node stops.
/// Start nodes are taken in node order, children in adjacency order.
fn traversal_cycles(graph: &ImportGraph) -> Vec<Vec<NodeIndex>> {
    let node_count = graph.node_count();
    let mut visited = vec![false; node_count];
    let mut on_stack = vec![false; node_count];
    let mut frames: Vec<Frame> = Vec::new();
    let mut cycles = Vec::new();

    for start in graph.node_indices() {
        if visited[start.index()] {
            continue;
        }

        visited[start.index()] = true;
        on_stack[start.index()] = true;
        frames.push(Frame {
            node: start,
            next: 0,
        });

        while let Some(frame) = frames.last_mut() {
            let Some(&child) = graph.targets(frame.node).get(frame.next) else {
                on_stack[frame.node.index()] = false;
                frames.pop();
                continue;
            };
            frame.next += 1;

            if on_stack[child.index()] {
                if let Some(pos) = frames.iter().position(|f| f.node == child) {
                    let mut cycle: Vec<NodeIndex> = frames[pos..].iter().map(|f| f.node).collect();
                    cycle.push(child);
                    cycles.push(cycle);
                }
            } else if !visited[child.index()] {
                visited[child.index()] = true;
                on_stack[child.index()] = true;
                frames.push(Frame {
                    node: child,
                    next: 0,
                });
            }
        }
    }

    cycles
}

struct PathFrame {
    node: NodeIndex,
    targets: Vec<NodeIndex>,
    next: usize,
}

/// Every elementary cycle, each reported once from its lowest-index node
///
/// The search is confined to strongly connected components. For a root `r`,
/// only component members with index >= `r` are walked, which rules out
/// rotations of cycles already reported from a smaller root.
fn exhaustive_cycles(graph: &ImportGraph) -> Vec<Vec<NodeIndex>> {
    let mut components: Vec<Vec<NodeIndex>> = tarjan_scc(graph.graph())
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .map(|mut scc| {
            scc.sort();
            scc
        })
        .collect();
    components.sort_by_key(|scc| scc[0]);

    let mut component_of = vec![usize::MAX; graph.node_count()];
    for (c, scc) in components.iter().enumerate() {
        for node in scc {
            component_of[node.index()] = c;
        }
    }

    let unique_targets = |node: NodeIndex, root: NodeIndex| -> Vec<NodeIndex> {
        let mut seen = HashSet::new();
        graph
            .targets(node)
            .iter()
            .copied()
            .filter(|t| {
                component_of[t.index()] == component_of[root.index()]
                    && t.index() >= root.index()
                    && seen.insert(*t)
            })
            .collect()
    };

    let mut cycles = Vec::new();
    let mut on_path = vec![false; graph.node_count()];

    for scc in &components {
        for &root in scc {
            on_path[root.index()] = true;
            let mut frames = vec![PathFrame {
                node: root,
                targets: unique_targets(root, root),
                next: 0,
            }];

            while let Some(frame) = frames.last_mut() {
                let Some(&child) = frame.targets.get(frame.next) else {
                    on_path[frame.node.index()] = false;
                    frames.pop();
                    continue;
                };
                frame.next += 1;

                if child == root {
                    let mut cycle: Vec<NodeIndex> = frames.iter().map(|f| f.node).collect();
                    cycle.push(root);
                    cycles.push(cycle);
                } else if !on_path[child.index()] {
                    on_path[child.index()] = true;
                    frames.push(PathFrame {
                        node: child,
                        targets: unique_targets(child, root),
                        next: 0,
                    });
                }
            }
        }
    }

    cycles
}

/// Attach the import evidence for each consecutive pair of a closed node list
fn annotate(graph: &ImportGraph, id: usize, raw: &[NodeIndex]) -> CycleRecord {
    let hops = raw
        .windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            let file_path = graph.file(from).relative_path().to_string();
            match graph.edge_metadata(from, to) {
                Some(edge) => CycleHop {
                    file_path,
                    line_number: edge.line_number,
                    code: edge.code.clone(),
                },
                None => CycleHop {
                    file_path,
                    line_number: UNKNOWN_LINE,
                    code: UNKNOWN_IMPORT.to_string(),
                },
            }
        })
        .collect();

    CycleRecord { id, hops }
}
