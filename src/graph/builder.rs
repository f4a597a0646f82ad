use rayon::prelude::*;

use super::types::{ImportEdge, ImportGraph};
use crate::analyzer::{ImportResolver, ModulePathIndex, scan_file};
use crate::core::{ImportRecord, SourceFile};
use crate::diagnostics::{Diagnostics, Warning};
use crate::progress::ProgressReporter;

/// Builder for constructing import graphs
///
/// Scans every discovered file, resolves each import against a
/// [`ModulePathIndex`] built from the same file set, and records the
/// resulting edges. Nodes are exactly the discovered files, in order.
pub struct ImportGraphBuilder {
    graph: ImportGraph,
}

impl Default for ImportGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportGraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: ImportGraph::new(),
        }
    }

    /// Read and scan every file, then build the graph
    ///
    /// Files are scanned in parallel; results are gathered back in discovery
    /// order so that resolution and adjacency order stay reproducible.
    /// Unreadable files contribute no imports and a warning.
    pub fn build(
        &mut self,
        files: &[SourceFile],
        diagnostics: &mut Diagnostics,
        progress: Option<&mut ProgressReporter>,
    ) -> &ImportGraph {
        let bar = progress.map(|p| p.start_scanning(files.len()));

        let scanned: Vec<Result<Vec<ImportRecord>, Warning>> = files
            .par_iter()
            .map(|file| {
                let result = scan_file(file).map_err(|e| Warning {
                    path: file.location().to_path_buf(),
                    message: format!("Error reading file: {}", error_chain(&e)),
                });
                if let Some(pb) = bar.as_ref() {
                    pb.inc(1);
                }
                result
            })
            .collect();

        if let Some(pb) = bar {
            pb.finish_and_clear();
        }

        let mut imports = Vec::with_capacity(files.len());
        for result in scanned {
            match result {
                Ok(records) => imports.push(records),
                Err(warning) => {
                    diagnostics.extend([warning]);
                    imports.push(Vec::new());
                }
            }
        }

        self.build_from_imports(files, &imports)
    }

    /// Build the graph from already-extracted imports, `imports[i]` belonging
    /// to `files[i]`
    pub fn build_from_imports(
        &mut self,
        files: &[SourceFile],
        imports: &[Vec<ImportRecord>],
    ) -> &ImportGraph {
        let index = ModulePathIndex::build(files);
        let resolver = ImportResolver::new(&index);

        let nodes: Vec<_> = files
            .iter()
            .map(|file| self.graph.add_file(file.clone()))
            .collect();

        for ((file, &source), records) in files.iter().zip(&nodes).zip(imports) {
            for record in records {
                let Some(resolved) = resolver.resolve(&record.raw_path, file) else {
                    continue;
                };
                let Some(target) = self.graph.node_index(resolved.relative_path()) else {
                    continue;
                };

                self.graph.add_import(
                    source,
                    target,
                    ImportEdge {
                        line_number: record.line_number,
                        code: record.code.clone(),
                    },
                );
            }
        }

        &self.graph
    }

    pub fn into_graph(self) -> ImportGraph {
        self.graph
    }
}

fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Scan, resolve and assemble the import graph for `files`
pub fn build_graph(files: &[SourceFile], diagnostics: &mut Diagnostics) -> ImportGraph {
    let mut builder = ImportGraphBuilder::new();
    builder.build(files, diagnostics, None);
    builder.into_graph()
}
