// src/analysis.rs
//! Per-file trail analysis and the parallel batch engine.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::graph::format;
use crate::graph::{classify, find_trail, Eulerianity, GraphProvider, NodeIndex};

/// Analysis outcome for one graph file.
#[derive(Debug, Clone, Serialize)]
pub struct GraphReport {
    pub path: PathBuf,
    pub node_count: usize,
    pub active_nodes: usize,
    pub connection_count: usize,
    pub eulerianity: Eulerianity,
    pub trail: Vec<NodeIndex>,
}

/// Loads, classifies, and walks a single graph file.
///
/// # Errors
/// Propagates load, parse, and validation errors from the graph file layer.
pub fn analyze_file(path: &Path) -> Result<GraphReport> {
    let graph = format::load_graph(path)?;
    let eulerianity = classify(&graph);
    let trail = find_trail(&graph, eulerianity);

    Ok(GraphReport {
        path: path.to_path_buf(),
        node_count: graph.node_count(),
        active_nodes: graph.active_nodes().len(),
        connection_count: graph.connection_count(),
        eulerianity,
        trail,
    })
}

/// Analyzes many graph files on the rayon pool, preserving input order.
///
/// Every file gets its own graph and its own clone inside the walk, so the
/// per-file work shares nothing mutable.
#[must_use]
pub fn analyze_all(paths: &[PathBuf]) -> Vec<(PathBuf, Result<GraphReport>)> {
    paths
        .par_iter()
        .map(|path| (path.clone(), analyze_file(path)))
        .collect()
}
