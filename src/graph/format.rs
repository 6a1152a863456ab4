// src/graph/format.rs
//! On-disk JSON description of a graph.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::adjacency::AdjacencyGraph;
use super::provider::{Connection, NodeIndex};
use crate::error::{Result, TrailmarkError};

/// Serde model of a graph file.
///
/// `node_count` is the capacity of the index space, `inactive` lists slots
/// excluded from enumeration, and `connections` may contain parallel
/// duplicates. Connection order in the file is the provider order the
/// algorithms observe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphFile {
    pub node_count: usize,
    #[serde(default)]
    pub inactive: Vec<NodeIndex>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl GraphFile {
    /// Reads and parses a graph file.
    ///
    /// # Errors
    /// Returns `Io` when the file cannot be read and `Parse` when it is not
    /// valid JSON for this model; both carry the offending path.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| TrailmarkError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        serde_json::from_str(&raw).map_err(|source| TrailmarkError::Parse {
            source,
            path: path.to_path_buf(),
        })
    }

    /// Builds the adjacency storage described by this file.
    ///
    /// # Errors
    /// Returns `Malformed` when an inactive slot or a connection endpoint
    /// lies outside `0..node_count`.
    pub fn build(&self) -> Result<AdjacencyGraph> {
        let mut graph = AdjacencyGraph::with_nodes(self.node_count);

        for &slot in &self.inactive {
            if slot >= self.node_count {
                return Err(TrailmarkError::Malformed(format!(
                    "inactive slot {slot} outside index space 0..{}",
                    self.node_count
                )));
            }
            graph.deactivate(slot);
        }

        for connection in &self.connections {
            if connection.from >= self.node_count || connection.to >= self.node_count {
                return Err(TrailmarkError::Malformed(format!(
                    "connection {} -> {} outside index space 0..{}",
                    connection.from, connection.to, self.node_count
                )));
            }
            graph.add_connection(connection.from, connection.to);
        }

        Ok(graph)
    }
}

/// Loads a graph file and builds its storage in one step.
///
/// # Errors
/// Propagates [`GraphFile::load`] and [`GraphFile::build`] errors.
pub fn load_graph(path: &Path) -> Result<AdjacencyGraph> {
    GraphFile::load(path)?.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::provider::GraphProvider;

    #[test]
    fn test_build_applies_inactive_and_connections() {
        let file = GraphFile {
            node_count: 4,
            inactive: vec![3],
            connections: vec![Connection::new(0, 1), Connection::new(1, 2)],
        };

        let graph = file.build().unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.active_nodes(), vec![0, 1, 2]);
        assert_eq!(graph.connection_count(), 2);
    }

    #[test]
    fn test_build_rejects_out_of_range_endpoint() {
        let file = GraphFile {
            node_count: 2,
            inactive: Vec::new(),
            connections: vec![Connection::new(0, 5)],
        };

        let err = file.build().unwrap_err();
        assert!(matches!(err, TrailmarkError::Malformed(_)));
    }

    #[test]
    fn test_build_rejects_out_of_range_inactive_slot() {
        let file = GraphFile {
            node_count: 2,
            inactive: vec![2],
            connections: Vec::new(),
        };

        let err = file.build().unwrap_err();
        assert!(matches!(err, TrailmarkError::Malformed(_)));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let file: GraphFile = serde_json::from_str(r#"{"node_count": 3}"#).unwrap();
        assert!(file.inactive.is_empty());
        assert!(file.connections.is_empty());
    }
}
