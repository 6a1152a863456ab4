// src/graph/adjacency.rs
//! Owned adjacency-list graph storage.

use super::provider::{Connection, GraphProvider, NodeIndex};

/// Adjacency-list graph with a fixed index space and inactive slots.
///
/// Enumeration order is index order; outgoing order is insertion order. Both
/// are stable for the lifetime of an instance, which the trail algorithms
/// rely on for reproducible output.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    active: Vec<bool>,
    outgoing: Vec<Vec<Connection>>,
}

impl AdjacencyGraph {
    /// Creates a graph with `count` active nodes and no connections.
    #[must_use]
    pub fn with_nodes(count: usize) -> Self {
        Self {
            active: vec![true; count],
            outgoing: vec![Vec::new(); count],
        }
    }

    /// Adds one directed connection. Endpoints must lie inside the index
    /// space.
    pub fn add_connection(&mut self, from: NodeIndex, to: NodeIndex) {
        debug_assert!(from < self.active.len() && to < self.active.len());
        self.outgoing[from].push(Connection::new(from, to));
    }

    /// Adds both directions of a connection pair. This is the supported
    /// encoding for undirected structures.
    pub fn add_symmetric(&mut self, a: NodeIndex, b: NodeIndex) {
        self.add_connection(a, b);
        self.add_connection(b, a);
    }

    /// Marks a slot inactive. The slot keeps its index and its place in the
    /// index space; it stops appearing in enumeration.
    pub fn deactivate(&mut self, node: NodeIndex) {
        self.active[node] = false;
    }

    /// Total number of connections currently stored.
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.outgoing.iter().map(Vec::len).sum()
    }
}

impl GraphProvider for AdjacencyGraph {
    fn active_nodes(&self) -> Vec<NodeIndex> {
        (0..self.active.len()).filter(|&n| self.active[n]).collect()
    }

    fn outgoing(&self, node: NodeIndex) -> &[Connection] {
        &self.outgoing[node]
    }

    fn connections(&self) -> Vec<Connection> {
        self.outgoing.iter().flatten().copied().collect()
    }

    fn node_count(&self) -> usize {
        self.active.len()
    }

    fn remove_connection(&mut self, connection: Connection) {
        let list = &mut self.outgoing[connection.from];
        if let Some(pos) = list.iter().position(|c| *c == connection) {
            list.remove(pos);
        }
    }
}
