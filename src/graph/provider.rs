// src/graph/provider.rs
//! Capability contract the trail algorithms require from a graph store.

use serde::{Deserialize, Serialize};

/// Stable position of a node inside a graph's index space.
pub type NodeIndex = usize;

/// A directed connection between two node indices.
///
/// Parallel connections between the same ordered pair are permitted; each is
/// a distinct traversable instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub from: NodeIndex,
    pub to: NodeIndex,
}

impl Connection {
    #[must_use]
    pub fn new(from: NodeIndex, to: NodeIndex) -> Self {
        Self { from, to }
    }
}

/// Storage-agnostic capability set consumed by the trail algorithms.
///
/// Implementors own their storage. `Clone` must produce a deep,
/// independently mutable copy whose nodes keep the same indices; removing a
/// connection on the copy must not be observable on the source.
pub trait GraphProvider: Clone {
    /// Active node indices, in stable enumeration order.
    fn active_nodes(&self) -> Vec<NodeIndex>;

    /// Outgoing connections of `node`, in stable provider order.
    fn outgoing(&self, node: NodeIndex) -> &[Connection];

    /// Every connection in the graph.
    fn connections(&self) -> Vec<Connection>;

    /// Capacity of the index space. At least `active_nodes().len()`, larger
    /// when inactive slots exist.
    fn node_count(&self) -> usize;

    /// Removes exactly one instance of `connection` from its source node's
    /// outgoing set. Removing a connection that is not present is a caller
    /// contract violation; implementors may ignore it.
    fn remove_connection(&mut self, connection: Connection);
}
