// src/graph/eulerian/mod.rs
//! Eulerian trail analysis over any [`GraphProvider`].
//!
//! Classification answers whether a trail exists; the walk constructs one
//! concrete trail on a private clone of the graph.

pub mod classifier;
mod connectivity;
pub mod walk;

pub use classifier::{classify, Eulerianity};
pub use walk::find_trail;

use crate::graph::provider::{GraphProvider, NodeIndex};

/// Read-only analysis facade over a borrowed graph.
///
/// Classification reads the borrow; trail construction clones it, so the
/// caller's graph is never mutated.
pub struct EulerianAnalysis<'g, G: GraphProvider> {
    graph: &'g G,
}

impl<'g, G: GraphProvider> EulerianAnalysis<'g, G> {
    #[must_use]
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Classifies the graph. See [`classify`].
    #[must_use]
    pub fn classify(&self) -> Eulerianity {
        classifier::classify(self.graph)
    }

    /// Builds one trail for the given classification. See [`find_trail`].
    #[must_use]
    pub fn find_trail(&self, eulerianity: Eulerianity) -> Vec<NodeIndex> {
        walk::find_trail(self.graph, eulerianity)
    }
}
