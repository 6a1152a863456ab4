// src/graph/eulerian/classifier.rs
//! Degree-parity classification of trail existence.

use serde::Serialize;

use super::connectivity;
use crate::graph::provider::GraphProvider;

/// Verdict on whether a graph carries an Eulerian trail or circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Eulerianity {
    NotEulerian,
    SemiEulerian,
    Eulerian,
}

impl Eulerianity {
    /// True when a trail exists and the walk will attempt one.
    #[must_use]
    pub fn has_trail(&self) -> bool {
        !matches!(self, Self::NotEulerian)
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotEulerian => "NOT_EULERIAN",
            Self::SemiEulerian => "SEMI_EULERIAN",
            Self::Eulerian => "EULERIAN",
        }
    }
}

/// Classifies a graph by outgoing-degree parity.
///
/// Outgoing degree stands in for total degree, which matches the classical
/// parity criterion when the provider stores every connection together with
/// its reverse (see [`AdjacencyGraph::add_symmetric`]). For a genuinely
/// asymmetric multigraph the verdict does not guarantee a realizable trail.
///
/// [`AdjacencyGraph::add_symmetric`]: crate::graph::adjacency::AdjacencyGraph::add_symmetric
#[must_use]
pub fn classify<G: GraphProvider>(graph: &G) -> Eulerianity {
    if !connectivity::is_connected(graph) {
        return Eulerianity::NotEulerian;
    }

    let nodes = graph.active_nodes();
    let odd_count = nodes
        .iter()
        .filter(|&&n| graph.outgoing(n).len() % 2 == 1)
        .count();

    if odd_count > 2 {
        return Eulerianity::NotEulerian;
    }
    // Exactly two odd nodes form a trail between them, unless the graph is
    // nothing but those two nodes.
    if odd_count == 2 && nodes.len() != 2 {
        return Eulerianity::SemiEulerian;
    }
    Eulerianity::Eulerian
}
