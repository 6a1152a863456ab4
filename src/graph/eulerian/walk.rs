// src/graph/eulerian/walk.rs
//! Stack-based trail construction (Hierholzer's algorithm).

use super::classifier::Eulerianity;
use crate::graph::provider::{GraphProvider, NodeIndex};

/// Builds one concrete trail that traverses every connection exactly once.
///
/// `eulerianity` must be the verdict of `classify` for this graph; it is
/// trusted, not recomputed. `NotEulerian` short-circuits to an empty vec
/// without cloning. Otherwise the walk consumes connections on a private
/// clone, so the borrowed graph is never mutated.
///
/// When the classification does not actually hold for the graph, the
/// returned sequence is unspecified: it may be incomplete or contain
/// consecutive pairs that are not connections.
#[must_use]
pub fn find_trail<G: GraphProvider>(graph: &G, eulerianity: Eulerianity) -> Vec<NodeIndex> {
    if !eulerianity.has_trail() {
        return Vec::new();
    }

    let mut scratch = graph.clone();
    let Some(mut current) = start_node(&scratch, eulerianity) else {
        return Vec::new();
    };

    let mut backtrack: Vec<NodeIndex> = Vec::new();
    let mut trail = Vec::new();

    loop {
        match scratch.outgoing(current).first().copied() {
            Some(connection) => {
                // Consume the first outgoing connection and follow it.
                backtrack.push(current);
                scratch.remove_connection(connection);
                current = connection.to;
            }
            None => {
                // Dead end: record the node and back up. An exhausted
                // backtrack stack means the walk is complete.
                trail.push(current);
                match backtrack.pop() {
                    Some(node) => current = node,
                    None => break,
                }
            }
        }
    }

    // Dead ends were recorded first; the trail reads start-to-end reversed.
    trail.reverse();
    trail
}

/// Picks the starting node for the walk.
///
/// Eulerian graphs close their trail, so any node works and the first
/// enumerated one keeps the output deterministic. Semi-Eulerian graphs must
/// start at an odd node; the LAST enumerated odd node is chosen, and the
/// trail ends at the other one.
fn start_node<G: GraphProvider>(graph: &G, eulerianity: Eulerianity) -> Option<NodeIndex> {
    let nodes = graph.active_nodes();
    match eulerianity {
        Eulerianity::SemiEulerian => nodes
            .into_iter()
            .filter(|&n| graph.outgoing(n).len() % 2 == 1)
            .last(),
        _ => nodes.first().copied(),
    }
}
