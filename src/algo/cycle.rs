//! Cycle detection for directed and undirected graphs.

use std::collections::HashMap;
use tracing::trace;

use super::traversal::dfs;
use crate::graph::Neighbors;

/// Returns true if the directed graph contains a cycle.
///
/// A vertex lies on a cycle exactly when some vertex reachable from it
/// has an edge back to it, so one depth-first search per vertex decides
/// the question.
pub fn has_directed_cycle<G: Neighbors>(graph: &G) -> bool {
    graph.vertices().iter().any(|root| {
        let found = dfs(graph, root, None)
            .iter()
            .any(|vertex| graph.has_edge(vertex, root));
        if found {
            trace!("cycle found through a vertex with a back edge");
        }
        found
    })
}

/// Returns true if the undirected graph contains a cycle.
///
/// Runs an iterative depth-first exploration that records the discovery
/// parent of every vertex. A neighbor that was already discovered and is
/// not the current vertex's parent closes a cycle. Exploration restarts
/// from every undiscovered vertex that has at least one edge, so all
/// components are covered. Isolated vertices never form a cycle.
pub fn has_undirected_cycle<G: Neighbors>(graph: &G) -> bool {
    // Discovered vertices mapped to their discovery parent.
    let mut parents: HashMap<G::Vertex, Option<G::Vertex>> = HashMap::new();

    for root in graph.vertices() {
        if parents.contains_key(&root) || graph.neighbors(&root).is_empty() {
            continue;
        }

        parents.insert(root.clone(), None);
        let mut stack = vec![root];

        while let Some(vertex) = stack.pop() {
            let parent = parents.get(&vertex).cloned().flatten();

            for next in graph.neighbors(&vertex) {
                if !parents.contains_key(&next) {
                    parents.insert(next.clone(), Some(vertex.clone()));
                    stack.push(next);
                } else if parent.as_ref() != Some(&next) {
                    return true;
                }
            }
        }
    }

    false
}
