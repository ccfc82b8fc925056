//! Connected components of undirected graphs.

use std::collections::HashSet;
use tracing::debug;

use super::traversal::dfs;
use crate::graph::Neighbors;

/// Returns the members of each connected component.
///
/// Components are discovered in vertex order; members of a component are
/// listed in depth-first order from its first vertex. The result is only
/// meaningful for graphs with symmetric adjacency.
pub fn connected_components<G: Neighbors>(graph: &G) -> Vec<Vec<G::Vertex>> {
    let mut assigned = HashSet::new();
    let mut components = Vec::new();

    for vertex in graph.vertices() {
        if assigned.contains(&vertex) {
            continue;
        }
        let members = dfs(graph, &vertex, None);
        assigned.extend(members.iter().cloned());
        components.push(members);
    }

    debug!(
        vertices = graph.vertex_count(),
        components = components.len(),
        "computed connected components"
    );
    components
}

/// Returns the number of connected components.
///
/// An empty graph has none; every isolated vertex counts as one.
pub fn count_connected_components<G: Neighbors>(graph: &G) -> usize {
    connected_components(graph).len()
}
