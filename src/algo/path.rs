//! Path validation.

use crate::graph::Neighbors;

/// Returns true if `path` can be walked edge by edge.
///
/// The empty path is always valid; a single-vertex path is valid when
/// that vertex exists. Longer paths need an edge between every
/// consecutive pair (respecting direction for directed graphs).
pub fn is_valid_path<G: Neighbors>(graph: &G, path: &[G::Vertex]) -> bool {
    match path {
        [] => true,
        [only] => graph.contains_vertex(only),
        _ => path
            .windows(2)
            .all(|pair| graph.has_edge(&pair[0], &pair[1])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{UnweightedGraph, WeightedDigraph};

    #[test]
    fn test_directed_respects_direction() {
        let graph = WeightedDigraph::from_edges(&[(0, 1, 2), (1, 2, 2)]);
        assert!(is_valid_path(&graph, &[0, 1, 2]));
        assert!(!is_valid_path(&graph, &[2, 1, 0]));
    }

    #[test]
    fn test_undirected_accepts_either_orientation() {
        let graph = UnweightedGraph::from_edges([("A", "B"), ("B", "C")]);
        let forward = ["A", "B", "C"].map(String::from);
        let backward = ["C", "B", "A"].map(String::from);
        assert!(is_valid_path(&graph, &forward));
        assert!(is_valid_path(&graph, &backward));
    }

    #[test]
    fn test_trivial_paths() {
        let graph = WeightedDigraph::with_vertices(2);
        assert!(is_valid_path(&graph, &[]));
        assert!(is_valid_path(&graph, &[1]));
        assert!(!is_valid_path(&graph, &[2]));
        assert!(!is_valid_path(&graph, &[0, 0]));

        let empty = UnweightedGraph::new();
        assert!(is_valid_path(&empty, &[]));
    }

    #[test]
    fn test_unknown_vertex_mid_path() {
        let graph = WeightedDigraph::from_edges(&[(0, 1, 2)]);
        assert!(!is_valid_path(&graph, &[0, 1, 7]));
    }
}
