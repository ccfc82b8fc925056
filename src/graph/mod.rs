//! Graph representations and the read interface shared by the algorithms.
//!
//! Two concrete representations are provided:
//!
//! - [`WeightedDigraph`]: directed, positive integer weights, dense
//!   adjacency matrix over vertices `0..vertex_count`.
//! - [`UnweightedGraph`]: undirected, string labels, sparse adjacency
//!   mapping from label to its ordered neighbor set.
//!
//! Both implement [`Neighbors`], which is all the traversal, cycle and
//! component routines in [`crate::algo`] need. The directed graph also
//! implements [`WeightedNeighbors`] for shortest paths.
//!
//! # Example
//!
//! ```rust
//! use adjgraph::graph::{UnweightedGraph, WeightedDigraph};
//!
//! let digraph = WeightedDigraph::from_edges(&[(0, 1, 10), (1, 2, 5)]);
//! assert_eq!(digraph.vertex_count(), 3);
//! assert_eq!(digraph.dfs(0, None), vec![0, 1, 2]);
//!
//! let graph = UnweightedGraph::from_edges([("A", "B"), ("B", "C")]);
//! assert_eq!(graph.count_connected_components(), 1);
//! ```

mod unweighted_graph;
mod weighted_digraph;

pub use unweighted_graph::{UndirectedEdge, UnweightedGraph};
pub use weighted_digraph::{Edge, Weight, WeightedDigraph};

use std::hash::Hash;

/// Read-only neighbor enumeration over a graph.
///
/// For directed graphs the neighbors of `v` are its successors; for
/// undirected graphs they are all vertices sharing an edge with `v`.
pub trait Neighbors {
    /// Vertex identifier type.
    type Vertex: Clone + Eq + Ord + Hash;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns true if `vertex` is part of the graph.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Returns every vertex in a deterministic order.
    fn vertices(&self) -> Vec<Self::Vertex>;

    /// Returns the neighbors of `vertex` in ascending order.
    ///
    /// Unknown vertices have no neighbors.
    fn neighbors(&self, vertex: &Self::Vertex) -> Vec<Self::Vertex>;

    /// Returns true if there is an edge from `from` to `to`.
    fn has_edge(&self, from: &Self::Vertex, to: &Self::Vertex) -> bool;
}

/// Neighbor enumeration with per-edge weights.
pub trait WeightedNeighbors: Neighbors {
    /// Weight of the edge `from -> to`, or `None` if there is no such edge.
    fn weight(&self, from: &Self::Vertex, to: &Self::Vertex) -> Option<Weight>;
}
