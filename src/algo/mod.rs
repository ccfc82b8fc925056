//! Graph algorithms written against the [`Neighbors`](crate::graph::Neighbors)
//! read interface.
//!
//! Every routine here is a pure function of the graph: nothing mutates
//! the graph, and all results are fully materialized before returning.
//! The graph types expose the same operations as inherent methods.
//!
//! # Example
//!
//! ```rust
//! use adjgraph::algo::{self, Distance};
//! use adjgraph::graph::WeightedDigraph;
//!
//! let graph = WeightedDigraph::from_edges(&[(0, 1, 4), (1, 2, 3), (0, 2, 9)]);
//!
//! assert_eq!(algo::bfs(&graph, &0, None), vec![0, 1, 2]);
//! assert!(!algo::has_directed_cycle(&graph));
//!
//! let paths = algo::dijkstra(&graph, 0).unwrap();
//! assert_eq!(paths.distance(2), Some(Distance::Finite(7)));
//! ```

mod components;
mod cycle;
mod path;
mod shortest_path;
mod traversal;

pub use components::{connected_components, count_connected_components};
pub use cycle::{has_directed_cycle, has_undirected_cycle};
pub use path::is_valid_path;
pub use shortest_path::{dijkstra, Distance, ShortestPaths};
pub use traversal::{bfs, dfs};
