//! adjgraph - directed weighted and undirected graphs with classic algorithms
//!
//! This crate provides two graph representations, a dense weighted digraph
//! and a sparse undirected graph with string labels, plus traversal, cycle
//! detection, connected components, path validation and Dijkstra shortest
//! paths over a shared neighbor-enumeration interface.

pub mod algo;
pub mod error;
pub mod export;
pub mod graph;
pub mod parser;

pub use error::{GraphError, GraphResult};
