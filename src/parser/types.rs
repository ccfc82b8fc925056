//! Shared types for edge-list input.
//!
//! An edge list carries the kind of graph it describes alongside the
//! edges themselves, so one file format covers both representations.

use serde::{Deserialize, Serialize};
use std::fmt;

use tracing::debug;

use crate::graph::{UnweightedGraph, Weight, WeightedDigraph};

/// Which graph representation an edge list describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// Directed graph with weighted edges
    #[default]
    Directed,
    /// Undirected graph with labeled vertices
    Undirected,
}

impl std::str::FromStr for GraphKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "directed" | "digraph" => Ok(GraphKind::Directed),
            "undirected" | "graph" => Ok(GraphKind::Undirected),
            _ => Err(format!(
                "Unknown graph kind: '{}'. Valid kinds: directed, undirected",
                s
            )),
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Directed => write!(f, "directed"),
            GraphKind::Undirected => write!(f, "undirected"),
        }
    }
}

/// An edge list as read from a file.
///
/// In JSON this is `{"kind": "directed", "edges": [[0, 1, 10], ...]}` or
/// `{"kind": "undirected", "edges": [["A", "B"], ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "edges", rename_all = "lowercase")]
pub enum EdgeList {
    /// `(source, target, weight)` triples as written, signs included
    Directed(Vec<(i64, i64, i64)>),
    /// `(u, v)` label pairs
    Undirected(Vec<(String, String)>),
}

impl EdgeList {
    /// Returns the kind of graph this list describes.
    pub fn kind(&self) -> GraphKind {
        match self {
            EdgeList::Directed(_) => GraphKind::Directed,
            EdgeList::Undirected(_) => GraphKind::Undirected,
        }
    }

    /// Returns the number of edge entries, including ones the graph will drop.
    pub fn len(&self) -> usize {
        match self {
            EdgeList::Directed(edges) => edges.len(),
            EdgeList::Undirected(edges) => edges.len(),
        }
    }

    /// Returns true if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Builds the graph, dropping invalid edges the same way `add_edge` does.
    ///
    /// Directed entries with a negative endpoint are dropped before the
    /// vertex count is inferred. Weights that are not positive, or do not
    /// fit a [`Weight`], become 0 and are dropped by the graph.
    pub fn into_graph(self) -> LoadedGraph {
        match self {
            EdgeList::Directed(edges) => {
                let edges: Vec<_> = edges.into_iter().filter_map(directed_entry).collect();
                LoadedGraph::Directed(WeightedDigraph::from_edges(&edges))
            }
            EdgeList::Undirected(edges) => LoadedGraph::Undirected(UnweightedGraph::from_edges(edges)),
        }
    }
}

fn directed_entry((src, dst, weight): (i64, i64, i64)) -> Option<(usize, usize, Weight)> {
    match (usize::try_from(src), usize::try_from(dst)) {
        (Ok(src), Ok(dst)) => Some((src, dst, Weight::try_from(weight).unwrap_or(0))),
        _ => {
            debug!(src, dst, "ignoring edge: negative endpoint");
            None
        }
    }
}

/// A graph built from an [`EdgeList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedGraph {
    /// Built from a directed edge list
    Directed(WeightedDigraph),
    /// Built from an undirected edge list
    Undirected(UnweightedGraph),
}

impl LoadedGraph {
    /// Returns the kind of the wrapped graph.
    pub fn kind(&self) -> GraphKind {
        match self {
            LoadedGraph::Directed(_) => GraphKind::Directed,
            LoadedGraph::Undirected(_) => GraphKind::Undirected,
        }
    }
}

impl fmt::Display for LoadedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadedGraph::Directed(graph) => write!(f, "{}", graph),
            LoadedGraph::Undirected(graph) => writeln!(f, "{}", graph),
        }
    }
}
