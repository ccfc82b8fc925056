//! Directed, edge-weighted graph backed by a dense adjacency matrix.
//!
//! Vertices are the integers `0..vertex_count`, assigned in creation
//! order. Vertices can be added but never removed. A matrix cell holds
//! the weight of the edge `row -> column`, with `0` meaning no edge.

use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::{Neighbors, WeightedNeighbors};
use crate::algo::{self, ShortestPaths};
use crate::error::GraphResult;

/// Edge weight. Zero is reserved for "no edge" and never stored.
pub type Weight = u32;

/// A directed edge snapshot as returned by [`WeightedDigraph::get_edges`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Tail of the edge
    pub source: usize,
    /// Head of the edge
    pub target: usize,
    /// Strictly positive weight
    pub weight: Weight,
}

impl Edge {
    /// Creates a new edge snapshot.
    pub fn new(source: usize, target: usize, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

impl From<(usize, usize, Weight)> for Edge {
    fn from((source, target, weight): (usize, usize, Weight)) -> Self {
        Self::new(source, target, weight)
    }
}

/// Number of cells in a `count x count` matrix, if its allocation is
/// addressable.
fn matrix_len(count: usize) -> Option<usize> {
    let len = count.checked_mul(count)?;
    let bytes = len.checked_mul(std::mem::size_of::<Weight>())?;
    (bytes <= isize::MAX as usize).then_some(len)
}

/// A directed graph with positive integer edge weights.
///
/// Invalid mutation requests (out-of-range endpoints, self-loops, zero
/// weights, removing an edge that does not exist) are ignored; the
/// mutation methods return `false` in that case.
///
/// # Example
///
/// ```rust
/// use adjgraph::graph::WeightedDigraph;
///
/// let mut graph = WeightedDigraph::new();
/// graph.add_vertex();
/// graph.add_vertex();
///
/// assert!(graph.add_edge(0, 1, 7));
/// assert!(!graph.add_edge(1, 1, 3)); // self-loop, ignored
/// assert!(!graph.add_edge(0, 5, 3)); // out of range, ignored
///
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.edge_weight(0, 1), Some(7));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightedDigraph {
    /// Number of vertices; the matrix is `vertex_count x vertex_count`
    vertex_count: usize,
    /// Row-major weight matrix
    cells: Vec<Weight>,
}

impl WeightedDigraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `count` vertices and no edges.
    ///
    /// # Panics
    ///
    /// Panics if a `count x count` matrix exceeds `isize::MAX` bytes.
    pub fn with_vertices(count: usize) -> Self {
        let Some(len) = matrix_len(count) else {
            panic!("adjacency matrix for {} vertices is too large", count);
        };
        Self {
            vertex_count: count,
            cells: vec![0; len],
        }
    }

    /// Builds a graph from an edge list.
    ///
    /// The vertex count is inferred as the largest endpoint plus one. Each
    /// edge is then applied through [`add_edge`](Self::add_edge), so
    /// self-loops and zero weights are dropped and a repeated endpoint
    /// pair keeps the last weight. Edges with an endpoint too large for
    /// the matrix to be addressed are dropped before the count is inferred.
    ///
    /// # Example
    ///
    /// ```rust
    /// use adjgraph::graph::WeightedDigraph;
    ///
    /// let graph = WeightedDigraph::from_edges(&[(0, 1, 10), (3, 3, 2), (1, 2, 0)]);
    /// assert_eq!(graph.vertex_count(), 4);
    /// assert_eq!(graph.edge_count(), 1);
    /// ```
    pub fn from_edges(edges: &[(usize, usize, Weight)]) -> Self {
        let addressable = |&&(src, dst, _): &&(usize, usize, Weight)| {
            let fits = src.max(dst).checked_add(1).and_then(matrix_len).is_some();
            if !fits {
                debug!(src, dst, "ignoring edge: endpoint exceeds matrix limits");
            }
            fits
        };
        let edges: Vec<_> = edges.iter().filter(addressable).collect();

        let mut graph = match edges.iter().map(|&&(src, dst, _)| src.max(dst)).max() {
            Some(highest) => Self::with_vertices(highest + 1),
            None => Self::new(),
        };

        for &&(src, dst, weight) in &edges {
            graph.add_edge(src, dst, weight);
        }

        graph
    }

    #[inline]
    fn index(&self, src: usize, dst: usize) -> usize {
        src * self.vertex_count + dst
    }

    #[inline]
    fn in_range(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    /// Appends a vertex and returns the new vertex count.
    ///
    /// The matrix is reallocated at the new dimension; existing weights
    /// are kept and the new row and column start empty.
    ///
    /// # Panics
    ///
    /// Panics if the grown matrix exceeds `isize::MAX` bytes.
    pub fn add_vertex(&mut self) -> usize {
        let old = self.vertex_count;
        let Some((new, len)) = old.checked_add(1).and_then(|new| Some((new, matrix_len(new)?))) else {
            panic!("adjacency matrix cannot grow past {} vertices", old);
        };
        let mut cells = vec![0; len];

        if old > 0 {
            for (row, chunk) in self.cells.chunks_exact(old).enumerate() {
                cells[row * new..row * new + old].copy_from_slice(chunk);
            }
        }

        self.cells = cells;
        self.vertex_count = new;
        new
    }

    /// Adds the edge `src -> dst`, overwriting any previous weight.
    ///
    /// Returns `false` and leaves the graph untouched when either endpoint
    /// is out of range, when `src == dst`, or when `weight` is zero.
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: Weight) -> bool {
        if !self.in_range(src) || !self.in_range(dst) {
            debug!(src, dst, vertex_count = self.vertex_count, "ignoring edge: endpoint out of range");
            return false;
        }
        if src == dst {
            debug!(src, "ignoring edge: self-loop");
            return false;
        }
        if weight == 0 {
            debug!(src, dst, "ignoring edge: weight must be positive");
            return false;
        }

        let idx = self.index(src, dst);
        self.cells[idx] = weight;
        true
    }

    /// Removes the edge `src -> dst`.
    ///
    /// Returns `true` if an edge was removed.
    pub fn remove_edge(&mut self, src: usize, dst: usize) -> bool {
        if !self.in_range(src) || !self.in_range(dst) {
            debug!(src, dst, "ignoring edge removal: endpoint out of range");
            return false;
        }

        let idx = self.index(src, dst);
        let existed = self.cells[idx] != 0;
        if !existed {
            debug!(src, dst, "ignoring edge removal: no such edge");
        }
        self.cells[idx] = 0;
        existed
    }

    /// Returns the weight of `src -> dst`, if the edge exists.
    pub fn edge_weight(&self, src: usize, dst: usize) -> Option<Weight> {
        if !self.in_range(src) || !self.in_range(dst) {
            return None;
        }
        match self.cells[self.index(src, dst)] {
            0 => None,
            weight => Some(weight),
        }
    }

    /// Returns the matrix row of `src`, one weight per destination.
    pub fn row(&self, src: usize) -> Option<&[Weight]> {
        if !self.in_range(src) {
            return None;
        }
        let start = self.index(src, 0);
        Some(&self.cells[start..start + self.vertex_count])
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&w| w != 0).count()
    }

    /// Checks if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Returns all vertex ids in creation order.
    pub fn get_vertices(&self) -> Vec<usize> {
        (0..self.vertex_count).collect()
    }

    /// Returns all edges ordered by source, then destination.
    pub fn get_edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for src in 0..self.vertex_count {
            for dst in 0..self.vertex_count {
                if let Some(weight) = self.edge_weight(src, dst) {
                    edges.push(Edge::new(src, dst, weight));
                }
            }
        }
        edges
    }

    /// Depth-first visitation order from `start`, stopping at `end`.
    ///
    /// See [`algo::dfs`].
    pub fn dfs(&self, start: usize, end: Option<usize>) -> Vec<usize> {
        algo::dfs(self, &start, end.as_ref())
    }

    /// Breadth-first visitation order from `start`, stopping at `end`.
    ///
    /// See [`algo::bfs`].
    pub fn bfs(&self, start: usize, end: Option<usize>) -> Vec<usize> {
        algo::bfs(self, &start, end.as_ref())
    }

    /// Returns true if every consecutive pair of `path` is an edge.
    pub fn is_valid_path(&self, path: &[usize]) -> bool {
        algo::is_valid_path(self, path)
    }

    /// Returns true if the graph contains a directed cycle.
    ///
    /// # Example
    ///
    /// ```rust
    /// use adjgraph::graph::WeightedDigraph;
    ///
    /// let mut graph = WeightedDigraph::from_edges(&[(0, 1, 1), (1, 2, 1)]);
    /// assert!(!graph.has_cycle());
    ///
    /// graph.add_edge(2, 0, 1);
    /// assert!(graph.has_cycle());
    /// ```
    pub fn has_cycle(&self) -> bool {
        algo::has_directed_cycle(self)
    }

    /// Shortest distances from `src` to every vertex.
    ///
    /// Fails only when `src` is not a vertex of this graph.
    pub fn dijkstra(&self, src: usize) -> GraphResult<ShortestPaths> {
        algo::dijkstra(self, src)
    }

    /// Converts into a petgraph `DiGraph` whose node weights are the vertex ids.
    ///
    /// Node indices match vertex ids.
    pub fn to_petgraph(&self) -> DiGraph<usize, Weight> {
        let mut graph = DiGraph::with_capacity(self.vertex_count, self.edge_count());
        for vertex in 0..self.vertex_count {
            graph.add_node(vertex);
        }
        for edge in self.get_edges() {
            graph.add_edge(
                NodeIndex::new(edge.source),
                NodeIndex::new(edge.target),
                edge.weight,
            );
        }
        graph
    }
}

impl FromIterator<(usize, usize, Weight)> for WeightedDigraph {
    fn from_iter<I: IntoIterator<Item = (usize, usize, Weight)>>(iter: I) -> Self {
        let edges: Vec<_> = iter.into_iter().collect();
        Self::from_edges(&edges)
    }
}

impl Neighbors for WeightedDigraph {
    type Vertex = usize;

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn contains_vertex(&self, vertex: &usize) -> bool {
        self.in_range(*vertex)
    }

    fn vertices(&self) -> Vec<usize> {
        self.get_vertices()
    }

    fn neighbors(&self, vertex: &usize) -> Vec<usize> {
        self.row(*vertex)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, &w)| w != 0)
                    .map(|(dst, _)| dst)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn has_edge(&self, from: &usize, to: &usize) -> bool {
        self.edge_weight(*from, *to).is_some()
    }
}

impl WeightedNeighbors for WeightedDigraph {
    fn weight(&self, from: &usize, to: &usize) -> Option<Weight> {
        self.edge_weight(*from, *to)
    }
}

/// Renders the weight matrix with a vertex index header.
///
/// ```text
/// GRAPH (2 vertices):
///    | 0  1
/// ---------
///  0 | 0  7
///  1 | 0  0
/// ```
impl fmt::Display for WeightedDigraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "EMPTY GRAPH");
        }

        writeln!(f, "GRAPH ({} vertices):", self.vertex_count)?;
        let header: Vec<String> = (0..self.vertex_count).map(|i| format!("{:2}", i)).collect();
        writeln!(f, "   |{}", header.join(" "))?;
        writeln!(f, "{}", "-".repeat(self.vertex_count * 3 + 3))?;

        for src in 0..self.vertex_count {
            let row: Vec<String> = self
                .row(src)
                .unwrap_or_default()
                .iter()
                .map(|w| format!("{:2}", w))
                .collect();
            writeln!(f, "{:2} |{}", src, row.join(" "))?;
        }

        Ok(())
    }
}
