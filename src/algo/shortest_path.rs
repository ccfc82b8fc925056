//! Single-source shortest paths (Dijkstra).
//!
//! Vertices are settled in order of tentative distance using a binary
//! heap keyed by `(distance, vertex id)`, so ties are broken by the lowest
//! vertex id. Weights are strictly positive by construction, which keeps
//! the label-setting approach correct.

use serde::{Serialize, Serializer};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::WeightedNeighbors;

/// Total path weight from the source, or `Infinite` when unreachable.
///
/// Every finite distance orders before `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Distance {
    /// Reachable with the given total weight
    Finite(u64),
    /// Not reachable from the source
    Infinite,
}

impl Distance {
    /// Returns the finite value, if any.
    pub fn finite(self) -> Option<u64> {
        match self {
            Self::Finite(d) => Some(d),
            Self::Infinite => None,
        }
    }

    /// Returns true if the vertex is reachable.
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{}", d),
            Self::Infinite => write!(f, "inf"),
        }
    }
}

/// Serializes finite distances as numbers and `Infinite` as `"inf"`.
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Finite(d) => serializer.serialize_u64(*d),
            Self::Infinite => serializer.serialize_str("inf"),
        }
    }
}

/// Result of a single-source shortest path computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    /// The source vertex
    pub source: usize,
    /// Distance to each vertex, indexed by vertex id
    pub distances: Vec<Distance>,
    /// Predecessor of each vertex on its shortest path (`None` for the
    /// source and for unreachable vertices)
    pub predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Returns the distance to `vertex`, or `None` if it is out of range.
    pub fn distance(&self, vertex: usize) -> Option<Distance> {
        self.distances.get(vertex).copied()
    }

    /// Reconstructs the shortest path from the source to `target`.
    ///
    /// Returns `None` when `target` is unreachable or out of range.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.distance(target)?.is_finite() {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessors[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Returns the number of vertices reachable from the source.
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }
}

/// Computes the minimum total weight from `source` to every vertex.
///
/// Vertices are the dense ids `0..vertex_count`. Fails only when `source`
/// is not a vertex of the graph.
pub fn dijkstra<G>(graph: &G, source: usize) -> GraphResult<ShortestPaths>
where
    G: WeightedNeighbors<Vertex = usize>,
{
    let vertex_count = graph.vertex_count();
    if !graph.contains_vertex(&source) {
        return Err(GraphError::UnknownVertex {
            vertex: source,
            vertex_count,
        });
    }

    let mut distances = vec![Distance::Infinite; vertex_count];
    let mut predecessors = vec![None; vertex_count];
    let mut settled = vec![false; vertex_count];
    let mut heap = BinaryHeap::new();

    distances[source] = Distance::Finite(0);
    heap.push(Reverse((0_u64, source)));

    while let Some(Reverse((dist, vertex))) = heap.pop() {
        if settled[vertex] {
            continue;
        }
        settled[vertex] = true;

        for next in graph.neighbors(&vertex) {
            if settled[next] {
                continue;
            }
            let Some(weight) = graph.weight(&vertex, &next) else {
                continue;
            };

            let candidate = dist + u64::from(weight);
            if Distance::Finite(candidate) < distances[next] {
                distances[next] = Distance::Finite(candidate);
                predecessors[next] = Some(vertex);
                heap.push(Reverse((candidate, next)));
            }
        }
    }

    let paths = ShortestPaths {
        source,
        distances,
        predecessors,
    };
    debug!(
        source,
        reachable = paths.reachable_count(),
        vertices = vertex_count,
        "computed shortest paths"
    );
    Ok(paths)
}
