//! Undirected, unweighted graph with string-labeled vertices.
//!
//! Adjacency is a sparse mapping from each label to the ordered set of its
//! neighbors. Every edge is stored in both endpoint sets, so adjacency is
//! always symmetric.

use petgraph::graph::UnGraph;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use tracing::debug;

use super::Neighbors;
use crate::algo;

/// Maximum length of the single-line rendering before it wraps.
const SINGLE_LINE_LIMIT: usize = 70;

/// An undirected edge snapshot as returned by [`UnweightedGraph::get_edges`].
///
/// The endpoints are stored in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UndirectedEdge(pub String, pub String);

impl UndirectedEdge {
    /// Creates an edge snapshot, normalizing the endpoint order.
    pub fn new(u: impl Into<String>, v: impl Into<String>) -> Self {
        let (u, v) = (u.into(), v.into());
        if u <= v {
            Self(u, v)
        } else {
            Self(v, u)
        }
    }

    /// Returns true if `vertex` is one of the endpoints.
    pub fn touches(&self, vertex: &str) -> bool {
        self.0 == vertex || self.1 == vertex
    }
}

/// An undirected graph keyed by vertex label.
///
/// # Example
///
/// ```rust
/// use adjgraph::graph::UnweightedGraph;
///
/// let mut graph = UnweightedGraph::new();
/// graph.add_edge("A", "B"); // creates both vertices
/// graph.add_edge("B", "C");
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert!(graph.is_valid_path(&["A", "B", "C"]));
///
/// graph.remove_vertex("B");
/// assert_eq!(graph.edge_count(), 0);
/// assert_eq!(graph.count_connected_components(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnweightedGraph {
    adjacency: BTreeMap<String, BTreeSet<String>>,
}

impl UnweightedGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph by applying [`add_edge`](Self::add_edge) to each pair.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u.as_ref(), v.as_ref());
        }
        graph
    }

    /// Adds an isolated vertex.
    ///
    /// Re-adding an existing label leaves its edges intact and returns
    /// `false`.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.adjacency.contains_key(&label) {
            debug!(vertex = %label, "vertex already present");
            return false;
        }
        self.adjacency.insert(label, BTreeSet::new());
        true
    }

    /// Adds the edge `{u, v}`, creating missing endpoints.
    ///
    /// Returns `false` for self-loops and for edges that already exist.
    pub fn add_edge(&mut self, u: &str, v: &str) -> bool {
        if u == v {
            debug!(vertex = u, "ignoring edge: self-loop");
            return false;
        }

        self.adjacency.entry(u.to_string()).or_default();
        self.adjacency.entry(v.to_string()).or_default();

        if self.has_edge_between(u, v) {
            debug!(u, v, "ignoring edge: already present");
            return false;
        }

        self.link(u, v);
        self.link(v, u);
        true
    }

    fn link(&mut self, from: &str, to: &str) {
        if let Some(set) = self.adjacency.get_mut(from) {
            set.insert(to.to_string());
        }
    }

    fn unlink(&mut self, from: &str, to: &str) {
        if let Some(set) = self.adjacency.get_mut(from) {
            set.remove(to);
        }
    }

    /// Removes the edge `{u, v}`.
    ///
    /// Returns `true` if an edge was removed.
    pub fn remove_edge(&mut self, u: &str, v: &str) -> bool {
        if !self.has_edge_between(u, v) {
            debug!(u, v, "ignoring edge removal: no such edge");
            return false;
        }

        self.unlink(u, v);
        self.unlink(v, u);
        true
    }

    /// Removes a vertex together with every edge incident to it.
    ///
    /// Returns `false` if the vertex does not exist.
    pub fn remove_vertex(&mut self, label: &str) -> bool {
        let Some(neighbors) = self.adjacency.remove(label) else {
            debug!(vertex = label, "ignoring vertex removal: no such vertex");
            return false;
        };

        for neighbor in &neighbors {
            self.unlink(neighbor, label);
        }
        true
    }

    /// Returns true if `{u, v}` is an edge.
    pub fn has_edge_between(&self, u: &str, v: &str) -> bool {
        self.adjacency.get(u).is_some_and(|set| set.contains(v))
    }

    /// Returns true if `label` is a vertex.
    pub fn contains(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    /// Returns the neighbor set of `label`.
    pub fn adjacent(&self, label: &str) -> Option<&BTreeSet<String>> {
        self.adjacency.get(label)
    }

    /// Returns the number of edges incident to `label` (zero if unknown).
    pub fn degree(&self, label: &str) -> usize {
        self.adjacency.get(label).map_or(0, BTreeSet::len)
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Checks if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns all vertex labels in ascending order.
    pub fn get_vertices(&self) -> Vec<String> {
        self.adjacency.keys().cloned().collect()
    }

    /// Returns every edge once, sorted, with endpoints in ascending order.
    pub fn get_edges(&self) -> Vec<UndirectedEdge> {
        self.adjacency
            .iter()
            .flat_map(|(u, set)| {
                set.iter()
                    .filter(move |v| u < *v)
                    .map(move |v| UndirectedEdge(u.clone(), v.clone()))
            })
            .collect()
    }

    /// Depth-first visitation order from `start`, stopping at `end`.
    ///
    /// Among siblings the lexicographically smallest label is visited first.
    pub fn dfs(&self, start: &str, end: Option<&str>) -> Vec<String> {
        let end = end.map(str::to_string);
        algo::dfs(self, &start.to_string(), end.as_ref())
    }

    /// Breadth-first visitation order from `start`, stopping at `end`.
    pub fn bfs(&self, start: &str, end: Option<&str>) -> Vec<String> {
        let end = end.map(str::to_string);
        algo::bfs(self, &start.to_string(), end.as_ref())
    }

    /// Returns true if consecutive labels of `path` are adjacent.
    pub fn is_valid_path<S: AsRef<str>>(&self, path: &[S]) -> bool {
        let path: Vec<String> = path.iter().map(|s| s.as_ref().to_string()).collect();
        algo::is_valid_path(self, &path)
    }

    /// Returns the members of each connected component.
    pub fn connected_components(&self) -> Vec<Vec<String>> {
        algo::connected_components(self)
    }

    /// Returns the number of connected components.
    ///
    /// # Example
    ///
    /// ```rust
    /// use adjgraph::graph::UnweightedGraph;
    ///
    /// let mut graph = UnweightedGraph::from_edges([("A", "B"), ("C", "D")]);
    /// graph.add_vertex("E");
    /// assert_eq!(graph.count_connected_components(), 3);
    /// ```
    pub fn count_connected_components(&self) -> usize {
        algo::count_connected_components(self)
    }

    /// Returns true if the graph contains a cycle.
    pub fn has_cycle(&self) -> bool {
        algo::has_undirected_cycle(self)
    }

    /// Converts into a petgraph `UnGraph` whose node weights are the labels.
    pub fn to_petgraph(&self) -> UnGraph<String, ()> {
        let mut graph = UnGraph::with_capacity(self.vertex_count(), self.edge_count());
        let mut indices = HashMap::with_capacity(self.vertex_count());

        for label in self.adjacency.keys() {
            indices.insert(label.as_str(), graph.add_node(label.clone()));
        }
        for UndirectedEdge(u, v) in self.get_edges() {
            if let (Some(&a), Some(&b)) = (indices.get(u.as_str()), indices.get(v.as_str())) {
                graph.add_edge(a, b, ());
            }
        }

        graph
    }
}

impl Neighbors for UnweightedGraph {
    type Vertex = String;

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn contains_vertex(&self, vertex: &String) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn vertices(&self) -> Vec<String> {
        self.get_vertices()
    }

    fn neighbors(&self, vertex: &String) -> Vec<String> {
        self.adjacency
            .get(vertex)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn has_edge(&self, from: &String, to: &String) -> bool {
        self.has_edge_between(from, to)
    }
}

/// Renders `GRAPH: {A: [B, C], B: [A], C: [A]}`, one vertex per line once
/// the single-line form gets long.
impl fmt::Display for UnweightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .adjacency
            .iter()
            .map(|(vertex, set)| {
                let neighbors: Vec<&str> = set.iter().map(String::as_str).collect();
                format!("{}: [{}]", vertex, neighbors.join(", "))
            })
            .collect();

        let wrapped = entries.join("\n  ");
        if wrapped.len() < SINGLE_LINE_LIMIT {
            write!(f, "GRAPH: {{{}}}", entries.join(", "))
        } else {
            write!(f, "GRAPH: {{\n  {}}}", wrapped)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_from(pairs: &[&str]) -> UnweightedGraph {
        let mut graph = UnweightedGraph::new();
        for pair in pairs {
            let (u, v) = pair.split_at(1);
            graph.add_edge(u, v);
        }
        graph
    }

    fn sample() -> UnweightedGraph {
        graph_from(&[
            "AE", "AC", "BE", "CE", "CD", "CB", "BD", "ED", "BH", "QG", "FG",
        ])
    }

    fn assert_symmetric(graph: &UnweightedGraph) {
        for (u, set) in &graph.adjacency {
            for v in set {
                assert!(graph.adjacency[v].contains(u), "{} -> {} not mirrored", u, v);
            }
        }
    }

    #[test]
    fn test_create_empty_graph() {
        let graph = UnweightedGraph::new();
        assert!(graph.is_empty());
        assert!(graph.get_vertices().is_empty());
        assert!(graph.get_edges().is_empty());
        assert_eq!(graph.count_connected_components(), 0);
        assert!(!graph.has_cycle());
    }

    #[test]
    fn test_add_vertex_and_edges() {
        let mut graph = UnweightedGraph::new();
        for v in ["A", "B", "C", "D", "E"] {
            assert!(graph.add_vertex(v));
        }
        assert_eq!(graph.vertex_count(), 5);

        for pair in ["AB", "AC", "BC", "BD", "CD", "CE", "DE"] {
            let (u, v) = pair.split_at(1);
            assert!(graph.add_edge(u, v));
        }
        assert!(!graph.add_edge("B", "C"));
        assert!(!graph.add_edge("C", "B"));
        assert!(!graph.add_edge("A", "A"));

        assert_eq!(graph.edge_count(), 7);
        assert_symmetric(&graph);
    }

    #[test]
    fn test_re_adding_vertex_keeps_edges() {
        let mut graph = graph_from(&["AB", "AC"]);
        assert!(!graph.add_vertex("A"));
        assert_eq!(graph.degree("A"), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_remove_edge_and_vertex() {
        let mut graph = graph_from(&["AB", "AC", "BC", "BD", "CD", "CE", "DE"]);

        assert!(!graph.remove_vertex("DOES NOT EXIST"));
        assert!(graph.remove_edge("A", "B"));
        assert!(!graph.remove_edge("X", "B"));
        assert!(!graph.remove_edge("A", "B"));
        assert_eq!(graph.edge_count(), 6);

        assert!(graph.remove_vertex("D"));
        assert_eq!(graph.get_vertices(), vec!["A", "B", "C", "E"]);
        assert_eq!(
            graph.get_edges(),
            vec![
                UndirectedEdge::new("A", "C"),
                UndirectedEdge::new("B", "C"),
                UndirectedEdge::new("C", "E"),
            ]
        );
        assert_symmetric(&graph);
    }

    #[test]
    fn test_get_edges_lists_each_edge_once() {
        let graph = graph_from(&["AB", "AC", "BC", "BD", "CD", "CE"]);
        let edges = graph.get_edges();

        assert_eq!(edges.len(), 6);
        assert!(edges.contains(&UndirectedEdge::new("D", "B")));
        assert!(edges.iter().all(|e| e.0 < e.1));
        assert_eq!(graph.get_vertices(), vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_is_valid_path() {
        let graph = graph_from(&["AB", "AC", "BC", "BD", "CD", "CE", "DE"]);

        assert!(graph.is_valid_path(&["A", "B", "C"]));
        assert!(!graph.is_valid_path(&["A", "D", "E"]));
        assert!(!graph.is_valid_path(&["E", "C", "A", "B", "D", "C", "B", "E"]));
        assert!(graph.is_valid_path(&["A", "C", "D", "E", "C", "B"]));
        assert!(graph.is_valid_path::<&str>(&[]));
        assert!(graph.is_valid_path(&["D"]));
        assert!(!graph.is_valid_path(&["Z"]));
    }

    #[test]
    fn test_dfs_and_bfs_orders() {
        let graph = sample();

        assert_eq!(graph.dfs("A", None), vec!["A", "C", "B", "D", "E", "H"]);
        assert_eq!(graph.bfs("A", None), vec!["A", "C", "E", "B", "D", "H"]);
        assert_eq!(graph.dfs("G", None), vec!["G", "F", "Q"]);
        assert_eq!(graph.bfs("G", None), vec!["G", "F", "Q"]);
    }

    #[test]
    fn test_traversal_with_end() {
        let graph = sample();

        assert_eq!(graph.bfs("A", Some("B")), vec!["A", "C", "E", "B"]);
        assert_eq!(graph.dfs("B", Some("C")), vec!["B", "C"]);
        assert_eq!(graph.dfs("A", Some("Z")), graph.dfs("A", None));
        assert!(graph.bfs("Z", None).is_empty());
    }

    #[test]
    fn test_traversal_from_isolated_vertex() {
        let mut graph = sample();
        graph.add_vertex("K");

        assert_eq!(graph.dfs("K", None), vec!["K"]);
        assert_eq!(graph.bfs("K", None), vec!["K"]);
    }

    #[test]
    fn test_count_connected_components() {
        let mut graph = sample();
        assert_eq!(graph.count_connected_components(), 2);

        graph.add_edge("Q", "H");
        assert_eq!(graph.count_connected_components(), 1);
        graph.remove_edge("F", "G");
        assert_eq!(graph.count_connected_components(), 2);
        graph.remove_edge("G", "Q");
        assert_eq!(graph.count_connected_components(), 3);
        graph.remove_edge("H", "Q");
        assert_eq!(graph.count_connected_components(), 4);
    }

    #[test]
    fn test_connected_component_members() {
        let graph = sample();
        let mut components = graph.connected_components();
        for component in &mut components {
            component.sort();
        }
        components.sort();

        assert_eq!(
            components,
            vec![
                vec!["A", "B", "C", "D", "E", "H"],
                vec!["F", "G", "Q"],
            ]
        );
    }

    #[test]
    fn test_components_match_petgraph() {
        let mut graph = sample();
        graph.add_vertex("Z");
        graph.remove_edge("B", "H");

        let expected = petgraph::algo::connected_components(&graph.to_petgraph());
        assert_eq!(graph.count_connected_components(), expected);
    }

    #[test]
    fn test_has_cycle() {
        assert!(sample().has_cycle());

        let mut graph = graph_from(&["AB", "BC", "CD"]);
        graph.add_vertex("Z");
        assert!(!graph.has_cycle());

        graph.add_edge("D", "B");
        assert!(graph.has_cycle());
        graph.remove_edge("B", "C");
        assert!(!graph.has_cycle());
    }

    #[test]
    fn test_has_cycle_in_later_component() {
        // Tree component first, triangle in a separate component.
        let graph = graph_from(&["AB", "AC", "XY", "YZ", "ZX"]);
        assert!(graph.has_cycle());
    }

    #[test]
    fn test_isolated_vertices_have_no_cycle() {
        let mut graph = UnweightedGraph::new();
        graph.add_vertex("A");
        graph.add_vertex("B");
        assert!(!graph.has_cycle());
        assert_eq!(graph.count_connected_components(), 2);
    }

    #[test]
    fn test_display() {
        let graph = graph_from(&["AB", "AC"]);
        assert_eq!(graph.to_string(), "GRAPH: {A: [B, C], B: [A], C: [A]}");

        let rendered = sample().to_string();
        assert!(rendered.starts_with("GRAPH: {\n  A: [C, E]\n  B: [C, D, E, H]"));
        assert!(rendered.ends_with("Q: [G]}"));
    }
}
