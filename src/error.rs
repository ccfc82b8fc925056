//! Error types for graph queries.
//!
//! Mutations never fail (they report whether they were applied instead),
//! so these errors only surface from queries that have a precondition on
//! their input, such as a shortest-path source that must exist.

/// Errors returned by graph queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A numeric vertex id outside `0..vertex_count`.
    #[error("Unknown vertex {vertex} (graph has {vertex_count} vertices)")]
    UnknownVertex {
        /// The requested vertex id
        vertex: usize,
        /// Number of vertices in the graph at the time of the query
        vertex_count: usize,
    },
}

/// Result type alias for graph queries.
pub type GraphResult<T> = Result<T, GraphError>;
