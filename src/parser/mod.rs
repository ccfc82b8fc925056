//! Edge-list input for building graphs.
//!
//! Callers that already hold their edges in memory can use the graph
//! constructors directly; this module covers reading them from files.
//!
//! # Example
//!
//! ```
//! use adjgraph::parser::{parse_json_str, LoadedGraph};
//!
//! let json = r#"{"kind": "undirected", "edges": [["A", "B"], ["B", "C"]]}"#;
//! let graph = parse_json_str(json, None).unwrap().into_graph();
//!
//! let LoadedGraph::Undirected(graph) = graph else { unreachable!() };
//! assert_eq!(graph.vertex_count(), 3);
//! ```

pub mod edge_list;
pub mod types;

pub use edge_list::{
    parse_file, parse_json_str, parse_text_str, InputFormat, ParseError, ParseResult,
};

pub use types::{EdgeList, GraphKind, LoadedGraph};
