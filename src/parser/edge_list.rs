//! Parser for edge-list files.
//!
//! Two input formats are supported:
//!
//! - **JSON**: a tagged [`EdgeList`] document.
//! - **Text**: one edge per line. Directed lines are `src dst [weight]`
//!   (weight defaults to 1), undirected lines are `u v` or a single
//!   two-character token such as `AE`. Blank lines and lines starting
//!   with `#` are skipped.

use std::fs;
use std::path::Path;

use super::types::{EdgeList, GraphKind};
use crate::graph::Weight;

/// Errors that can occur while reading an edge list.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the file from disk.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse JSON content.
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A text line could not be read as an edge.
    #[error("Invalid edge on line {line}: {reason}")]
    InvalidLine {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// A JSON edge entry could not be used.
    #[error("Invalid edge at index {index}: {reason}")]
    InvalidEdge {
        /// 0-based position in the `edges` array
        index: usize,
        /// What was wrong with the entry
        reason: String,
    },

    /// The document describes a different kind of graph than requested.
    #[error("Expected a {expected} edge list, found {found}")]
    KindMismatch {
        /// Kind requested by the caller
        expected: GraphKind,
        /// Kind declared by the document
        found: GraphKind,
    },
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Input encoding of an edge-list file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Tagged JSON document
    #[default]
    Json,
    /// Whitespace-separated lines
    Text,
}

impl InputFormat {
    /// Picks a format from a file extension: `.json` is JSON, anything else text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Text,
        }
    }
}

impl std::str::FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "text" | "txt" => Ok(InputFormat::Text),
            _ => Err(format!(
                "Unknown input format: '{}'. Valid formats: json, text",
                s
            )),
        }
    }
}

/// Reads an edge list from a file.
///
/// For JSON input, `kind` (if given) must match the kind the document
/// declares. For text input, `kind` selects how lines are read and
/// defaults to directed.
pub fn parse_file(path: &Path, format: InputFormat, kind: Option<GraphKind>) -> ParseResult<EdgeList> {
    let content = fs::read_to_string(path)?;
    match format {
        InputFormat::Json => parse_json_str(&content, kind),
        InputFormat::Text => parse_text_str(&content, kind.unwrap_or_default()),
    }
}

/// Parses a JSON edge-list document.
///
/// # Example
///
/// ```
/// use adjgraph::parser::{parse_json_str, EdgeList};
///
/// let json = r#"{"kind": "directed", "edges": [[0, 1, 10], [1, 2, 5]]}"#;
/// let list = parse_json_str(json, None).unwrap();
/// assert_eq!(list, EdgeList::Directed(vec![(0, 1, 10), (1, 2, 5)]));
/// ```
///
/// Negative endpoints and non-positive weights are accepted here and
/// dropped when the graph is built; weights larger than a
/// [`Weight`] can hold are rejected.
pub fn parse_json_str(content: &str, kind: Option<GraphKind>) -> ParseResult<EdgeList> {
    let list: EdgeList = serde_json::from_str(content)?;
    if let Some(expected) = kind {
        if expected != list.kind() {
            return Err(ParseError::KindMismatch {
                expected,
                found: list.kind(),
            });
        }
    }

    if let EdgeList::Directed(edges) = &list {
        for (index, &(_, _, weight)) in edges.iter().enumerate() {
            check_weight(weight).map_err(|reason| ParseError::InvalidEdge { index, reason })?;
        }
    }

    Ok(list)
}

/// Parses a text edge list of the given kind.
///
/// # Example
///
/// ```
/// use adjgraph::parser::{parse_text_str, EdgeList, GraphKind};
///
/// let list = parse_text_str("AE\nB C\n", GraphKind::Undirected).unwrap();
/// assert_eq!(
///     list,
///     EdgeList::Undirected(vec![("A".into(), "E".into()), ("B".into(), "C".into())])
/// );
/// ```
pub fn parse_text_str(content: &str, kind: GraphKind) -> ParseResult<EdgeList> {
    let lines = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    match kind {
        GraphKind::Directed => lines
            .map(|(line_no, line)| parse_directed_line(line_no, line))
            .collect::<ParseResult<Vec<_>>>()
            .map(EdgeList::Directed),
        GraphKind::Undirected => lines
            .map(|(line_no, line)| parse_undirected_line(line_no, line))
            .collect::<ParseResult<Vec<_>>>()
            .map(EdgeList::Undirected),
    }
}

fn invalid(line: usize, reason: impl Into<String>) -> ParseError {
    ParseError::InvalidLine {
        line,
        reason: reason.into(),
    }
}

/// Non-positive weights pass; the graph drops them like any other
/// non-positive weight.
fn check_weight(weight: i64) -> Result<(), String> {
    if weight > i64::from(Weight::MAX) {
        return Err(format!("weight {} is too large", weight));
    }
    Ok(())
}

fn parse_vertex(line: usize, token: &str) -> ParseResult<i64> {
    token
        .parse()
        .map_err(|_| invalid(line, format!("'{}' is not a vertex id", token)))
}

fn parse_weight(line: usize, token: &str) -> ParseResult<i64> {
    let weight: i64 = token
        .parse()
        .map_err(|_| invalid(line, format!("'{}' is not an integer weight", token)))?;
    check_weight(weight).map_err(|reason| invalid(line, reason))?;
    Ok(weight)
}

fn parse_directed_line(line: usize, content: &str) -> ParseResult<(i64, i64, i64)> {
    let tokens: Vec<&str> = content.split_whitespace().collect();
    match tokens.as_slice() {
        [src, dst] => Ok((parse_vertex(line, src)?, parse_vertex(line, dst)?, 1)),
        [src, dst, weight] => Ok((
            parse_vertex(line, src)?,
            parse_vertex(line, dst)?,
            parse_weight(line, weight)?,
        )),
        _ => Err(invalid(line, "expected 'src dst [weight]'")),
    }
}

fn parse_undirected_line(line: usize, content: &str) -> ParseResult<(String, String)> {
    let tokens: Vec<&str> = content.split_whitespace().collect();
    match tokens.as_slice() {
        [u, v] => Ok((u.to_string(), v.to_string())),
        [pair] if pair.chars().count() == 2 => {
            let mut chars = pair.chars();
            match (chars.next(), chars.next()) {
                (Some(u), Some(v)) => Ok((u.to_string(), v.to_string())),
                _ => Err(invalid(line, "expected 'u v'")),
            }
        }
        _ => Err(invalid(line, "expected 'u v'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::LoadedGraph;

    const SAMPLE_DIRECTED_TEXT: &str = "\
# sample digraph
0 1 10
4 0 12
1 4 15

4 3 3
3 1 5
2 1 23
3 2 7
";

    #[test]
    fn test_parse_directed_text() {
        let list = parse_text_str(SAMPLE_DIRECTED_TEXT, GraphKind::Directed).unwrap();
        assert_eq!(list.len(), 7);

        let LoadedGraph::Directed(graph) = list.into_graph() else {
            panic!("expected a directed graph");
        };
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_weight(2, 1), Some(23));
    }

    #[test]
    fn test_directed_default_and_non_positive_weights() {
        let list = parse_text_str("0 1\n1 2 -4\n2 0 0", GraphKind::Directed).unwrap();
        assert_eq!(list, EdgeList::Directed(vec![(0, 1, 1), (1, 2, -4), (2, 0, 0)]));

        let LoadedGraph::Directed(graph) = list.into_graph() else {
            panic!("expected a directed graph");
        };
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_directed_negative_endpoint_is_dropped() {
        let list = parse_text_str("0 1 10\n-1 2 3\n1 2 4", GraphKind::Directed).unwrap();
        assert_eq!(list.len(), 3);

        let LoadedGraph::Directed(graph) = list.into_graph() else {
            panic!("expected a directed graph");
        };
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_weight(1, 2), Some(4));
    }

    #[test]
    fn test_directed_invalid_lines() {
        let err = parse_text_str("0 1 2\nx 1 2", GraphKind::Directed).unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line: 2, .. }));

        let err = parse_text_str("0 1 2 3", GraphKind::Directed).unwrap_err();
        assert!(err.to_string().contains("line 1"));

        let err = parse_text_str("0 1 99999999999", GraphKind::Directed).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_parse_undirected_text() {
        let list = parse_text_str("AE AC", GraphKind::Undirected).unwrap();
        assert_eq!(list, EdgeList::Undirected(vec![("AE".into(), "AC".into())]));

        let err = parse_text_str("ABC", GraphKind::Undirected).unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line: 1, .. }));
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"kind": "undirected", "edges": [["A", "E"], ["Q", "G"]]}"#;
        let list = parse_json_str(json, Some(GraphKind::Undirected)).unwrap();
        assert_eq!(list.kind(), GraphKind::Undirected);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_parse_json_kind_mismatch() {
        let json = r#"{"kind": "directed", "edges": []}"#;
        let err = parse_json_str(json, Some(GraphKind::Undirected)).unwrap_err();
        assert!(matches!(
            err,
            ParseError::KindMismatch {
                expected: GraphKind::Undirected,
                found: GraphKind::Directed
            }
        ));
    }

    #[test]
    fn test_parse_json_drops_invalid_directed_edges() {
        let json = r#"{"kind": "directed", "edges": [[0, 1, 10], [1, 2, -3], [-1, 0, 4], [2, 0, 0]]}"#;
        let list = parse_json_str(json, None).unwrap();
        assert_eq!(list.len(), 4);

        let LoadedGraph::Directed(graph) = list.into_graph() else {
            panic!("expected a directed graph");
        };
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight(0, 1), Some(10));
    }

    #[test]
    fn test_parse_json_matches_text() {
        let json = parse_json_str(r#"{"kind": "directed", "edges": [[0, 1, 10], [1, 2, -3]]}"#, None)
            .unwrap()
            .into_graph();
        let text = parse_text_str("0 1 10\n1 2 -3", GraphKind::Directed)
            .unwrap()
            .into_graph();
        assert_eq!(json, text);
    }

    #[test]
    fn test_parse_json_invalid() {
        let err = parse_json_str(r#"{"kind": "directed", "edges": [[0, 1, 99999999999]]}"#, None).unwrap_err();
        assert!(matches!(err, ParseError::InvalidEdge { index: 0, .. }));
        assert!(err.to_string().contains("too large"));

        let err = parse_json_str(r#"{"kind": "directed", "edges": [[0, "x", 1]]}"#, None).unwrap_err();
        assert!(matches!(err, ParseError::JsonError(_)));
        assert!(err.to_string().contains("Failed to parse JSON"));
    }

    #[test]
    fn test_input_format_from_path() {
        assert_eq!(InputFormat::from_path(Path::new("g.json")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("g.JSON")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("edges.txt")), InputFormat::Text);
        assert_eq!(InputFormat::from_path(Path::new("edges")), InputFormat::Text);
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_file(Path::new("/nonexistent/edges.json"), InputFormat::Json, None).unwrap_err();
        assert!(matches!(err, ParseError::IoError(_)));
    }

    #[test]
    fn test_parse_file_round_trip() {
        let path = std::env::temp_dir().join(format!("adjgraph-edges-{}.txt", std::process::id()));
        fs::write(&path, "A B\nB C\n").unwrap();

        let list = parse_file(&path, InputFormat::Text, Some(GraphKind::Undirected)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(list.len(), 2);
    }
}
