//! Export functionality for graph reports.
//!
//! This module provides exporters for writing a [`GraphReport`] (the
//! vertex set, the edge set and the structural properties of a graph) in
//! various formats: JSON, CSV, and Markdown.

pub mod csv;
pub mod json;
pub mod markdown;

use crate::graph::{UnweightedGraph, Weight, WeightedDigraph};
use crate::parser::{GraphKind, LoadedGraph};
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// JSON format - machine-readable, full data
    Json,
    /// CSV format - one edge per row
    Csv,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: json, csv, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// One edge of a report, with vertices rendered as strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    /// Source (directed) or first endpoint (undirected)
    pub source: String,
    /// Target (directed) or second endpoint (undirected)
    pub target: String,
    /// Edge weight; `None` for undirected graphs
    pub weight: Option<Weight>,
}

/// Data container for export operations.
///
/// Holds a snapshot of a graph together with its computed properties.
#[derive(Debug, Clone)]
pub struct GraphReport {
    /// Which representation the graph uses
    pub kind: GraphKind,
    /// All vertices in the graph's own order
    pub vertices: Vec<String>,
    /// All edges in the graph's own order
    pub edges: Vec<EdgeRecord>,
    /// Whether the graph contains a cycle
    pub has_cycle: bool,
    /// Number of connected components (undirected graphs only)
    pub component_count: Option<usize>,
}

impl GraphReport {
    /// Create a report from a directed graph.
    pub fn from_directed(graph: &WeightedDigraph) -> Self {
        Self {
            kind: GraphKind::Directed,
            vertices: graph.get_vertices().iter().map(usize::to_string).collect(),
            edges: graph
                .get_edges()
                .into_iter()
                .map(|e| EdgeRecord {
                    source: e.source.to_string(),
                    target: e.target.to_string(),
                    weight: Some(e.weight),
                })
                .collect(),
            has_cycle: graph.has_cycle(),
            component_count: None,
        }
    }

    /// Create a report from an undirected graph.
    pub fn from_undirected(graph: &UnweightedGraph) -> Self {
        Self {
            kind: GraphKind::Undirected,
            vertices: graph.get_vertices(),
            edges: graph
                .get_edges()
                .into_iter()
                .map(|e| EdgeRecord {
                    source: e.0,
                    target: e.1,
                    weight: None,
                })
                .collect(),
            has_cycle: graph.has_cycle(),
            component_count: Some(graph.count_connected_components()),
        }
    }

    /// Create a report from whichever graph was loaded.
    pub fn from_loaded(graph: &LoadedGraph) -> Self {
        match graph {
            LoadedGraph::Directed(g) => Self::from_directed(g),
            LoadedGraph::Undirected(g) => Self::from_undirected(g),
        }
    }

    /// Sum of all edge weights (zero for undirected graphs).
    pub fn total_weight(&self) -> u64 {
        self.edges
            .iter()
            .filter_map(|e| e.weight)
            .map(u64::from)
            .sum()
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the report to the given writer.
    fn export<W: Write>(&self, report: &GraphReport, writer: &mut W) -> io::Result<()>;
}

/// Export a report in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    report: &GraphReport,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Json => json::JsonExporter.export(report, writer),
        ExportFormat::Csv => csv::CsvExporter.export(report, writer),
        ExportFormat::Markdown => markdown::MarkdownExporter.export(report, writer),
    }
}

/// Export a report to a string.
pub fn export_to_string(format: ExportFormat, report: &GraphReport) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, report, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(
            "md".parse::<ExportFormat>().unwrap(),
            ExportFormat::Markdown
        );
        assert!("invalid".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_export_format_display() {
        assert_eq!(format!("{}", ExportFormat::Json), "json");
        assert_eq!(format!("{}", ExportFormat::Csv), "csv");
        assert_eq!(format!("{}", ExportFormat::Markdown), "markdown");
    }

    #[test]
    fn test_report_from_directed() {
        let graph = WeightedDigraph::from_edges(&[(0, 1, 4), (1, 2, 6), (2, 0, 1)]);
        let report = GraphReport::from_directed(&graph);

        assert_eq!(report.kind, GraphKind::Directed);
        assert_eq!(report.vertices, vec!["0", "1", "2"]);
        assert_eq!(report.edges.len(), 3);
        assert!(report.has_cycle);
        assert_eq!(report.component_count, None);
        assert_eq!(report.total_weight(), 11);
    }

    #[test]
    fn test_report_from_undirected() {
        let graph = UnweightedGraph::from_edges([("A", "B"), ("C", "D")]);
        let report = GraphReport::from_loaded(&LoadedGraph::Undirected(graph));

        assert_eq!(report.kind, GraphKind::Undirected);
        assert!(!report.has_cycle);
        assert_eq!(report.component_count, Some(2));
        assert_eq!(report.total_weight(), 0);
        assert!(report.edges.iter().all(|e| e.weight.is_none()));
    }

    #[test]
    fn test_export_to_string_dispatches() {
        let graph = WeightedDigraph::from_edges(&[(0, 1, 2)]);
        let report = GraphReport::from_directed(&graph);

        let csv = export_to_string(ExportFormat::Csv, &report).unwrap();
        assert!(csv.starts_with("source,target,weight"));

        let md = export_to_string(ExportFormat::Markdown, &report).unwrap();
        assert!(md.starts_with("# Graph Report"));
    }
}
