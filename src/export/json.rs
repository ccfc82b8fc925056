//! JSON export implementation.
//!
//! Exports graph reports in JSON format for machine-readable output.

use super::{Exporter, GraphReport};
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Serializable edge for JSON output.
#[derive(Serialize)]
struct JsonEdge<'a> {
    source: &'a str,
    target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight: Option<u32>,
}

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    vertices: usize,
    edges: usize,
    has_cycle: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    connected_components: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_weight: Option<u64>,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport<'a> {
    kind: String,
    summary: JsonSummary,
    vertices: &'a [String],
    edges: Vec<JsonEdge<'a>>,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, report: &GraphReport, writer: &mut W) -> io::Result<()> {
        let edges: Vec<JsonEdge> = report
            .edges
            .iter()
            .map(|e| JsonEdge {
                source: &e.source,
                target: &e.target,
                weight: e.weight,
            })
            .collect();

        let weighted = report.edges.iter().any(|e| e.weight.is_some());

        let export = JsonExport {
            kind: report.kind.to_string(),
            summary: JsonSummary {
                vertices: report.vertices.len(),
                edges: report.edges.len(),
                has_cycle: report.has_cycle,
                connected_components: report.component_count,
                total_weight: weighted.then(|| report.total_weight()),
            },
            vertices: &report.vertices,
            edges,
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
