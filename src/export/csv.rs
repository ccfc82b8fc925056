//! CSV export implementation.
//!
//! Writes the edge list of a report, one edge per row.

use super::{Exporter, GraphReport};
use std::io::{self, Write};

/// CSV exporter implementation.
pub struct CsvExporter;

impl CsvExporter {
    /// Escape a field value for CSV format.
    ///
    /// Wraps the value in quotes if it contains commas, quotes, or newlines.
    fn escape_field(value: &str) -> String {
        if value.contains(',') || value.contains('"') || value.contains('\n') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}

impl Exporter for CsvExporter {
    fn export<W: Write>(&self, report: &GraphReport, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "source,target,weight")?;

        for edge in &report.edges {
            let weight = edge.weight.map(|w| w.to_string()).unwrap_or_default();
            writeln!(
                writer,
                "{},{},{}",
                Self::escape_field(&edge.source),
                Self::escape_field(&edge.target),
                weight
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{UnweightedGraph, WeightedDigraph};

    fn export_lines(report: &GraphReport) -> Vec<String> {
        let mut output = Vec::new();
        CsvExporter.export(report, &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_csv_export_directed() {
        let graph = WeightedDigraph::from_edges(&[(0, 1, 10), (2, 1, 23)]);
        let lines = export_lines(&GraphReport::from_directed(&graph));

        assert_eq!(lines, vec!["source,target,weight", "0,1,10", "2,1,23"]);
    }

    #[test]
    fn test_csv_export_undirected_has_empty_weight() {
        let graph = UnweightedGraph::from_edges([("B", "A")]);
        let lines = export_lines(&GraphReport::from_undirected(&graph));

        assert_eq!(lines, vec!["source,target,weight", "A,B,"]);
    }

    #[test]
    fn test_csv_export_special_characters() {
        let graph = UnweightedGraph::from_edges([("north, east", "say \"hi\"")]);
        let lines = export_lines(&GraphReport::from_undirected(&graph));

        assert_eq!(lines[1], "\"north, east\",\"say \"\"hi\"\"\",");
    }

    #[test]
    fn test_csv_escape_field() {
        assert_eq!(CsvExporter::escape_field("simple"), "simple");
        assert_eq!(CsvExporter::escape_field("has,comma"), "\"has,comma\"");
        assert_eq!(CsvExporter::escape_field("has\"quote"), "\"has\"\"quote\"");
        assert_eq!(CsvExporter::escape_field("has\nnewline"), "\"has\nnewline\"");
    }
}
