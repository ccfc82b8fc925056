//! Markdown export implementation.
//!
//! Exports graph reports in Markdown format for documentation and reporting.

use super::{Exporter, GraphReport};
use crate::parser::GraphKind;
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, report: &GraphReport, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "# Graph Report")?;
        writeln!(writer)?;
        writeln!(writer, "**Kind:** {}", report.kind)?;
        writeln!(writer)?;

        // Summary section
        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Metric | Value |")?;
        writeln!(writer, "|--------|-------|")?;
        writeln!(writer, "| Vertices | {} |", report.vertices.len())?;
        writeln!(writer, "| Edges | {} |", report.edges.len())?;
        writeln!(writer, "| Has Cycle | {} |", yes_no(report.has_cycle))?;
        if let Some(count) = report.component_count {
            writeln!(writer, "| Connected Components | {} |", count)?;
        }
        if report.kind == GraphKind::Directed {
            writeln!(writer, "| Total Weight | {} |", report.total_weight())?;
        }
        writeln!(writer)?;

        writeln!(writer, "## Edges")?;
        writeln!(writer)?;

        if report.edges.is_empty() {
            writeln!(writer, "_No edges._")?;
            return Ok(());
        }

        match report.kind {
            GraphKind::Directed => {
                writeln!(writer, "| Source | Target | Weight |")?;
                writeln!(writer, "|--------|--------|--------|")?;
                for edge in &report.edges {
                    writeln!(
                        writer,
                        "| {} | {} | {} |",
                        edge.source,
                        edge.target,
                        edge.weight.unwrap_or_default()
                    )?;
                }
            }
            GraphKind::Undirected => {
                writeln!(writer, "| Vertex | Vertex |")?;
                writeln!(writer, "|--------|--------|")?;
                for edge in &report.edges {
                    writeln!(writer, "| {} | {} |", edge.source, edge.target)?;
                }
            }
        }

        Ok(())
    }
}
