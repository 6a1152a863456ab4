// src/reporting.rs
//! Console and JSON rendering of analysis reports.

use std::fmt::Write as _;

use colored::Colorize;

use crate::analysis::GraphReport;
use crate::error::{Result, TrailmarkError};
use crate::graph::{Eulerianity, NodeIndex};

/// Renders one report as colored human-readable text.
#[must_use]
pub fn render_text(report: &GraphReport, show_trail: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {}",
        colored_label(report.eulerianity),
        report.path.display().to_string().bold()
    );
    let _ = writeln!(
        out,
        "  {} active nodes ({} slots), {} connections",
        report.active_nodes, report.node_count, report.connection_count
    );

    if show_trail && !report.trail.is_empty() {
        let _ = writeln!(out, "  trail: {}", format_trail(&report.trail));
    }

    out
}

fn colored_label(eulerianity: Eulerianity) -> String {
    let label = eulerianity.label();
    match eulerianity {
        Eulerianity::Eulerian => label.green().bold().to_string(),
        Eulerianity::SemiEulerian => label.yellow().bold().to_string(),
        Eulerianity::NotEulerian => label.red().bold().to_string(),
    }
}

/// Renders a node sequence as `0 -> 1 -> 2`.
#[must_use]
pub fn format_trail(trail: &[NodeIndex]) -> String {
    trail
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Renders one report as a pretty-printed JSON document.
///
/// # Errors
/// Returns an error when serialization fails.
pub fn render_json(report: &GraphReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| TrailmarkError::Other(e.to_string()))
}
