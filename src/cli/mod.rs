// src/cli/mod.rs
//! Command handlers behind the `trailmark` binary.

pub mod args;

pub use args::{Cli, Commands};

use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;

use crate::analysis::{self, GraphReport};
use crate::config::{Config, OutputFormat};
use crate::discovery;
use crate::reporting;

/// Runs batch analysis over the given paths and prints one report per file.
///
/// Returns false when any file failed to load, parse, or validate.
///
/// # Errors
/// Returns an error when path discovery itself fails.
pub fn handle_analyze(paths: &[PathBuf], config: &Config) -> Result<bool> {
    let files = collect_files(paths)?;
    let mut clean = true;

    for (path, outcome) in analysis::analyze_all(&files) {
        match outcome {
            Ok(report) => print!("{}", render_report(&report, config)?),
            Err(e) => {
                eprintln!("{} {}: {e}", "error:".red().bold(), path.display());
                clean = false;
            }
        }
    }

    Ok(clean)
}

/// Prints the bare trail of one graph file. Empty output means no trail.
///
/// # Errors
/// Returns an error when the file cannot be analyzed.
pub fn handle_trail(file: &Path) -> Result<()> {
    let report = analysis::analyze_file(file)?;
    let rendered: Vec<String> = report.trail.iter().map(ToString::to_string).collect();
    println!("{}", rendered.join(" "));
    Ok(())
}

/// Expands files and directories into the concrete analysis list.
fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if paths.is_empty() {
        return Ok(discovery::discover(Path::new("."))?);
    }

    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(discovery::discover(path)?);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn render_report(report: &GraphReport, config: &Config) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(reporting::render_text(report, config.show_trail)),
        OutputFormat::Json => Ok(reporting::render_json(report)? + "\n"),
    }
}
