// src/discovery.rs
//! Locates graph files for batch analysis.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Recursively collects `.json` graph files under `root`, sorted so batch
/// output order is deterministic.
///
/// # Errors
/// Returns an error when a directory entry cannot be read.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() && is_graph_file(entry.path()) {
            found.push(entry.path().to_path_buf());
        }
    }

    found.sort();
    Ok(found)
}

fn is_graph_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}
