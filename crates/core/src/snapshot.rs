//! Plain-text forest snapshots
//!
//! Serializes a forest to a human-readable grid dump: one line per row,
//! single-glyph tokens separated by spaces. The only persisted artifact of
//! a simulation run.

use crate::forest::Forest;
use std::fs;
use std::path::Path;
use tracing::info;

/// Default output path for forest snapshots
pub const DEFAULT_SNAPSHOT_PATH: &str = "forest_visualisation.txt";

/// Token rendered for a cell with no tree
const EMPTY_CELL_TOKEN: &str = "💩";

/// Render a forest as a text grid
///
/// One line per row, cells separated by single spaces. Alive trees, burnt
/// trees and empty cells each render as a distinct single-glyph token.
pub fn render_forest(forest: &Forest) -> String {
    let rows: Vec<String> = forest
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Some(tree) => tree.to_string(),
                    None => EMPTY_CELL_TOKEN.to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    rows.join("\n")
}

/// Save a forest rendering to a text file
///
/// Any previous contents of the file are replaced.
///
/// # Errors
/// Returns an error when the file cannot be written.
pub fn save_forest<P: AsRef<Path>>(forest: &Forest, path: P) -> Result<(), SnapshotError> {
    fs::write(&path, render_forest(forest))
        .map_err(|e| SnapshotError::WriteFailed(e.to_string()))?;

    info!("saved forest snapshot to {}", path.as_ref().display());
    Ok(())
}

/// Errors that can occur while writing a snapshot
#[derive(Debug)]
pub enum SnapshotError {
    /// Failed to write the snapshot file
    WriteFailed(String),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::WriteFailed(msg) => write!(f, "failed to write snapshot: {msg}"),
        }
    }
}

impl std::error::Error for SnapshotError {}
