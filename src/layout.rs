//! Layered grid layout.
//!
//! The acyclic issue graph is split into islands, each island is laid out
//! as a grid whose column is the topological depth of a vertex, and islands
//! are stacked top to bottom, largest first.

mod config;
mod engine;
mod grid;
mod islands;

pub use config::{ISSUE_SIZE, ISSUE_X_GAP, ISSUE_Y_GAP, LayoutConfig, ROUNDING_SIZE, STROKE_WIDTH};
pub use engine::LayoutEngine;
pub use grid::LayoutGrid;
pub use islands::group_islands;

use crate::graph::GraphError;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
    #[error("Issue not found for key: {0}")]
    IssueNotFound(String),
}
