//! Column/row grid of a single island.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use super::{LayoutConfig, LayoutError};
use crate::graph::{DirectedGraph, Vertex};
use crate::model::{GridMeta, Issue, IssueLayout, Position};

/// Vertices of one island by column. The column index is the vertex depth,
/// the row index is the position within the column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutGrid {
    columns: Vec<Vec<Vertex>>,
}

impl LayoutGrid {
    /// Collects the vertices of `island` level by level, deepest first.
    ///
    /// Collection of a level stops at the first vertex that is already in
    /// `placed` or rejected by `is_known`; the rest of that level is left out.
    /// Collected vertices are added to `placed`.
    pub fn collect(
        island: &DirectedGraph,
        placed: &mut HashSet<Vertex>,
        is_known: impl Fn(&str) -> bool,
    ) -> Self {
        let depths = island.depths();
        let max_depth = depths.values().max().map_or(0, |d| d + 1);
        let mut columns: Vec<Vec<Vertex>> = vec![Vec::new(); max_depth];

        for depth in (0..max_depth).rev() {
            let level = depths.iter().filter(|&(_, d)| *d == depth).map(|(v, _)| *v);
            for vertex in level {
                if placed.contains(vertex) || !is_known(vertex) {
                    trace!(vertex, depth, "stopping level collection");
                    break;
                }
                columns[depth].push(vertex.to_string());
                placed.insert(vertex.to_string());
            }
        }

        Self { columns }
    }

    pub fn columns(&self) -> &[Vec<Vertex>] {
        &self.columns
    }

    /// Length of the longest column.
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn position(&self, col: usize, row: usize) -> Option<&str> {
        self.columns.get(col)?.get(row).map(String::as_str)
    }

    /// Pixel layout of the grid, shifted down by `base_y` and `base_row`.
    /// Fails if the grid holds a vertex without an issue.
    pub fn to_issue_layouts(
        &self,
        issues: &HashMap<&str, &Issue>,
        config: &LayoutConfig,
        base_y: f64,
        base_row: usize,
    ) -> Result<Vec<IssueLayout>, LayoutError> {
        let mut layouts = Vec::new();

        for (col, column) in self.columns.iter().enumerate() {
            for (row, key) in column.iter().enumerate() {
                let issue = issues
                    .get(key.as_str())
                    .ok_or_else(|| LayoutError::IssueNotFound(key.clone()))?;

                layouts.push(IssueLayout {
                    issue: (*issue).clone(),
                    position: Position {
                        x: col as f64 * config.column_pitch(),
                        y: base_y + row as f64 * config.row_pitch(),
                    },
                    size: config.issue_size,
                    meta: GridMeta {
                        col_index: col,
                        row_index: base_row + row,
                    },
                });
            }
        }

        Ok(layouts)
    }
}
