//! Layout engine core implementation.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::grid::LayoutGrid;
use super::islands::group_islands;
use super::{LayoutConfig, LayoutError};
use crate::graph::DirectedGraph;
use crate::issue_graph::make_issue_graph;
use crate::model::{GraphLayout, Issue, IssueLayout, Relation};
use crate::routing::route_links;

/// Layout engine configuration and computation.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Full pipeline: graph construction, cycle removal, issue layout and link routing.
    pub fn run(&self, issues: &[Issue], relations: &[Relation]) -> Result<GraphLayout, LayoutError> {
        let graph = make_issue_graph(issues, relations)?;
        let issues = self.layout(&graph, issues)?;
        let links = route_links(relations, &issues, &self.config);

        Ok(GraphLayout { issues, links })
    }

    /// Places every vertex of the acyclic `graph` that has an issue.
    pub fn layout(
        &self,
        graph: &DirectedGraph,
        issues: &[Issue],
    ) -> Result<Vec<IssueLayout>, LayoutError> {
        let issue_map: HashMap<&str, &Issue> =
            issues.iter().map(|issue| (issue.key.as_str(), issue)).collect();

        let mut placed = HashSet::new();
        let mut accumulated_grid_height = 0.0;
        let mut base_row_index = 0;
        let mut layouts = Vec::with_capacity(issues.len());

        for island in group_islands(graph) {
            let grid = LayoutGrid::collect(&island, &mut placed, |key| issue_map.contains_key(key));
            layouts.extend(grid.to_issue_layouts(
                &issue_map,
                &self.config,
                accumulated_grid_height,
                base_row_index,
            )?);

            let rows = grid.row_count();
            accumulated_grid_height += rows as f64 * self.config.row_pitch();
            base_row_index += rows;
        }

        debug!(placed = layouts.len(), rows = base_row_index, "issue layout done");
        Ok(layouts)
    }
}
