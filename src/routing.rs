//! Link routing: SVG path data between placed issues.

use std::collections::HashMap;

use tracing::debug;

use crate::layout::LayoutConfig;
use crate::model::{IssueLayout, LinkLayout, LinkMeta, Position, Relation};

/// Routes every relation whose endpoints were both placed. Others are dropped.
pub fn route_links(
    relations: &[Relation],
    issues: &[IssueLayout],
    config: &LayoutConfig,
) -> Vec<LinkLayout> {
    let issue_map: HashMap<&str, &IssueLayout> = issues.iter().map(|v| (v.key(), v)).collect();

    let links: Vec<LinkLayout> = relations
        .iter()
        .filter_map(|relation| {
            let inward = issue_map.get(relation.inward_issue.as_str())?;
            let outward = issue_map.get(relation.outward_issue.as_str())?;
            Some(LinkLayout {
                path_commands: path_commands(inward, outward, config),
                meta: LinkMeta {
                    relation_id: relation.id.clone(),
                    start_issue: inward.key().to_string(),
                    end_issue: outward.key().to_string(),
                },
            })
        })
        .collect();

    debug!(
        routed = links.len(),
        dropped = relations.len() - links.len(),
        "link routing done"
    );
    links
}

/// Path from the right-center edge of `inward` to the column of `outward`.
///
/// Same row: one horizontal segment. Otherwise the path runs right, turns
/// with a rounded corner toward the target row, runs vertically, and turns
/// back to finish horizontally in front of the target column.
pub fn path_commands(inward: &IssueLayout, outward: &IssueLayout, config: &LayoutConfig) -> String {
    let start = Position {
        x: inward.position.x + inward.size.width,
        y: inward.position.y + inward.size.height / 2.0 - config.stroke_width / 2.0,
    };

    let diff_x = outward.meta.col_index as f64 - inward.meta.col_index as f64;
    let diff_y = outward.meta.row_index as f64 - inward.meta.row_index as f64;
    let length_x = config.x_gap + (inward.size.width + config.x_gap) * (diff_x - 1.0);
    let length_y = ((config.y_gap + inward.size.height) * diff_y).abs();

    let r = config.corner_radius;
    let half_gap = config.x_gap / 2.0;

    if diff_y > 0.0 {
        format!(
            "M {},{} h {}\ns {r},0 {r},0 {r},{r}\nv {}\ns 0,{r} 0,{r} {r},{r}\nh {}\n",
            start.x,
            start.y,
            length_x - half_gap - r,
            length_y - r * 2.0,
            half_gap - r,
        )
    } else if diff_y < 0.0 {
        format!(
            "M {},{} h {}\ns {r},0 {r},0 {r},-{r}\nv -{}\ns 0,-{r} 0,-{r} {r},-{r}\nh {}\n",
            start.x,
            start.y,
            length_x - half_gap - r,
            length_y - r * 2.0,
            half_gap - r,
        )
    } else {
        format!("M {},{} h {}", start.x, start.y, length_x)
    }
}
