//! Geometry of the issue grid.

use serde::{Deserialize, Serialize};

use crate::model::Size;

pub const ISSUE_SIZE: Size = Size {
    width: 200.0,
    height: 74.0,
};
pub const ISSUE_X_GAP: f64 = ISSUE_SIZE.width * 0.25;
pub const ISSUE_Y_GAP: f64 = ISSUE_SIZE.height * 0.2;

/// Width of a link stroke in pixels.
pub const STROKE_WIDTH: f64 = 2.0;
/// Radius of the rounded corners of a link.
pub const ROUNDING_SIZE: f64 = 4.0;

/// Layout parameters. Missing fields fall back to the defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub issue_size: Size,
    pub x_gap: f64,
    pub y_gap: f64,
    pub stroke_width: f64,
    pub corner_radius: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            issue_size: ISSUE_SIZE,
            x_gap: ISSUE_X_GAP,
            y_gap: ISSUE_Y_GAP,
            stroke_width: STROKE_WIDTH,
            corner_radius: ROUNDING_SIZE,
        }
    }
}

impl LayoutConfig {
    /// Horizontal distance between the left edges of adjacent columns.
    pub fn column_pitch(&self) -> f64 {
        self.x_gap + self.issue_size.width
    }

    /// Vertical distance between the top edges of adjacent rows.
    pub fn row_pitch(&self) -> f64 {
        self.y_gap + self.issue_size.height
    }

    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}
