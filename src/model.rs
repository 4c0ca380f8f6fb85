//! Value types shared by the layout pipeline.

use serde::{Deserialize, Serialize};

/// A unit of work, identified by a unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub key: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Issue {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            summary: String::new(),
            status: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }
}

/// "inward blocks outward": the edge runs from `inward_issue` to `outward_issue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub id: String,
    pub inward_issue: String,
    pub outward_issue: String,
}

impl Relation {
    pub fn new(
        id: impl Into<String>,
        inward_issue: impl Into<String>,
        outward_issue: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            inward_issue: inward_issue.into(),
            outward_issue: outward_issue.into(),
        }
    }

    pub fn touches(&self, key: &str) -> bool {
        self.inward_issue == key || self.outward_issue == key
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Grid coordinates of a placed issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridMeta {
    pub col_index: usize,
    pub row_index: usize,
}

/// An issue placed on the canvas. `position` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueLayout {
    pub issue: Issue,
    pub position: Position,
    pub size: Size,
    pub meta: GridMeta,
}

impl IssueLayout {
    pub fn key(&self) -> &str {
        &self.issue.key
    }

    pub fn right(&self) -> f64 {
        self.position.x + self.size.width
    }

    pub fn bottom(&self) -> f64 {
        self.position.y + self.size.height
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkMeta {
    pub relation_id: String,
    pub start_issue: String,
    pub end_issue: String,
}

/// A drawable relation. `path_commands` can be used as the `d` attribute of a `<path>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkLayout {
    pub path_commands: String,
    pub meta: LinkMeta,
}

/// The complete result of one layout pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphLayout {
    pub issues: Vec<IssueLayout>,
    pub links: Vec<LinkLayout>,
}

impl GraphLayout {
    pub fn find_issue(&self, key: &str) -> Option<&IssueLayout> {
        self.issues.iter().find(|v| v.key() == key)
    }

    /// Width and height of the box enclosing every placed issue.
    pub fn bounds(&self) -> Size {
        let (width, height) = self
            .issues
            .iter()
            .fold((0.0_f64, 0.0_f64), |(w, h), v| (w.max(v.right()), h.max(v.bottom())));
        Size { width, height }
    }
}
