//! Highlighting of the relations around a hovered issue.

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::Relation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightState {
    Normal,
    Highlighted,
    Obscured,
}

impl HighlightState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Highlighted => "highlighted",
            Self::Obscured => "obscured",
        }
    }
}

/// The set of highlighted relations, keyed by relation id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlight {
    relations: IndexMap<String, Relation>,
}

impl Highlight {
    /// Nothing highlighted.
    pub fn none() -> Self {
        Self::default()
    }

    /// Highlights every relation that has `key` as an endpoint.
    pub fn related_to(key: &str, relations: &[Relation]) -> Self {
        Self {
            relations: relations
                .iter()
                .filter(|r| r.touches(key))
                .map(|r| (r.id.clone(), r.clone()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    pub fn relations(&self) -> impl Iterator<Item = &Relation> {
        self.relations.values()
    }

    pub fn issue_state(&self, key: &str) -> HighlightState {
        if self.relations.values().any(|r| r.touches(key)) {
            HighlightState::Highlighted
        } else if self.is_empty() {
            HighlightState::Normal
        } else {
            HighlightState::Obscured
        }
    }

    pub fn link_state(&self, relation_id: &str) -> HighlightState {
        if self.relations.contains_key(relation_id) {
            HighlightState::Highlighted
        } else if self.is_empty() {
            HighlightState::Normal
        } else {
            HighlightState::Obscured
        }
    }
}
