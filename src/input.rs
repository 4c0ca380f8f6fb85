//! JSON input: the issue/relation snapshot to lay out.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{Issue, Relation};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate issue key: {0}")]
    DuplicateIssue(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphInput {
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub relations: Vec<Relation>,
}

impl GraphInput {
    pub fn from_json(source: &str) -> Result<Self, InputError> {
        let input: GraphInput = serde_json::from_str(source)?;

        let mut seen = HashSet::new();
        for issue in &input.issues {
            if !seen.insert(issue.key.as_str()) {
                return Err(InputError::DuplicateIssue(issue.key.clone()));
            }
        }

        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        let input = GraphInput::from_json(
            r#"{
                "issues": [
                    {"key": "A-1", "summary": "Design"},
                    {"key": "A-2", "status": "Done"}
                ],
                "relations": [
                    {"id": "10", "inwardIssue": "A-1", "outwardIssue": "A-2"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(input.issues.len(), 2);
        assert_eq!(input.issues[0].summary, "Design");
        assert_eq!(input.issues[1].status.as_deref(), Some("Done"));
        assert_eq!(input.relations[0], Relation::new("10", "A-1", "A-2"));
    }

    #[test]
    fn test_relations_are_optional() {
        let input = GraphInput::from_json(r#"{"issues": [{"key": "A-1"}]}"#).unwrap();
        assert!(input.relations.is_empty());
    }

    #[test]
    fn test_duplicate_issue_key() {
        let result = GraphInput::from_json(r#"{"issues": [{"key": "A"}, {"key": "A"}]}"#);
        assert!(matches!(result, Err(InputError::DuplicateIssue(key)) if key == "A"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            GraphInput::from_json("{"),
            Err(InputError::Json(_))
        ));
    }
}
