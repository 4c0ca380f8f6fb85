pub mod graph;
pub mod highlight;
pub mod input;
pub mod issue_graph;
pub mod layout;
pub mod measure;
pub mod model;
pub mod routing;
pub mod svg;

use wasm_bindgen::prelude::*;

use highlight::Highlight;
use input::GraphInput;
use layout::{LayoutEngine, LayoutError};
use model::{GraphLayout, Issue, Relation};
use svg::SvgRenderer;

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Lay out issues and relations with the default geometry.
pub fn layout_issue_graph(issues: &[Issue], relations: &[Relation]) -> Result<GraphLayout, LayoutError> {
    LayoutEngine::default().run(issues, relations)
}

/// Lay out a JSON snapshot and return the layout as JSON
#[wasm_bindgen(js_name = "issueGraphLayout")]
pub fn issue_graph_layout(input: &str) -> Result<String, String> {
    let input = GraphInput::from_json(input).map_err(|e| e.to_string())?;
    let layout = layout_issue_graph(&input.issues, &input.relations).map_err(|e| e.to_string())?;

    serde_json::to_string(&layout).map_err(|e| e.to_string())
}

/// Lay out a JSON snapshot and render it to SVG
#[wasm_bindgen(js_name = "issueGraphSvg")]
pub fn issue_graph_svg(input: &str, highlight: Option<String>) -> Result<String, String> {
    let input = GraphInput::from_json(input).map_err(|e| e.to_string())?;
    let layout = layout_issue_graph(&input.issues, &input.relations).map_err(|e| e.to_string())?;

    let highlight = highlight
        .as_deref()
        .map(|key| Highlight::related_to(key, &input.relations))
        .unwrap_or_default();

    SvgRenderer::default()
        .render(&layout, &highlight)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = r#"{
        "issues": [{"key": "a"}, {"key": "b"}],
        "relations": [{"id": "1", "inwardIssue": "a", "outwardIssue": "b"}]
    }"#;

    #[test]
    fn test_issue_graph_layout_json() {
        let json = issue_graph_layout(INPUT).unwrap();
        let layout: GraphLayout = serde_json::from_str(&json).unwrap();

        assert_eq!(layout.issues.len(), 2);
        assert_eq!(layout.links[0].path_commands, "M 200,36 h 50");
        assert!(json.contains(r#""pathCommands""#));
        assert!(json.contains(r#""startIssue":"a""#));
    }

    #[test]
    fn test_issue_graph_svg() {
        let svg = issue_graph_svg(INPUT, Some("a".to_string())).unwrap();
        assert!(svg.contains(r#"class="link highlighted""#));
    }

    #[test]
    fn test_invalid_input_reports_error() {
        let err = issue_graph_layout("not json").unwrap_err();
        assert!(err.starts_with("Invalid JSON"));
    }
}
