use crate::highlight::{Highlight, HighlightState};
use crate::measure::TextMetrics;
use crate::model::{GraphLayout, IssueLayout, LinkLayout};
use std::fmt::{self, Write};

/// Margin around the drawing.
const MARGIN: f64 = 20.0;

pub struct SvgRenderer {
    metrics: TextMetrics,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            metrics: TextMetrics::default(),
        }
    }
}

impl SvgRenderer {
    pub fn render(&self, layout: &GraphLayout, highlight: &Highlight) -> Result<String, fmt::Error> {
        let mut svg = String::new();
        let size = layout.bounds();
        let width = size.width + MARGIN * 2.0;
        let height = size.height + MARGIN * 2.0;

        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            width, height, -MARGIN, -MARGIN, width, height
        )?;

        // Style
        writeln!(
            &mut svg,
            r#"<style>
  .issue-bg {{ fill: #fff; stroke: #333; stroke-width: 1.5; }}
  .issue-key {{ font-family: monospace; font-size: 14px; font-weight: bold; }}
  .issue-summary {{ font-family: sans-serif; font-size: 12px; fill: #444; }}
  .link {{ stroke: #666; stroke-width: 2; fill: none; }}
  .highlighted {{ stroke: #1868db; }}
  .obscured {{ opacity: 0.3; }}
</style>"#
        )?;

        // Links first (behind issues)
        for link in &layout.links {
            self.render_link(&mut svg, link, highlight.link_state(&link.meta.relation_id))?;
        }

        for issue in &layout.issues {
            self.render_issue(&mut svg, issue, highlight.issue_state(issue.key()))?;
        }

        writeln!(&mut svg, "</svg>")?;
        Ok(svg)
    }

    fn render_issue(&self, svg: &mut String, layout: &IssueLayout, state: HighlightState) -> fmt::Result {
        let x = layout.position.x;
        let y = layout.position.y;
        let w = layout.size.width;
        let h = layout.size.height;

        writeln!(
            svg,
            r#"<g class="issue {}" data-key="{}">"#,
            state.as_str(),
            escape_xml(layout.key())
        )?;
        writeln!(
            svg,
            r#"<rect class="issue-bg" x="{}" y="{}" width="{}" height="{}" rx="4" />"#,
            x, y, w, h
        )?;

        let text_x = x + self.metrics.padding_x;
        let key_y = y + self.metrics.padding_y + self.metrics.line_height * 0.8;
        writeln!(
            svg,
            r#"<text class="issue-key" x="{}" y="{}">{}</text>"#,
            text_x,
            key_y,
            escape_xml(layout.key())
        )?;

        if !layout.issue.summary.is_empty() {
            let summary = self
                .metrics
                .truncate(&layout.issue.summary, self.metrics.inner_width(w));
            writeln!(
                svg,
                r#"<text class="issue-summary" x="{}" y="{}">{}</text>"#,
                text_x,
                key_y + self.metrics.line_height,
                escape_xml(&summary)
            )?;
        }

        writeln!(svg, "</g>")
    }

    fn render_link(&self, svg: &mut String, link: &LinkLayout, state: HighlightState) -> fmt::Result {
        writeln!(
            svg,
            r#"<path class="link {}" data-relation="{}" d="{}" />"#,
            state.as_str(),
            escape_xml(&link.meta.relation_id),
            link.path_commands.trim().replace('\n', " ")
        )
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
