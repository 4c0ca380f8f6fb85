use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub struct TextMetrics {
    pub char_width: f64,
    pub line_height: f64,
    pub padding_x: f64,
    pub padding_y: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 20.0,
            padding_x: 12.0,
            padding_y: 8.0,
        }
    }
}

impl TextMetrics {
    pub fn text_width(&self, text: &str) -> f64 {
        let width = UnicodeWidthStr::width(text);
        width as f64 * self.char_width
    }

    /// Shortens `text` with a trailing ellipsis so it fits in `max_width`.
    pub fn truncate(&self, text: &str, max_width: f64) -> String {
        if self.text_width(text) <= max_width {
            return text.to_string();
        }

        let budget = max_width - self.char_width;
        let mut width = 0.0;
        let mut out = String::new();
        for c in text.chars() {
            let w = UnicodeWidthChar::width(c).unwrap_or(0) as f64 * self.char_width;
            if width + w > budget {
                break;
            }
            width += w;
            out.push(c);
        }
        out.push('…');
        out
    }

    /// Room for text inside a box of `box_width`.
    pub fn inner_width(&self, box_width: f64) -> f64 {
        (box_width - self.padding_x * 2.0).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        let m = TextMetrics::default();
        assert_eq!(m.text_width("PROJ-1"), 6.0 * 8.0);
    }

    #[test]
    fn test_unicode_width() {
        let m = TextMetrics::default();
        // 全角文字は幅2
        assert_eq!(m.text_width("課題"), 4.0 * 8.0);
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        let m = TextMetrics::default();
        assert_eq!(m.truncate("Fix", 100.0), "Fix");
    }

    #[test]
    fn test_truncate_long_text() {
        let m = TextMetrics::default();
        // 5 cells of budget: 4 characters plus the ellipsis.
        assert_eq!(m.truncate("Implement login", 40.0), "Impl…");
    }

    #[test]
    fn test_truncate_wide_characters() {
        let m = TextMetrics::default();
        assert_eq!(m.truncate("課題を修正する", 48.0), "課題…");
    }

    #[test]
    fn test_inner_width() {
        let m = TextMetrics::default();
        assert_eq!(m.inner_width(200.0), 176.0);
        assert_eq!(m.inner_width(10.0), 0.0);
    }
}
