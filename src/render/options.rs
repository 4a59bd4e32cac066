//! Report rendering options.

/// Options for rendering text reports.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// List every individual difference instead of only counts
    pub detailed: bool,

    /// Number of characters of page text shown before truncating
    pub text_preview: usize,
}

impl ReportOptions {
    /// Create new report options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable detailed output.
    pub fn with_detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }

    /// Set the page text preview length.
    pub fn with_text_preview(mut self, chars: usize) -> Self {
        self.text_preview = chars;
        self
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            detailed: false,
            text_preview: 101,
        }
    }
}

/// Cut `text` to `max` characters, appending `...` when something was cut.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max).collect();
    out.push_str("...");
    out
}
