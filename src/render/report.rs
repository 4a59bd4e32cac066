//! Human-readable diff reports.

use crate::diff::{ContentDiff, DiffResult, FontsDiff, LayoutDiff, PositionDifference};

use super::options::{truncate, ReportOptions};

/// Renders a [`DiffResult`] as a plain-text report.
pub struct DiffReport<'a> {
    result: &'a DiffResult,
    options: ReportOptions,
}

impl<'a> DiffReport<'a> {
    pub fn new(result: &'a DiffResult, options: ReportOptions) -> Self {
        Self { result, options }
    }

    /// Full report: one section per comparison, then the summary.
    pub fn render(&self) -> String {
        let mut sections = vec![format!("DVI Files Comparison Report\n{}\n", "=".repeat(40))];

        if let Some(layout) = &self.result.layout {
            sections.push(format!("{}\n", self.layout_section(layout)));
        }
        if let Some(content) = &self.result.content {
            sections.push(format!("{}\n", self.content_section(content)));
        }
        if let Some(fonts) = &self.result.fonts {
            sections.push(format!("{}\n", self.fonts_section(fonts)));
        }
        sections.push(self.summary());

        sections.join("\n")
    }

    /// Difference counts and the overall verdict.
    pub fn summary(&self) -> String {
        let summary = self.result.summary();
        let mut lines = vec!["Summary:".to_string(), "-".repeat(20)];

        if let Some(n) = summary.layout_differences {
            lines.push(format!("Layout differences: {}", n));
        }
        if let Some(n) = summary.content_differences {
            lines.push(format!("Content differences: {}", n));
        }
        if let Some(n) = summary.font_differences {
            lines.push(format!("Font differences: {}", n));
        }

        lines.push(String::new());
        lines.push(format!(
            "Total differences detected: {}",
            summary.total_differences
        ));
        lines.push(if summary.is_identical() {
            "Files are identical.".to_string()
        } else {
            "Files have differences.".to_string()
        });

        lines.join("\n")
    }

    fn layout_section(&self, layout: &LayoutDiff) -> String {
        let mut lines = vec!["Layout Comparison:".to_string(), "-".repeat(20)];

        let pages = &layout.page_count_diff;
        if pages.changed {
            lines.push(format!(
                "Page count changed: {} → {} ({})",
                pages.file1,
                pages.file2,
                signed(pages.difference)
            ));
        } else {
            lines.push(format!("Page count: {} (unchanged)", pages.file1));
        }

        let positions = &layout.position_differences;
        lines.push(format!(
            "Position differences: {}",
            positions.total_differences
        ));
        if self.options.detailed {
            for diff in &positions.differences {
                lines.push(match diff {
                    PositionDifference::Added { position: p, index } => format!(
                        "  + Added at index {}: char {} at ({}, {})",
                        index, p.char_code, p.x, p.y
                    ),
                    PositionDifference::Removed { position: p, index } => format!(
                        "  - Removed at index {}: char {} at ({}, {})",
                        index, p.char_code, p.x, p.y
                    ),
                    PositionDifference::Moved {
                        from, to, index, ..
                    } => format!(
                        "  ~ Moved at index {}: ({}, {}) → ({}, {})",
                        index, from.x, from.y, to.x, to.y
                    ),
                });
            }
        }

        let dims = &layout.dimension_differences;
        if dims.x_range.changed() || dims.y_range.changed() {
            lines.push("Dimension changes detected:".to_string());
            for (axis, range) in [("X", &dims.x_range), ("Y", &dims.y_range)] {
                if range.changed() {
                    lines.push(format!(
                        "  {} range: {}..{} → {}..{}",
                        axis, range.file1.min, range.file1.max, range.file2.min, range.file2.max
                    ));
                }
            }
        } else {
            lines.push("Dimensions: unchanged".to_string());
        }

        lines.join("\n")
    }

    fn content_section(&self, content: &ContentDiff) -> String {
        let mut lines = vec!["Content Comparison:".to_string(), "-".repeat(20)];

        let chars = &content.character_count_diff;
        if chars.changed {
            lines.push(format!(
                "Character count changed: {} → {} ({})",
                chars.file1,
                chars.file2,
                signed(chars.difference)
            ));
        } else {
            lines.push(format!("Character count: {} (unchanged)", chars.file1));
        }

        let specials = &content.special_commands_diff;
        if specials.changed {
            lines.push(format!(
                "Special commands changed: {} → {}",
                specials.file1_count, specials.file2_count
            ));
            if self.options.detailed {
                lines.extend(specials.added.iter().map(|s| format!("  + Added: {}", s)));
                lines.extend(specials.removed.iter().map(|s| format!("  - Removed: {}", s)));
            }
        } else {
            lines.push(format!(
                "Special commands: {} (unchanged)",
                specials.file1_count
            ));
        }

        let rules = &content.rules_diff;
        if rules.changed {
            lines.push(format!(
                "Rules changed: {} → {}",
                rules.file1_count, rules.file2_count
            ));
            if self.options.detailed {
                lines.extend(rules.added.iter().map(|r| format!("  + Added rule: {}", r)));
                lines.extend(rules.removed.iter().map(|r| format!("  - Removed rule: {}", r)));
            }
        } else {
            lines.push(format!("Rules: {} (unchanged)", rules.file1_count));
        }

        let text = &content.text_differences;
        if text.pages_with_differences > 0 {
            lines.push(format!(
                "Pages with text differences: {}",
                text.pages_with_differences
            ));
            if self.options.detailed {
                let preview = self.options.text_preview;
                for page in &text.differences {
                    lines.push(format!(
                        "  Page {}: {} → {} characters",
                        page.page + 1,
                        page.file1_chars,
                        page.file2_chars
                    ));
                    lines.push(format!("    Old text: {}", truncate(&page.text1, preview)));
                    lines.push(format!("    New text: {}", truncate(&page.text2, preview)));
                }
            }
        } else {
            lines.push("Text content: identical".to_string());
        }

        lines.join("\n")
    }

    fn fonts_section(&self, fonts: &FontsDiff) -> String {
        let mut lines = vec!["Font Comparison:".to_string(), "-".repeat(20)];

        let usage = &fonts.font_usage_diff;
        if usage.different {
            lines.push(format!(
                "Font usage changed: {} → {} fonts",
                usage.file1_font_count, usage.file2_font_count
            ));
            lines.push(format!("Common fonts: {}", usage.common_fonts));
        } else {
            lines.push(format!(
                "Font usage: {} fonts (unchanged)",
                usage.file1_font_count
            ));
        }

        if !fonts.added_fonts.is_empty() {
            lines.push("Added fonts:".to_string());
            for font in &fonts.added_fonts {
                let mut line = format!(
                    "  + Font {}: used {} times",
                    font.font_num, font.usage_count
                );
                if self.options.detailed {
                    line.push_str(&format!(" on pages {}", join_pages(&font.pages)));
                }
                lines.push(line);
            }
        }

        if !fonts.removed_fonts.is_empty() {
            lines.push("Removed fonts:".to_string());
            for font in &fonts.removed_fonts {
                let mut line = format!(
                    "  - Font {}: was used {} times",
                    font.font_num, font.usage_count
                );
                if self.options.detailed {
                    line.push_str(&format!(" on pages {}", join_pages(&font.pages)));
                }
                lines.push(line);
            }
        }

        if !fonts.changed_usage.is_empty() {
            lines.push("Changed font usage:".to_string());
            for change in &fonts.changed_usage {
                lines.push(format!(
                    "  ~ Font {}: {} → {} ({})",
                    change.font_num,
                    change.file1_usage,
                    change.file2_usage,
                    signed(change.usage_diff)
                ));
            }
        }

        lines.join("\n")
    }
}

/// Format with an explicit `+` for non-negative values.
fn signed(value: i64) -> String {
    if value >= 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

pub(crate) fn join_pages(pages: &[i32]) -> String {
    pages
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
