//! Text and JSON views of a single analyzed document.

use serde::Serialize;

use crate::analyze::{
    code_to_char, AnalyzedDocument, ContentSummary, FontMap, LayoutSummary, PositionedChar,
};
use crate::model::{Document, Preamble};
use crate::parser::Diagnostic;

use super::report::join_pages;

// Pages longer than TEXT_INLINE_CHARS are shown as a preview of TEXT_PREVIEW_CHARS.
const TEXT_INLINE_CHARS: usize = 50;
const TEXT_PREVIEW_CHARS: usize = 51;
const POSITION_EXAMPLES: usize = 5;
const SPECIAL_EXAMPLES: usize = 3;

/// Serializable overview of one document.
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    pub preamble: &'a Preamble,
    pub fonts: &'a FontMap,
    pub layout: &'a LayoutSummary,
    pub content: &'a ContentSummary,
}

impl<'a> AnalysisReport<'a> {
    pub fn new(doc: &'a Document, analysis: &'a AnalyzedDocument) -> Self {
        Self {
            preamble: &doc.preamble,
            fonts: &analysis.fonts,
            layout: &analysis.layout,
            content: &analysis.content,
        }
    }
}

/// Preamble facts and headline counts.
pub fn summary(doc: &Document, analysis: &AnalyzedDocument) -> String {
    let mut lines = vec![
        "DVI File Analysis Summary".to_string(),
        "=".repeat(30),
        String::new(),
        format!("Format version: {}", doc.preamble.format),
        format!("Magnification: {}", doc.preamble.magnification),
    ];
    if !doc.preamble.comment.is_empty() {
        lines.push(format!("Comment: {}", doc.preamble.comment));
    }
    lines.push(String::new());

    lines.push(format!("Pages: {}", analysis.layout.total_pages));
    lines.push(format!(
        "Total characters: {}",
        analysis.content.total_characters
    ));
    lines.push(format!("Fonts used: {}", analysis.fonts.len()));
    lines.push(format!(
        "Special commands: {}",
        analysis.content.special_commands.len()
    ));
    lines.push(format!("Rules: {}", analysis.content.rules.len()));

    lines.join("\n")
}

/// Summary followed by the font, layout and content sections.
pub fn detailed(doc: &Document, analysis: &AnalyzedDocument) -> String {
    [
        summary(doc, analysis),
        String::new(),
        "Detailed Analysis".to_string(),
        "-".repeat(20),
        String::new(),
        fonts(&analysis.fonts),
        String::new(),
        layout(&analysis.layout),
        String::new(),
        content(&analysis.content),
    ]
    .join("\n")
}

pub fn fonts(fonts: &FontMap) -> String {
    if fonts.is_empty() {
        return "No fonts used".to_string();
    }

    let mut lines = vec!["Font Usage:".to_string()];
    for (font_num, usage) in fonts {
        lines.push(format!(
            "  Font {}: {} times on pages {}",
            font_num,
            usage.usage_count,
            join_pages(&usage.pages)
        ));
    }
    lines.join("\n")
}

pub fn layout(layout: &LayoutSummary) -> String {
    let ranges = &layout.position_ranges;
    let mut lines = vec![
        "Layout Information:".to_string(),
        format!("  Total pages: {}", layout.total_pages),
        format!("  X range: {} to {}", ranges.x.min, ranges.x.max),
        format!("  Y range: {} to {}", ranges.y.min, ranges.y.max),
    ];

    if !layout.page_dimensions.is_empty() {
        lines.push("  Page details:".to_string());
        for (index, page) in layout.page_dimensions.iter().enumerate() {
            lines.push(format!(
                "    Page {}: {} chars, {} commands",
                index + 1,
                page.character_count,
                page.commands_count
            ));
        }
    }
    lines.join("\n")
}

pub fn content(content: &ContentSummary) -> String {
    let mut lines = vec![
        "Content Information:".to_string(),
        format!("  Total characters: {}", content.total_characters),
        format!("  Special commands: {}", content.special_commands.len()),
        format!("  Rules: {}", content.rules.len()),
    ];

    if !content.special_commands.is_empty() {
        lines.push("  Special command examples:".to_string());
        for special in content.special_commands.iter().take(SPECIAL_EXAMPLES) {
            lines.push(format!("    {:?}", special.to_string_lossy()));
        }
    }
    lines.join("\n")
}

pub fn text(texts: &[String]) -> String {
    let mut lines = vec!["Text Content:".to_string()];
    for (index, text) in texts.iter().enumerate() {
        let count = text.chars().count();
        lines.push(format!("  Page {}: {} characters", index + 1, count));
        if count > TEXT_INLINE_CHARS {
            let preview: String = text.chars().take(TEXT_PREVIEW_CHARS).collect();
            lines.push(format!("    Preview: {:?}...", preview));
        } else {
            lines.push(format!("    Content: {:?}", text));
        }
    }
    lines.join("\n")
}

pub fn positions(positions: &[PositionedChar]) -> String {
    let mut lines = vec![
        "Character Positions:".to_string(),
        format!("  Total positioned characters: {}", positions.len()),
    ];

    if !positions.is_empty() {
        lines.push("  Position examples:".to_string());
        for pos in positions.iter().take(POSITION_EXAMPLES) {
            let glyph = if pos.char_code < 256 {
                code_to_char(pos.char_code).to_string()
            } else {
                format!("\\{}", pos.char_code)
            };
            lines.push(format!(
                "    '{}' at ({}, {}) on page {}",
                glyph, pos.x, pos.y, pos.page_index
            ));
        }
    }
    lines.join("\n")
}

/// Recoveries made while decoding, one per line.
pub fn diagnostics(diagnostics: &[Diagnostic]) -> String {
    let mut lines = vec![format!("Decoder warnings: {}", diagnostics.len())];
    lines.extend(diagnostics.iter().map(|d| format!("  ! {}", d)));
    lines.join("\n")
}
