//! Document analysis.

use crate::model::{Command, Document};

use super::summary::{
    AnalyzedDocument, ContentSummary, FontMap, LayoutSummary, PageLayout, PositionedChar,
};
use super::tracker::{PositionTracker, Step};

/// Derives font, layout, content, position and text statistics from a document.
///
/// Prefer [`Analyzer::analyze`] when more than one aspect is needed: it
/// replays the cursor once for layout, positions and text together, while
/// each of the per-aspect accessors does its own pass.
pub struct Analyzer<'a> {
    doc: &'a Document,
}

/// Everything that needs the cursor replayed.
struct Tracked {
    layout: LayoutSummary,
    positions: Vec<PositionedChar>,
    page_codes: Vec<Vec<u32>>,
}

impl<'a> Analyzer<'a> {
    pub fn new(doc: &'a Document) -> Self {
        Self { doc }
    }

    /// Run every analysis.
    pub fn analyze(&self) -> AnalyzedDocument {
        let fonts = self.analyze_fonts();
        let content = self.analyze_content();
        let Tracked {
            layout,
            positions,
            page_codes,
        } = self.track();
        let texts = page_codes.iter().map(|codes| codes_to_text(codes)).collect();

        log::debug!(
            "Analyzed {} page(s): {} character(s), {} font(s)",
            layout.total_pages,
            content.total_characters,
            fonts.len()
        );

        AnalyzedDocument {
            fonts,
            layout,
            content,
            positions,
            texts,
            page_codes,
        }
    }

    /// Font selections keyed by font number.
    pub fn analyze_fonts(&self) -> FontMap {
        let mut fonts = FontMap::new();
        for page in &self.doc.pages {
            for command in &page.commands {
                if let Command::Fnt { font_num } = command {
                    fonts.entry(*font_num).or_default().record(page.number());
                }
            }
        }
        fonts
    }

    /// Page count, per-page counts and position extents.
    pub fn analyze_layout(&self) -> LayoutSummary {
        self.track().layout
    }

    /// Character count, specials and rules.
    pub fn analyze_content(&self) -> ContentSummary {
        let mut content = ContentSummary::default();
        for page in &self.doc.pages {
            content.total_characters += page.character_count();
            for command in &page.commands {
                match command {
                    Command::Special { data } => content.special_commands.push(data.clone()),
                    Command::SetRule { .. } | Command::PutRule { .. } => {
                        content.rules.push(command.clone())
                    }
                    _ => {}
                }
            }
        }
        content
    }

    /// Every drawn character with its tracked position, in document order.
    pub fn character_positions(&self) -> Vec<PositionedChar> {
        self.track().positions
    }

    /// Drawn characters concatenated per page.
    pub fn extract_text(&self) -> Vec<String> {
        self.track()
            .page_codes
            .iter()
            .map(|codes| codes_to_text(codes))
            .collect()
    }

    fn track(&self) -> Tracked {
        let mut layout = LayoutSummary {
            total_pages: self.doc.page_count(),
            ..Default::default()
        };
        let mut positions = Vec::new();
        let mut page_codes = Vec::with_capacity(self.doc.page_count());

        for (page_index, page) in self.doc.pages.iter().enumerate() {
            let mut tracker = PositionTracker::new();
            let mut page_layout = PageLayout {
                commands_count: page.command_count(),
                ..Default::default()
            };
            let mut codes = Vec::new();

            for command in &page.commands {
                match tracker.apply(command) {
                    Step::Char { code, at } => {
                        page_layout.character_count += 1;
                        page_layout.position_ranges.include(at);
                        positions.push(PositionedChar {
                            page_index,
                            char_code: code,
                            x: at.x,
                            y: at.y,
                        });
                        codes.push(code);
                    }
                    Step::Moved(at) => page_layout.position_ranges.include(at),
                    Step::Other => {}
                }
            }

            layout
                .position_ranges
                .merge(&page_layout.position_ranges);
            layout.page_dimensions.push(page_layout);
            page_codes.push(codes);
        }

        Tracked {
            layout,
            positions,
            page_codes,
        }
    }
}

/// Render drawn character codes as text.
pub fn codes_to_text(codes: &[u32]) -> String {
    codes.iter().map(|&code| code_to_char(code)).collect()
}

/// Map a DVI character code to a `char`.
///
/// Codes below 256 are read as Latin-1; larger codes as Unicode scalars,
/// with U+FFFD for values that are not.
pub fn code_to_char(code: u32) -> char {
    if code < 256 {
        char::from(code as u8)
    } else {
        char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}
