//! Aggregates derived from a decoded document.

use std::collections::BTreeMap;

use crate::model::{Command, RawBytes};
use serde::{Deserialize, Serialize};

use super::Cursor;

/// How often a font was selected and on which pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontUsage {
    /// Number of font-select commands naming this font
    pub usage_count: u32,

    /// Distinct `\count0` values of the pages it was selected on, first-seen order
    pub pages: Vec<i32>,
}

impl FontUsage {
    /// Record one selection on the page numbered `page`.
    pub fn record(&mut self, page: i32) {
        self.usage_count += 1;
        if !self.pages.contains(&page) {
            self.pages.push(page);
        }
    }
}

/// Font usage keyed by font number.
pub type FontMap = BTreeMap<u32, FontUsage>;

/// A drawn character and where it was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionedChar {
    /// Index of the page in file order
    pub page_index: usize,
    /// Character code
    pub char_code: u32,
    /// Horizontal position before the character's advance
    pub x: i32,
    /// Vertical position
    pub y: i32,
}

/// Inclusive min/max of one coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub min: i32,
    pub max: i32,
}

impl Range {
    pub fn include(&mut self, value: i32) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    pub fn merge(&mut self, other: &Range) {
        self.include(other.min);
        self.include(other.max);
    }
}

/// Extent of tracked positions. Both ranges always contain the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRanges {
    pub x: Range,
    pub y: Range,
}

impl PositionRanges {
    pub fn include(&mut self, at: Cursor) {
        self.x.include(at.x);
        self.y.include(at.y);
    }

    pub fn merge(&mut self, other: &PositionRanges) {
        self.x.merge(&other.x);
        self.y.merge(&other.y);
    }
}

/// Per-page layout statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLayout {
    pub commands_count: usize,
    pub character_count: usize,
    pub position_ranges: PositionRanges,
}

/// Document layout statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSummary {
    pub total_pages: usize,
    pub page_dimensions: Vec<PageLayout>,
    pub position_ranges: PositionRanges,
}

/// Document content statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSummary {
    /// Number of `set_char` and `put_char` commands
    pub total_characters: usize,
    /// Special payloads in document order
    pub special_commands: Vec<RawBytes>,
    /// `set_rule` and `put_rule` commands in document order
    pub rules: Vec<Command>,
}

/// Everything the analyzer derives from one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedDocument {
    pub fonts: FontMap,
    pub layout: LayoutSummary,
    pub content: ContentSummary,
    pub positions: Vec<PositionedChar>,
    /// Reconstructed text, one entry per page
    pub texts: Vec<String>,
    /// Drawn character codes, one entry per page
    pub page_codes: Vec<Vec<u32>>,
}
