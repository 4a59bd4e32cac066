//! Position tracking and statistics over decoded documents.

mod analyzer;
mod summary;
mod tracker;

pub use analyzer::{code_to_char, codes_to_text, Analyzer};
pub use summary::{
    AnalyzedDocument, ContentSummary, FontMap, FontUsage, LayoutSummary, PageLayout,
    PositionRanges, PositionedChar, Range,
};
pub use tracker::{Cursor, PositionTracker, Step};
