//! Structural comparison of two decoded documents.
//!
//! Three independent comparisons can be selected through [`DiffOptions`]:
//! layout (page count, index-aligned character positions, extents),
//! content (character count, specials, rules, per-page text) and fonts
//! (font numbers and selection counts).
//!
//! # Example
//!
//! ```no_run
//! use dvitools::diff::{DiffEngine, DiffOptions};
//!
//! let engine = DiffEngine::new(DiffOptions::new().fonts_only());
//! let result = engine.diff_files("old.dvi", "new.dvi")?;
//! println!("identical: {}", result.summary().is_identical());
//! # Ok::<(), dvitools::Error>(())
//! ```

pub mod content;
pub mod fonts;
pub mod layout;

pub use content::{ContentDiff, ListDiff, PageTextDiff, TextDifferences};
pub use fonts::{FontEntry, FontUsageDiff, FontsDiff, UsageChange};
pub use layout::{
    DimensionDifferences, LayoutDiff, PositionDifference, PositionDifferences, RangeDiff,
};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analyze::{AnalyzedDocument, Analyzer};
use crate::error::Result;
use crate::model::Document;
use crate::parser::{DviParser, ParseOptions};

/// Which comparisons to run.
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Compare layout
    pub layout: bool,

    /// Compare content
    pub content: bool,

    /// Compare fonts
    pub fonts: bool,

    /// Decode both inputs concurrently (needs the `parallel` feature)
    pub parallel: bool,

    /// Options used to decode both inputs
    pub parse: ParseOptions,
}

impl DiffOptions {
    /// Create new diff options with every comparison enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare layout only.
    pub fn layout_only(mut self) -> Self {
        self.layout = true;
        self.content = false;
        self.fonts = false;
        self
    }

    /// Compare content only.
    pub fn content_only(mut self) -> Self {
        self.layout = false;
        self.content = true;
        self.fonts = false;
        self
    }

    /// Compare fonts only.
    pub fn fonts_only(mut self) -> Self {
        self.layout = false;
        self.content = false;
        self.fonts = true;
        self
    }

    /// Enable or disable concurrent decoding.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set decoding options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            layout: true,
            content: true,
            fonts: true,
            parallel: true,
            parse: ParseOptions::default(),
        }
    }
}

/// Signed comparison of two counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountDiff {
    pub file1: usize,
    pub file2: usize,
    pub difference: i64,
    pub changed: bool,
}

impl CountDiff {
    pub fn new(file1: usize, file2: usize) -> Self {
        Self {
            file1,
            file2,
            difference: file2 as i64 - file1 as i64,
            changed: file1 != file2,
        }
    }
}

/// Result of a comparison; members are present only when requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutDiff>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentDiff>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts: Option<FontsDiff>,
}

impl DiffResult {
    /// Count the differences per comparison.
    pub fn summary(&self) -> DiffSummary {
        let layout_differences = self
            .layout
            .as_ref()
            .map(|l| l.position_differences.total_differences);
        let content_differences = self
            .content
            .as_ref()
            .map(|c| c.character_count_diff.difference.unsigned_abs() as usize);
        let font_differences = self.fonts.as_ref().map(FontsDiff::change_count);

        let total_differences = layout_differences.unwrap_or(0)
            + content_differences.unwrap_or(0)
            + font_differences.unwrap_or(0);

        DiffSummary {
            layout_differences,
            content_differences,
            font_differences,
            total_differences,
        }
    }
}

/// Difference counts behind the report's verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    /// Index-aligned position differences
    pub layout_differences: Option<usize>,
    /// Absolute character count delta
    pub content_differences: Option<usize>,
    /// Added, removed and changed-usage fonts
    pub font_differences: Option<usize>,
    pub total_differences: usize,
}

impl DiffSummary {
    pub fn is_identical(&self) -> bool {
        self.total_differences == 0
    }
}

/// Runs the selected comparisons.
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    options: DiffOptions,
}

impl DiffEngine {
    pub fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Compare two analyzed documents.
    pub fn compare(&self, doc1: &AnalyzedDocument, doc2: &AnalyzedDocument) -> DiffResult {
        DiffResult {
            layout: self.options.layout.then(|| layout::compare(doc1, doc2)),
            content: self.options.content.then(|| content::compare(doc1, doc2)),
            fonts: self.options.fonts.then(|| fonts::compare(doc1, doc2)),
        }
    }

    /// Analyze and compare two decoded documents.
    pub fn compare_documents(&self, doc1: &Document, doc2: &Document) -> DiffResult {
        let analyzed1 = Analyzer::new(doc1).analyze();
        let analyzed2 = Analyzer::new(doc2).analyze();
        self.compare(&analyzed1, &analyzed2)
    }

    /// Decode, analyze and compare two byte buffers.
    pub fn diff_bytes(&self, data1: &[u8], data2: &[u8]) -> Result<DiffResult> {
        let parse = &self.options.parse;
        let (doc1, doc2) = self.decode_pair(
            || DviParser::from_bytes_with_options(data1, parse.clone()).parse(),
            || DviParser::from_bytes_with_options(data2, parse.clone()).parse(),
        );
        Ok(self.compare_documents(&doc1?, &doc2?))
    }

    /// Decode, analyze and compare two files.
    pub fn diff_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        path1: P,
        path2: Q,
    ) -> Result<DiffResult> {
        let (path1, path2) = (path1.as_ref(), path2.as_ref());
        let parse = &self.options.parse;
        log::debug!("Comparing {} with {}", path1.display(), path2.display());

        let (doc1, doc2) = self.decode_pair(
            || DviParser::open_with_options(path1, parse.clone())?.parse(),
            || DviParser::open_with_options(path2, parse.clone())?.parse(),
        );
        Ok(self.compare_documents(&doc1?, &doc2?))
    }

    /// Run two independent decodes, concurrently when enabled.
    fn decode_pair<A, B>(&self, decode1: A, decode2: B) -> (Result<Document>, Result<Document>)
    where
        A: FnOnce() -> Result<Document> + Send,
        B: FnOnce() -> Result<Document> + Send,
    {
        #[cfg(feature = "parallel")]
        if self.options.parallel {
            return rayon::join(decode1, decode2);
        }

        (decode1(), decode2())
    }
}
