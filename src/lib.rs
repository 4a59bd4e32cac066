//! # dvitools
//!
//! DVI (DeVice Independent) decoding, analysis and comparison for Rust.
//!
//! This library decodes the TeX typesetter's DVI output into a typed
//! command stream, derives font usage, character positions, page text and
//! layout extents from it, and compares two documents structurally.
//!
//! ## Quick Start
//!
//! ```no_run
//! use dvitools::{analyze, diff_files, parse_file, DiffOptions};
//!
//! fn main() -> dvitools::Result<()> {
//!     // Decode a DVI file
//!     let doc = parse_file("paper.dvi")?;
//!     let analysis = analyze(&doc);
//!     println!("{} characters", analysis.content.total_characters);
//!
//!     // Compare two revisions
//!     let result = diff_files("old.dvi", "new.dvi", DiffOptions::new())?;
//!     println!("{} differences", result.summary().total_differences);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Best-effort decoding**: partial documents with diagnostics instead of hard failures
//! - **Position tracking**: cursor movement with push/pop, per-character positions
//! - **Structural diff**: layout, content and font comparisons
//! - **Parallel decoding**: both sides of a diff decoded with Rayon

pub mod analyze;
pub mod detect;
pub mod diff;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use analyze::{AnalyzedDocument, Analyzer, FontUsage, PositionTracker, PositionedChar};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_dvi, DviFormat};
pub use diff::{DiffEngine, DiffOptions, DiffResult, DiffSummary};
pub use error::{Error, Result};
pub use model::{Command, Document, Page, Postamble, Preamble, RawBytes};
pub use parser::{Diagnostic, DviParser, ErrorMode, ParseOptions, ParseOutcome};
pub use render::{DiffReport, JsonFormat, ReportOptions};

use std::io::Read;
use std::path::Path;

/// Decode a DVI file and return the document.
///
/// # Arguments
///
/// * `path` - Path to the DVI file
///
/// # Example
///
/// ```no_run
/// use dvitools::parse_file;
///
/// let doc = parse_file("paper.dvi").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    DviParser::open(path)?.parse()
}

/// Decode a DVI file with custom options.
///
/// # Example
///
/// ```no_run
/// use dvitools::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().strict().with_max_pages(10);
/// let doc = parse_file_with_options("paper.dvi", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    DviParser::open_with_options(path, options)?.parse()
}

/// Decode a DVI file, keeping the diagnostics of every recovery.
pub fn parse_file_outcome<P: AsRef<Path>>(path: P) -> Result<ParseOutcome> {
    DviParser::open(path)?.parse_outcome()
}

/// Decode DVI from bytes.
///
/// # Example
///
/// ```no_run
/// use dvitools::parse_bytes;
///
/// let data = std::fs::read("paper.dvi").unwrap();
/// let doc = parse_bytes(&data).unwrap();
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    DviParser::from_bytes(data).parse()
}

/// Decode DVI from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Document> {
    DviParser::from_bytes_with_options(data, options).parse()
}

/// Decode DVI from bytes, keeping the diagnostics of every recovery.
pub fn parse_bytes_outcome(data: &[u8]) -> Result<ParseOutcome> {
    DviParser::from_bytes(data).parse_outcome()
}

/// Decode DVI from a reader.
///
/// # Example
///
/// ```no_run
/// use dvitools::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("paper.dvi").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    DviParser::from_reader(reader)?.parse()
}

/// Decode DVI from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Document> {
    DviParser::from_reader_with_options(reader, options)?.parse()
}

/// Decode DVI from a reader, keeping the diagnostics of every recovery.
pub fn parse_reader_outcome<R: Read>(reader: R) -> Result<ParseOutcome> {
    DviParser::from_reader(reader)?.parse_outcome()
}

/// Derive fonts, layout, content, positions and page text from a document.
pub fn analyze(doc: &Document) -> AnalyzedDocument {
    Analyzer::new(doc).analyze()
}

/// Decode and compare two DVI files.
///
/// # Example
///
/// ```no_run
/// use dvitools::{diff_files, DiffOptions};
///
/// let result = diff_files("a.dvi", "b.dvi", DiffOptions::new().layout_only())?;
/// assert!(result.content.is_none());
/// # Ok::<(), dvitools::Error>(())
/// ```
pub fn diff_files<P: AsRef<Path>, Q: AsRef<Path>>(
    path1: P,
    path2: Q,
    options: DiffOptions,
) -> Result<DiffResult> {
    DiffEngine::new(options).diff_files(path1, path2)
}

/// Decode and compare two in-memory DVI documents.
pub fn diff_bytes(data1: &[u8], data2: &[u8], options: DiffOptions) -> Result<DiffResult> {
    DiffEngine::new(options).diff_bytes(data1, data2)
}

/// Builder for decoding and reporting on DVI documents.
///
/// # Example
///
/// ```no_run
/// use dvitools::DviTools;
///
/// let summary = DviTools::new()
///     .strict()
///     .with_max_pages(5)
///     .parse("paper.dvi")?
///     .summary();
/// println!("{}", summary);
/// # Ok::<(), dvitools::Error>(())
/// ```
pub struct DviTools {
    parse_options: ParseOptions,
}

impl DviTools {
    /// Create a new builder with lenient decoding.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
        }
    }

    /// Reject documents that needed any recovery.
    pub fn strict(mut self) -> Self {
        self.parse_options = self.parse_options.strict();
        self
    }

    /// Keep partial documents and report diagnostics.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Only keep the first `max_pages` pages.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.parse_options = self.parse_options.with_max_pages(max_pages);
        self
    }

    /// Decode and analyze a DVI file.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<DviToolsResult> {
        let outcome = DviParser::open_with_options(path, self.parse_options)?.parse_outcome()?;
        Ok(DviToolsResult::new(outcome))
    }

    /// Decode and analyze DVI bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<DviToolsResult> {
        let outcome = DviParser::from_bytes_with_options(data, self.parse_options).parse_outcome()?;
        Ok(DviToolsResult::new(outcome))
    }
}

impl Default for DviTools {
    fn default() -> Self {
        Self::new()
    }
}

/// A decoded document with its analysis.
pub struct DviToolsResult {
    /// The decoded document and its diagnostics
    pub outcome: ParseOutcome,
    /// Everything derived from the document
    pub analysis: AnalyzedDocument,
}

impl DviToolsResult {
    fn new(outcome: ParseOutcome) -> Self {
        let analysis = analyze(&outcome.document);
        Self { outcome, analysis }
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.outcome.document
    }

    /// Short human-readable summary.
    pub fn summary(&self) -> String {
        render::analysis::summary(&self.outcome.document, &self.analysis)
    }

    /// Summary followed by every analysis section.
    pub fn detailed(&self) -> String {
        render::analysis::detailed(&self.outcome.document, &self.analysis)
    }

    /// Convert the document and its analysis to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let report = render::AnalysisReport::new(&self.outcome.document, &self.analysis);
        render::to_json(&report, format)
    }
}
