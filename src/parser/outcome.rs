//! Best-effort decode results.

use crate::model::Document;
use serde::Serialize;
use std::fmt;

/// Something the decoder had to recover from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Bytes between pages that were not a `bop` and were skipped
    SkippedBytes { offset: usize, count: usize },

    /// Opcode with no meaning inside a page, recorded as `unknown`
    UnknownOpcode {
        opcode: u8,
        offset: usize,
        page_index: usize,
    },

    /// The file ended before the page's `eop`
    UnterminatedPage { page_index: usize },

    /// No `post` command was found
    MissingPostamble,

    /// The file ended inside the postamble
    TruncatedPostamble { fields_read: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SkippedBytes { offset, count } => {
                write!(f, "skipped {} stray byte(s) at offset {}", count, offset)
            }
            Diagnostic::UnknownOpcode {
                opcode,
                offset,
                page_index,
            } => write!(
                f,
                "unknown opcode {} at offset {} on page index {}",
                opcode, offset, page_index
            ),
            Diagnostic::UnterminatedPage { page_index } => {
                write!(f, "page index {} has no eop", page_index)
            }
            Diagnostic::MissingPostamble => f.write_str("no postamble found"),
            Diagnostic::TruncatedPostamble { fields_read } => {
                write!(f, "postamble truncated after {} field(s)", fields_read)
            }
        }
    }
}

/// A decoded document together with everything that had to be recovered.
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutcome {
    /// The (possibly partial) document
    pub document: Document,

    /// Recoveries performed while decoding, in file order
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    /// Check if the document was decoded without any recovery.
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consume the outcome, keeping only the document.
    pub fn into_document(self) -> Document {
        self.document
    }
}
