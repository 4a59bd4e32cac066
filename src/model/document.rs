//! Document-level types.

use super::{Page, RawBytes};
use serde::{Deserialize, Serialize};

/// A decoded DVI document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Header read from the `pre` command
    pub preamble: Preamble,

    /// Pages in file order
    pub pages: Vec<Page>,

    /// Trailer read from the `post` command (possibly partial)
    pub postamble: Postamble,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get a page by index (0-based, file order).
    pub fn get_page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// The `pre` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preamble {
    /// DVI id byte (2 for plain DVI)
    pub format: u8,

    /// Unit numerator
    pub numerator: u32,

    /// Unit denominator
    pub denominator: u32,

    /// Magnification times 1000
    pub magnification: u32,

    /// Free-form comment written by the producer
    pub comment: RawBytes,
}

/// The `post` command.
///
/// Fields are filled in file order; a trailer cut short by the end of the
/// file leaves the remaining fields as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Postamble {
    /// Offset of the final `bop`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_page_pointer: Option<u32>,

    /// Unit numerator (repeats the preamble)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numerator: Option<u32>,

    /// Unit denominator (repeats the preamble)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denominator: Option<u32>,

    /// Magnification (repeats the preamble)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnification: Option<u32>,

    /// Height plus depth of the tallest page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<u32>,

    /// Width of the widest page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,

    /// Deepest push level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_stack_depth: Option<u16>,

    /// Number of `bop` commands
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u16>,
}

impl Postamble {
    /// Number of trailer fields in a complete postamble.
    pub const FIELD_COUNT: usize = 8;

    /// How many fields were populated.
    pub fn fields_read(&self) -> usize {
        [
            self.last_page_pointer.is_some(),
            self.numerator.is_some(),
            self.denominator.is_some(),
            self.magnification.is_some(),
            self.max_height.is_some(),
            self.max_width.is_some(),
            self.max_stack_depth.is_some(),
            self.total_pages.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }

    /// Check if every field was read.
    pub fn is_complete(&self) -> bool {
        self.fields_read() == Self::FIELD_COUNT
    }

    /// Check if no field was read.
    pub fn is_empty(&self) -> bool {
        self.fields_read() == 0
    }
}
