//! Document model types for decoded DVI content.
//!
//! This module defines the in-memory representation produced by the
//! decoder and consumed by the analyzer and the diff engine. Every value is
//! owned; a `Document` is never mutated after decoding completes.

mod bytes;
mod command;
mod document;
mod page;

pub use bytes::RawBytes;
pub use command::Command;
pub use document::{Document, Postamble, Preamble};
pub use page::{Page, PAGE_COUNTERS};
