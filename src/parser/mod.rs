//! DVI decoding module.

mod cursor;
mod dvi_parser;
pub mod opcodes;
mod options;
mod outcome;

pub use cursor::ByteCursor;
pub use dvi_parser::DviParser;
pub use options::{ErrorMode, ParseOptions};
pub use outcome::{Diagnostic, ParseOutcome};
