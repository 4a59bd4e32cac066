//! Error types for dvitools library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dvitools operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during DVI processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The file format is not recognized as DVI.
    #[error("Unknown file format: not a valid DVI file")]
    UnknownFormat,

    /// The DVI identification byte is not one we know.
    #[error("Unsupported DVI id byte: {0}")]
    UnsupportedVersion(u8),

    /// A required read ran past the end of the buffer.
    #[error("Unexpected end of file: needed {requested} byte(s) at offset {offset}")]
    UnexpectedEof {
        /// Number of bytes the read asked for
        requested: usize,
        /// Cursor offset at the time of the read
        offset: usize,
    },

    /// A mandatory marker opcode was not where the format requires it.
    #[error("Invalid DVI file: expected opcode {expected} at offset {offset}, got {found}")]
    InvalidMarker {
        /// Opcode the grammar requires
        expected: u8,
        /// Opcode actually present
        found: u8,
        /// Offset of the offending byte
        offset: usize,
    },

    /// Strict mode rejected a document that was only partially decoded.
    #[error("Incomplete DVI file: {0}")]
    Incomplete(String),

    /// Error during rendering (report, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Whether the error means the input bytes are not a usable DVI document.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Error::UnknownFormat
                | Error::UnsupportedVersion(_)
                | Error::UnexpectedEof { .. }
                | Error::InvalidMarker { .. }
                | Error::Incomplete(_)
        )
    }

    /// Whether the error means the input could not be read at all.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_) | Error::FileNotFound(_))
    }
}
