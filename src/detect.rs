//! DVI format detection and validation.

use crate::error::{Error, Result};
use crate::parser::opcodes::PRE;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Flavour of DVI identified by the preamble's id byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DviKind {
    /// Standard TeX DVI (id 2)
    Standard,
    /// pTeX DVI with vertical writing (id 3)
    Vertical,
    /// XeTeX extended DVI (id 5, 6 or 7)
    Xdv,
}

/// DVI format information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DviFormat {
    /// The id byte following `pre`
    pub id: u8,
    /// Flavour implied by the id byte
    pub kind: DviKind,
}

impl std::fmt::Display for DviFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self.kind {
            DviKind::Standard => "DVI",
            DviKind::Vertical => "pTeX DVI",
            DviKind::Xdv => "XDV",
        };
        write!(f, "{} (id {})", name, self.id)
    }
}

/// Detect DVI format from a file path.
///
/// # Example
/// ```no_run
/// use dvitools::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("paper.dvi").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DviFormat> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 2];
    let read = file.read(&mut header)?;
    detect_format_from_bytes(&header[..read])
}

/// Detect DVI format from the first bytes of a file.
///
/// # Returns
/// * `Ok(DviFormat)` if the data starts with `pre` and a known id byte
/// * `Err(Error::UnknownFormat)` if the data does not start with `pre`
/// * `Err(Error::UnsupportedVersion)` for an unknown id byte
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DviFormat> {
    let (&opcode, rest) = data.split_first().ok_or(Error::UnknownFormat)?;
    if opcode != PRE {
        return Err(Error::UnknownFormat);
    }
    let &id = rest.first().ok_or(Error::UnknownFormat)?;

    let kind = match id {
        2 => DviKind::Standard,
        3 => DviKind::Vertical,
        5..=7 => DviKind::Xdv,
        other => return Err(Error::UnsupportedVersion(other)),
    };
    Ok(DviFormat { id, kind })
}

/// Check if a file looks like DVI.
pub fn is_dvi<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes look like DVI.
pub fn is_dvi_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_standard() {
        let format = detect_format_from_bytes(&[PRE, 2, 0x01]).unwrap();
        assert_eq!(format.kind, DviKind::Standard);
        assert_eq!(format.to_string(), "DVI (id 2)");
    }

    #[test]
    fn test_detect_xdv() {
        let format = detect_format_from_bytes(&[PRE, 7]).unwrap();
        assert_eq!(format.kind, DviKind::Xdv);
    }

    #[test]
    fn test_detect_invalid_format() {
        assert!(matches!(
            detect_format_from_bytes(b"<!DOCTYPE html>"),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(
            detect_format_from_bytes(&[]),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(
            detect_format_from_bytes(&[PRE]),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_unknown_id_byte() {
        assert!(matches!(
            detect_format_from_bytes(&[PRE, 9]),
            Err(Error::UnsupportedVersion(9))
        ));
    }

    #[test]
    fn test_is_dvi_bytes() {
        assert!(is_dvi_bytes(&[PRE, 2]));
        assert!(!is_dvi_bytes(b"Not a DVI"));
    }
}
