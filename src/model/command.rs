//! Page commands.

use super::RawBytes;
use serde::{Deserialize, Serialize};

/// A single decoded command inside a page.
///
/// The variant determines which fields exist; the explicit-width opcode
/// families (`set1`..`set4`, `right1`..`right4`, ...) collapse into one
/// variant each since only the decoded value matters downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Typeset a character and advance horizontally
    SetChar {
        /// Character code
        #[serde(rename = "char")]
        code: u32,
    },

    /// Typeset a character without moving
    PutChar {
        /// Character code
        #[serde(rename = "char")]
        code: u32,
    },

    /// Draw a rule and advance horizontally
    SetRule {
        /// Rule height in DVI units
        height: i32,
        /// Rule width in DVI units
        width: i32,
    },

    /// Draw a rule without moving
    PutRule {
        /// Rule height in DVI units
        height: i32,
        /// Rule width in DVI units
        width: i32,
    },

    /// Move right
    Right {
        /// Signed distance
        distance: i32,
    },

    /// Move down
    Down {
        /// Signed distance
        distance: i32,
    },

    /// Move right by a new `w` spacing
    W {
        /// Signed distance
        distance: i32,
    },

    /// Move right by the current `w` spacing
    W0,

    /// Move right by a new `x` spacing
    X {
        /// Signed distance
        distance: i32,
    },

    /// Move right by the current `x` spacing
    X0,

    /// Move down by a new `y` spacing
    Y {
        /// Signed distance
        distance: i32,
    },

    /// Move down by the current `y` spacing
    Y0,

    /// Move down by a new `z` spacing
    Z {
        /// Signed distance
        distance: i32,
    },

    /// Move down by the current `z` spacing
    Z0,

    /// Select a font
    Fnt {
        /// Font number
        font_num: u32,
    },

    /// Opaque device-specific payload (`xxx`)
    Special {
        /// Payload bytes
        data: RawBytes,
    },

    /// Font definition
    FntDef {
        /// Font number being defined
        font_num: u32,
        /// TFM checksum
        checksum: u32,
        /// Scale factor in DVI units
        scale_factor: u32,
        /// Design size in DVI units
        design_size: u32,
        /// Directory part of the font name
        area_name: RawBytes,
        /// Font name
        font_name: RawBytes,
    },

    /// Save the current position
    Push,

    /// Restore the last saved position
    Pop,

    /// No operation
    Nop,

    /// Opcode with no meaning inside a page
    Unknown {
        /// The raw opcode byte
        opcode: u8,
    },
}

impl Command {
    /// Snake-case name of the variant, matching the serialized `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Command::SetChar { .. } => "set_char",
            Command::PutChar { .. } => "put_char",
            Command::SetRule { .. } => "set_rule",
            Command::PutRule { .. } => "put_rule",
            Command::Right { .. } => "right",
            Command::Down { .. } => "down",
            Command::W { .. } => "w",
            Command::W0 => "w0",
            Command::X { .. } => "x",
            Command::X0 => "x0",
            Command::Y { .. } => "y",
            Command::Y0 => "y0",
            Command::Z { .. } => "z",
            Command::Z0 => "z0",
            Command::Fnt { .. } => "fnt",
            Command::Special { .. } => "special",
            Command::FntDef { .. } => "fnt_def",
            Command::Push => "push",
            Command::Pop => "pop",
            Command::Nop => "nop",
            Command::Unknown { .. } => "unknown",
        }
    }

    /// Character code for `set_char` / `put_char`.
    pub fn char_code(&self) -> Option<u32> {
        match self {
            Command::SetChar { code } | Command::PutChar { code } => Some(*code),
            _ => None,
        }
    }

    /// Check if this command draws a character.
    pub fn is_char(&self) -> bool {
        self.char_code().is_some()
    }

    /// Check if this command draws a rule.
    pub fn is_rule(&self) -> bool {
        matches!(self, Command::SetRule { .. } | Command::PutRule { .. })
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::SetChar { code } | Command::PutChar { code } => {
                write!(f, "{} {}", self.kind(), code)
            }
            Command::SetRule { height, width } | Command::PutRule { height, width } => {
                write!(f, "{} {}x{}", self.kind(), height, width)
            }
            Command::Right { distance }
            | Command::Down { distance }
            | Command::W { distance }
            | Command::X { distance }
            | Command::Y { distance }
            | Command::Z { distance } => write!(f, "{} {}", self.kind(), distance),
            Command::Fnt { font_num } => write!(f, "fnt {}", font_num),
            Command::Special { data } => write!(f, "special {:?}", data.to_string_lossy()),
            Command::FntDef {
                font_num,
                font_name,
                ..
            } => write!(f, "fnt_def {} {}", font_num, font_name),
            Command::Unknown { opcode } => write!(f, "unknown {}", opcode),
            _ => f.write_str(self.kind()),
        }
    }
}
