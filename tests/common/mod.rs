#![allow(dead_code)]

use dvitools::parser::opcodes::*;
use std::path::Path;

pub const NUMERATOR: u32 = 25_400_000;
pub const DENOMINATOR: u32 = 473_628_672;
pub const MAGNIFICATION: u32 = 1000;
pub const COMMENT: &[u8] = b" TeX output 2024.01.01:1200";

/// Assembles DVI byte streams one command at a time.
pub struct DviBuilder {
    data: Vec<u8>,
    pages: u16,
}

impl DviBuilder {
    /// Start a stream with the standard preamble.
    pub fn new() -> Self {
        Self::with_preamble(NUMERATOR, DENOMINATOR, MAGNIFICATION, COMMENT)
    }

    pub fn with_preamble(num: u32, den: u32, mag: u32, comment: &[u8]) -> Self {
        let mut data = vec![PRE, 2];
        data.extend_from_slice(&num.to_be_bytes());
        data.extend_from_slice(&den.to_be_bytes());
        data.extend_from_slice(&mag.to_be_bytes());
        data.push(comment.len() as u8);
        data.extend_from_slice(comment);
        Self { data, pages: 0 }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn bop(mut self, count0: i32) -> Self {
        self.data.push(BOP);
        self.data.extend_from_slice(&count0.to_be_bytes());
        self.data.extend_from_slice(&[0u8; 36]);
        self.data.extend_from_slice(&(-1i32).to_be_bytes());
        self.pages += 1;
        self
    }

    pub fn eop(mut self) -> Self {
        self.data.push(EOP);
        self
    }

    /// A page drawing `text` with `set_char` in font 0.
    pub fn text_page(self, count0: i32, text: &str) -> Self {
        self.bop(count0).font(0).text(text).eop()
    }

    pub fn text(mut self, text: &str) -> Self {
        for byte in text.bytes() {
            self = self.set_char(byte);
        }
        self
    }

    pub fn set_char(mut self, code: u8) -> Self {
        if code <= SET_CHAR_127 {
            self.data.push(code);
        } else {
            self.data.extend_from_slice(&[SET1, code]);
        }
        self
    }

    pub fn put_char(mut self, code: u8) -> Self {
        self.data.extend_from_slice(&[PUT1, code]);
        self
    }

    pub fn right(mut self, distance: i32) -> Self {
        self.data.push(RIGHT4);
        self.data.extend_from_slice(&distance.to_be_bytes());
        self
    }

    pub fn down(mut self, distance: i32) -> Self {
        self.data.push(DOWN4);
        self.data.extend_from_slice(&distance.to_be_bytes());
        self
    }

    pub fn w(mut self, distance: i8) -> Self {
        self.data.extend_from_slice(&[W1, distance as u8]);
        self
    }

    pub fn push(mut self) -> Self {
        self.data.push(PUSH);
        self
    }

    pub fn pop(mut self) -> Self {
        self.data.push(POP);
        self
    }

    pub fn font(mut self, font_num: u8) -> Self {
        if font_num < 64 {
            self.data.push(FNT_NUM_0 + font_num);
        } else {
            self.data.extend_from_slice(&[FNT1, font_num]);
        }
        self
    }

    pub fn font_def(mut self, font_num: u8, name: &str) -> Self {
        self.data.extend_from_slice(&[FNT_DEF1, font_num]);
        self.data.extend_from_slice(&0x1234_5678u32.to_be_bytes());
        self.data.extend_from_slice(&655_360u32.to_be_bytes());
        self.data.extend_from_slice(&655_360u32.to_be_bytes());
        self.data.extend_from_slice(&[0, name.len() as u8]);
        self.data.extend_from_slice(name.as_bytes());
        self
    }

    pub fn special(mut self, data: &[u8]) -> Self {
        self.data.extend_from_slice(&[XXX1, data.len() as u8]);
        self.data.extend_from_slice(data);
        self
    }

    pub fn set_rule(mut self, height: i32, width: i32) -> Self {
        self.data.push(SET_RULE);
        self.data.extend_from_slice(&height.to_be_bytes());
        self.data.extend_from_slice(&width.to_be_bytes());
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.data.extend_from_slice(bytes);
        self
    }

    /// Append a complete postamble and `post_post` trailer.
    pub fn postamble(mut self) -> Self {
        let pages = self.pages;
        self.data.push(POST);
        for value in [0, NUMERATOR, DENOMINATOR, MAGNIFICATION, 43_725_786, 30_785_863] {
            self.data.extend_from_slice(&value.to_be_bytes());
        }
        self.data.extend_from_slice(&3u16.to_be_bytes());
        self.data.extend_from_slice(&pages.to_be_bytes());
        self.data.push(POST_POST);
        self.data.extend_from_slice(&[0, 0, 0, 0, 2, 223, 223, 223, 223]);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.data
    }
}

/// Two pages of text followed by a postamble.
pub fn sample_document() -> Vec<u8> {
    DviBuilder::new()
        .bop(1)
        .font_def(0, "cmr10")
        .font(0)
        .text("Hello")
        .eop()
        .text_page(2, "World")
        .postamble()
        .build()
}

pub fn write_temp(dir: &Path, name: &str, data: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, data).expect("failed to write fixture");
    path
}
