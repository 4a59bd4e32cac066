//! DVI document decoder.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{Command, Document, Page, Postamble, Preamble, RawBytes, PAGE_COUNTERS};

use super::cursor::ByteCursor;
use super::opcodes::*;
use super::options::{ErrorMode, ParseOptions};
use super::outcome::{Diagnostic, ParseOutcome};

/// DVI document parser.
pub struct DviParser {
    data: Vec<u8>,
    options: ParseOptions,
}

impl DviParser {
    /// Open a DVI file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a DVI file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        let data = fs::read(path)?;
        log::debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(Self { data, options })
    }

    /// Parse a DVI document from bytes.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a DVI document from bytes with custom options.
    pub fn from_bytes_with_options(data: impl Into<Vec<u8>>, options: ParseOptions) -> Self {
        Self {
            data: data.into(),
            options,
        }
    }

    /// Parse a DVI document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a DVI document from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self::from_bytes_with_options(data, options))
    }

    /// Decode the document, discarding diagnostics.
    pub fn parse(&self) -> Result<Document> {
        self.parse_outcome().map(ParseOutcome::into_document)
    }

    /// Decode the document and report what had to be recovered.
    ///
    /// A missing preamble or a file ending inside a `bop` header or a command
    /// operand fails the whole decode. A missing or truncated postamble, stray
    /// bytes between pages and unknown opcodes are recovered and listed in
    /// [`ParseOutcome::diagnostics`]; in [`ErrorMode::Strict`] they fail the
    /// decode instead.
    pub fn parse_outcome(&self) -> Result<ParseOutcome> {
        let mut decoder = Decoder::new(&self.data);

        let preamble = decoder.read_preamble()?;
        let pages = decoder.read_pages(self.options.max_pages)?;
        let postamble = decoder.read_postamble();

        log::debug!(
            "Decoded {} page(s), postamble has {} field(s)",
            pages.len(),
            postamble.fields_read()
        );

        let diagnostics = decoder.diagnostics;
        for diagnostic in &diagnostics {
            log::warn!("DVI decode: {}", diagnostic);
        }

        if self.options.error_mode == ErrorMode::Strict && !diagnostics.is_empty() {
            let messages: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
            return Err(Error::Incomplete(messages.join("; ")));
        }

        Ok(ParseOutcome {
            document: Document {
                preamble,
                pages,
                postamble,
            },
            diagnostics,
        })
    }
}

/// Decoding state for one buffer.
struct Decoder<'a> {
    cursor: ByteCursor<'a>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Decoder<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: ByteCursor::new(data),
            diagnostics: Vec::new(),
        }
    }

    fn expect_opcode(&mut self, expected: u8) -> Result<()> {
        let offset = self.cursor.position();
        let found = self.cursor.read_u8()?;
        if found != expected {
            return Err(Error::InvalidMarker {
                expected,
                found,
                offset,
            });
        }
        Ok(())
    }

    fn read_preamble(&mut self) -> Result<Preamble> {
        self.expect_opcode(PRE)?;

        let format = self.cursor.read_u8()?;
        let numerator = self.cursor.read_u32()?;
        let denominator = self.cursor.read_u32()?;
        let magnification = self.cursor.read_u32()?;
        let comment_len = usize::from(self.cursor.read_u8()?);
        let comment = RawBytes::from(self.cursor.read_bytes(comment_len)?);

        Ok(Preamble {
            format,
            numerator,
            denominator,
            magnification,
            comment,
        })
    }

    fn read_pages(&mut self, max_pages: Option<usize>) -> Result<Vec<Page>> {
        let mut pages = Vec::new();
        let mut page_index = 0;
        let mut skipped: Option<(usize, usize)> = None;

        while !self.cursor.is_eof() {
            let opcode = self.cursor.peek_u8();
            if opcode == POST {
                break;
            }

            if opcode == BOP {
                self.flush_skipped(&mut skipped);
                let page = self.read_page(page_index)?;
                if max_pages.map_or(true, |max| pages.len() < max) {
                    pages.push(page);
                }
                page_index += 1;
            } else {
                let offset = self.cursor.position();
                self.cursor.skip(1)?;
                match skipped.as_mut() {
                    Some((_, count)) => *count += 1,
                    None => skipped = Some((offset, 1)),
                }
            }
        }
        self.flush_skipped(&mut skipped);

        Ok(pages)
    }

    fn flush_skipped(&mut self, skipped: &mut Option<(usize, usize)>) {
        if let Some((offset, count)) = skipped.take() {
            self.diagnostics
                .push(Diagnostic::SkippedBytes { offset, count });
        }
    }

    fn read_page(&mut self, page_index: usize) -> Result<Page> {
        self.expect_opcode(BOP)?;

        let mut counters = [0i32; PAGE_COUNTERS];
        for counter in counters.iter_mut() {
            *counter = self.cursor.read_i32()?;
        }
        let previous_page_offset = self.cursor.read_i32()?;
        let mut page = Page::new(counters, previous_page_offset);

        loop {
            if self.cursor.is_eof() {
                self.diagnostics
                    .push(Diagnostic::UnterminatedPage { page_index });
                break;
            }

            let opcode = self.cursor.read_u8()?;
            if opcode == EOP {
                break;
            }

            let command = self.read_command(opcode)?;
            if let Command::Unknown { opcode } = command {
                self.diagnostics.push(Diagnostic::UnknownOpcode {
                    opcode,
                    offset: self.cursor.position() - 1,
                    page_index,
                });
            }
            page.push_command(command);
        }

        Ok(page)
    }

    /// Decode the operands of `opcode`, which has already been consumed.
    fn read_command(&mut self, opcode: u8) -> Result<Command> {
        let c = &mut self.cursor;
        let command = match opcode {
            SET_CHAR_0..=SET_CHAR_127 => Command::SetChar {
                code: u32::from(opcode),
            },
            SET1..=SET4 => Command::SetChar {
                code: c.read_unsigned(family_width(opcode, SET1))?,
            },
            SET_RULE => Command::SetRule {
                height: c.read_i32()?,
                width: c.read_i32()?,
            },
            PUT1..=PUT4 => Command::PutChar {
                code: c.read_unsigned(family_width(opcode, PUT1))?,
            },
            PUT_RULE => Command::PutRule {
                height: c.read_i32()?,
                width: c.read_i32()?,
            },
            NOP => Command::Nop,
            PUSH => Command::Push,
            POP => Command::Pop,
            RIGHT1..=RIGHT4 => Command::Right {
                distance: c.read_signed(family_width(opcode, RIGHT1))?,
            },
            W0 => Command::W0,
            W1..=W4 => Command::W {
                distance: c.read_signed(family_width(opcode, W1))?,
            },
            X0 => Command::X0,
            X1..=X4 => Command::X {
                distance: c.read_signed(family_width(opcode, X1))?,
            },
            DOWN1..=DOWN4 => Command::Down {
                distance: c.read_signed(family_width(opcode, DOWN1))?,
            },
            Y0 => Command::Y0,
            Y1..=Y4 => Command::Y {
                distance: c.read_signed(family_width(opcode, Y1))?,
            },
            Z0 => Command::Z0,
            Z1..=Z4 => Command::Z {
                distance: c.read_signed(family_width(opcode, Z1))?,
            },
            FNT_NUM_0..=FNT_NUM_63 => Command::Fnt {
                font_num: u32::from(opcode - FNT_NUM_0),
            },
            FNT1..=FNT4 => Command::Fnt {
                font_num: c.read_unsigned(family_width(opcode, FNT1))?,
            },
            XXX1..=XXX4 => {
                let len = c.read_unsigned(family_width(opcode, XXX1))? as usize;
                Command::Special {
                    data: RawBytes::from(c.read_bytes(len)?),
                }
            }
            FNT_DEF1..=FNT_DEF4 => {
                let font_num = c.read_unsigned(family_width(opcode, FNT_DEF1))?;
                self.read_font_def(font_num)?
            }
            BOP | EOP | PRE | POST | POST_POST | 250..=u8::MAX => Command::Unknown { opcode },
        };
        Ok(command)
    }

    fn read_font_def(&mut self, font_num: u32) -> Result<Command> {
        let c = &mut self.cursor;
        let checksum = c.read_u32()?;
        let scale_factor = c.read_u32()?;
        let design_size = c.read_u32()?;
        // Both lengths precede both names.
        let area_len = usize::from(c.read_u8()?);
        let name_len = usize::from(c.read_u8()?);
        let area_name = RawBytes::from(c.read_bytes(area_len)?);
        let font_name = RawBytes::from(c.read_bytes(name_len)?);

        Ok(Command::FntDef {
            font_num,
            checksum,
            scale_factor,
            design_size,
            area_name,
            font_name,
        })
    }

    fn read_postamble(&mut self) -> Postamble {
        while !self.cursor.is_eof() && self.cursor.peek_u8() != POST {
            // Only reachable when the page loop stopped at end of buffer.
            let _ = self.cursor.skip(1);
        }

        let mut postamble = Postamble::default();
        if self.cursor.read_u8().is_err() {
            self.diagnostics.push(Diagnostic::MissingPostamble);
            return postamble;
        }

        if let Err(e) = self.read_postamble_fields(&mut postamble) {
            log::debug!("Postamble cut short: {}", e);
            self.diagnostics.push(Diagnostic::TruncatedPostamble {
                fields_read: postamble.fields_read(),
            });
        }
        postamble
    }

    fn read_postamble_fields(&mut self, post: &mut Postamble) -> Result<()> {
        let c = &mut self.cursor;
        post.last_page_pointer = Some(c.read_u32()?);
        post.numerator = Some(c.read_u32()?);
        post.denominator = Some(c.read_u32()?);
        post.magnification = Some(c.read_u32()?);
        post.max_height = Some(c.read_u32()?);
        post.max_width = Some(c.read_u32()?);
        post.max_stack_depth = Some(c.read_u16()?);
        post.total_pages = Some(c.read_u16()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preamble_bytes(comment: &[u8]) -> Vec<u8> {
        let mut out = vec![PRE, 2];
        out.extend_from_slice(&25_400_000u32.to_be_bytes());
        out.extend_from_slice(&473_628_672u32.to_be_bytes());
        out.extend_from_slice(&1000u32.to_be_bytes());
        out.push(comment.len() as u8);
        out.extend_from_slice(comment);
        out
    }

    fn bop(page: i32) -> Vec<u8> {
        let mut out = vec![BOP];
        out.extend_from_slice(&page.to_be_bytes());
        for _ in 1..PAGE_COUNTERS {
            out.extend_from_slice(&0i32.to_be_bytes());
        }
        out.extend_from_slice(&(-1i32).to_be_bytes());
        out
    }

    fn decode_page(body: &[u8]) -> Vec<Command> {
        let mut data = preamble_bytes(b"");
        data.extend(bop(1));
        data.extend_from_slice(body);
        data.push(EOP);
        let doc = DviParser::from_bytes(data).parse().unwrap();
        doc.pages[0].commands.clone()
    }

    #[test]
    fn test_preamble_fields() {
        let data = preamble_bytes(b" TeX output");
        let doc = DviParser::from_bytes(data).parse().unwrap();
        assert_eq!(doc.preamble.format, 2);
        assert_eq!(doc.preamble.numerator, 25_400_000);
        assert_eq!(doc.preamble.denominator, 473_628_672);
        assert_eq!(doc.preamble.magnification, 1000);
        assert_eq!(doc.preamble.comment.as_bytes(), b" TeX output");
        assert!(doc.pages.is_empty());
    }

    #[test]
    fn test_missing_pre_is_fatal() {
        let result = DviParser::from_bytes(b"invalid content".to_vec()).parse();
        assert!(matches!(
            result,
            Err(Error::InvalidMarker {
                expected: PRE,
                found: b'i',
                offset: 0
            })
        ));
    }

    #[test]
    fn test_explicit_width_families() {
        let body = [
            SET1, 200, // set1 200
            SET2, 0x01, 0x00, // set2 256
            PUT1, 65, // put1 'A'
            RIGHT2, 0xFF, 0x9C, // right2 -100
            DOWN3, 0x00, 0x01, 0x00, // down3 256
            W0, W1, 5, X0, X1, 0xFB, Y0, Y1, 7, Z0, Z1, 9,
        ];
        let commands = decode_page(&body);
        assert_eq!(
            commands,
            vec![
                Command::SetChar { code: 200 },
                Command::SetChar { code: 256 },
                Command::PutChar { code: 65 },
                Command::Right { distance: -100 },
                Command::Down { distance: 256 },
                Command::W0,
                Command::W { distance: 5 },
                Command::X0,
                Command::X { distance: -5 },
                Command::Y0,
                Command::Y { distance: 7 },
                Command::Z0,
                Command::Z { distance: 9 },
            ]
        );
    }

    #[test]
    fn test_fonts_specials_and_rules() {
        let mut body = vec![FNT_NUM_0 + 3, FNT2, 0x01, 0x00];
        body.extend_from_slice(&[XXX1, 4]);
        body.extend_from_slice(b"ps:x");
        body.push(SET_RULE);
        body.extend_from_slice(&10i32.to_be_bytes());
        body.extend_from_slice(&20i32.to_be_bytes());
        body.extend_from_slice(&[FNT_DEF1, 7]);
        body.extend_from_slice(&0xDEADBEEFu32.to_be_bytes());
        body.extend_from_slice(&655_360u32.to_be_bytes());
        body.extend_from_slice(&655_360u32.to_be_bytes());
        body.extend_from_slice(&[0, 5]);
        body.extend_from_slice(b"cmr10");

        let commands = decode_page(&body);
        assert_eq!(commands[0], Command::Fnt { font_num: 3 });
        assert_eq!(commands[1], Command::Fnt { font_num: 256 });
        assert_eq!(
            commands[2],
            Command::Special {
                data: RawBytes::from("ps:x")
            }
        );
        assert_eq!(
            commands[3],
            Command::SetRule {
                height: 10,
                width: 20
            }
        );
        match &commands[4] {
            Command::FntDef {
                font_num,
                checksum,
                area_name,
                font_name,
                ..
            } => {
                assert_eq!(*font_num, 7);
                assert_eq!(*checksum, 0xDEADBEEF);
                assert!(area_name.is_empty());
                assert_eq!(font_name.as_bytes(), b"cmr10");
            }
            other => panic!("expected fnt_def, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_opcode_inside_page() {
        let mut data = preamble_bytes(b"");
        data.extend(bop(1));
        data.extend_from_slice(&[b'A', 250, b'B', EOP]);

        let outcome = DviParser::from_bytes(data).parse_outcome().unwrap();
        let commands = &outcome.document.pages[0].commands;
        assert_eq!(commands[1], Command::Unknown { opcode: 250 });
        assert_eq!(commands[2], Command::SetChar { code: b'B' as u32 });
        assert!(outcome
            .diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::UnknownOpcode { opcode: 250, .. })));
    }

    #[test]
    fn test_stray_bytes_between_pages_are_skipped() {
        let mut data = preamble_bytes(b"");
        data.extend(bop(1));
        data.push(EOP);
        data.extend_from_slice(&[NOP, NOP, 0x00]);
        data.extend(bop(2));
        data.push(EOP);

        let outcome = DviParser::from_bytes(data).parse_outcome().unwrap();
        assert_eq!(outcome.document.page_count(), 2);
        assert_eq!(outcome.document.pages[1].number(), 2);
        assert!(outcome
            .diagnostics
            .contains(&Diagnostic::SkippedBytes {
                offset: 15 + 45 + 1,
                count: 3
            }));
    }

    #[test]
    fn test_strict_mode_rejects_missing_postamble() {
        let mut data = preamble_bytes(b"");
        data.extend(bop(1));
        data.push(EOP);

        let lenient = DviParser::from_bytes(data.clone()).parse_outcome().unwrap();
        assert_eq!(lenient.diagnostics, vec![Diagnostic::MissingPostamble]);
        assert!(lenient.document.postamble.is_empty());

        let strict = DviParser::from_bytes_with_options(data, ParseOptions::new().strict()).parse();
        assert!(matches!(strict, Err(Error::Incomplete(_))));
    }

    #[test]
    fn test_max_pages() {
        let mut data = preamble_bytes(b"");
        for n in 1..=3 {
            data.extend(bop(n));
            data.push(EOP);
        }
        let doc = DviParser::from_bytes_with_options(data, ParseOptions::new().with_max_pages(2))
            .parse()
            .unwrap();
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.pages[1].number(), 2);
    }
}
