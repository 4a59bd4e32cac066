//! Position tracking and aggregate analysis over decoded streams.

mod common;

use common::{sample_document, DviBuilder};
use dvitools::analyze::{PositionedChar, Range};
use dvitools::parser::opcodes::{W0, X0, Y0, Z0};
use dvitools::{analyze, parse_bytes, Analyzer, Command, FontUsage};

fn analyze_bytes(data: &[u8]) -> dvitools::AnalyzedDocument {
    analyze(&parse_bytes(data).unwrap())
}

fn at(page_index: usize, code: u8, x: i32, y: i32) -> PositionedChar {
    PositionedChar {
        page_index,
        char_code: u32::from(code),
        x,
        y,
    }
}

#[test]
fn test_hello_world_positions() {
    let data = DviBuilder::new()
        .bop(1)
        .font(0)
        .text("Hello")
        .right(100)
        .text("World")
        .eop()
        .postamble()
        .build();

    let analysis = analyze_bytes(&data);
    assert_eq!(analysis.positions.len(), 10);
    assert_eq!(analysis.positions[0], at(0, b'H', 0, 0));
    assert_eq!(analysis.positions[4], at(0, b'o', 4, 0));
    assert_eq!(analysis.positions[5], at(0, b'W', 105, 0));
    assert_eq!(analysis.texts, vec!["HelloWorld".to_string()]);
}

#[test]
fn test_push_pop_restores_cursor() {
    let data = DviBuilder::new()
        .bop(1)
        .push()
        .right(50)
        .down(20)
        .set_char(b'A')
        .pop()
        .set_char(b'B')
        .eop()
        .build();

    let analysis = analyze_bytes(&data);
    assert_eq!(
        analysis.positions,
        vec![at(0, b'A', 50, 20), at(0, b'B', 0, 0)]
    );
}

#[test]
fn test_unbalanced_pop_resets_to_origin() {
    let data = DviBuilder::new()
        .bop(1)
        .right(30)
        .pop()
        .set_char(b'A')
        .eop()
        .build();

    let analysis = analyze_bytes(&data);
    assert_eq!(analysis.positions, vec![at(0, b'A', 0, 0)]);
}

#[test]
fn test_put_char_does_not_advance() {
    let data = DviBuilder::new()
        .bop(1)
        .put_char(b'a')
        .set_char(b'b')
        .eop()
        .build();

    let analysis = analyze_bytes(&data);
    assert_eq!(
        analysis.positions,
        vec![at(0, b'a', 0, 0), at(0, b'b', 0, 0)]
    );
}

#[test]
fn test_zero_operand_spacing_does_not_move() {
    let data = DviBuilder::new()
        .bop(1)
        .right(10)
        .down(4)
        .raw(&[W0, X0, Y0, Z0])
        .set_char(b'a')
        .w(5)
        .raw(&[W0])
        .set_char(b'b')
        .eop()
        .build();

    let doc = parse_bytes(&data).unwrap();
    assert_eq!(
        doc.pages[0].commands[2..6],
        [Command::W0, Command::X0, Command::Y0, Command::Z0]
    );

    let analysis = analyze(&doc);
    assert_eq!(
        analysis.positions,
        vec![at(0, b'a', 10, 4), at(0, b'b', 16, 4)]
    );
}

#[test]
fn test_cursor_resets_per_page() {
    let analysis = analyze_bytes(&sample_document());
    assert_eq!(analysis.positions[5], at(1, b'W', 0, 0));
    assert_eq!(analysis.texts, vec!["Hello".to_string(), "World".to_string()]);
}

#[test]
fn test_font_usage() {
    let data = DviBuilder::new()
        .bop(1)
        .font(0)
        .text("A")
        .eop()
        .postamble()
        .build();

    let fonts = analyze_bytes(&data).fonts;
    assert_eq!(fonts.len(), 1);
    assert_eq!(
        fonts[&0],
        FontUsage {
            usage_count: 1,
            pages: vec![1]
        }
    );
}

#[test]
fn test_font_usage_across_pages() {
    let data = DviBuilder::new()
        .bop(7)
        .font(3)
        .font(3)
        .eop()
        .bop(8)
        .font(3)
        .font(70)
        .eop()
        .build();

    let fonts = analyze_bytes(&data).fonts;
    assert_eq!(fonts[&3].usage_count, 3);
    assert_eq!(fonts[&3].pages, vec![7, 8]);
    assert_eq!(fonts[&70].pages, vec![8]);
}

#[test]
fn test_layout_ranges() {
    let data = DviBuilder::new()
        .bop(1)
        .right(-10)
        .down(40)
        .text("ab")
        .eop()
        .build();

    let layout = analyze_bytes(&data).layout;
    assert_eq!(layout.total_pages, 1);
    assert_eq!(layout.position_ranges.x, Range { min: -10, max: 0 });
    assert_eq!(layout.position_ranges.y, Range { min: 0, max: 40 });
    assert_eq!(layout.page_dimensions[0].character_count, 2);
    assert_eq!(layout.page_dimensions[0].commands_count, 4);
}

#[test]
fn test_content_summary() {
    let data = DviBuilder::new()
        .bop(1)
        .special(b"color push Black")
        .set_rule(10, 200)
        .text("ok")
        .eop()
        .build();

    let content = analyze_bytes(&data).content;
    assert_eq!(content.total_characters, 2);
    assert_eq!(content.special_commands.len(), 1);
    assert_eq!(
        content.special_commands[0].to_string_lossy(),
        "color push Black"
    );
    assert_eq!(
        content.rules,
        vec![Command::SetRule {
            height: 10,
            width: 200
        }]
    );
}

#[test]
fn test_latin1_text() {
    let data = DviBuilder::new()
        .bop(1)
        .text("caf")
        .set_char(0xE9)
        .eop()
        .build();

    let doc = parse_bytes(&data).unwrap();
    assert_eq!(Analyzer::new(&doc).extract_text(), vec!["café".to_string()]);
}
