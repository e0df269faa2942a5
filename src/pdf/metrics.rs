//! Text measurement for the builtin Helvetica faces.
//!
//! Width arithmetic uses the standard AFM advance widths (thousandths of
//! the font size) for the printable ASCII range; anything outside that
//! range is measured as an average-width glyph. Good enough for column
//! wrapping - the faces are metrically stable and the generators only
//! emit Latin text.

/// Points per millimetre conversion.
const PT_TO_MM: f32 = 0.352_778;

/// Advance widths for Helvetica, chars 0x20..=0x7E, in 1/1000 em.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278,
    584, 584, 584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, 722, 278,
    500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556,
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
    278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

fn char_units(c: char) -> u16 {
    let code = c as u32;
    if (0x20..=0x7E).contains(&code) {
        HELVETICA_WIDTHS[(code - 0x20) as usize]
    } else {
        // Fall back to the digit width for anything exotic.
        556
    }
}

/// Width of `text` in millimetres at the given point size.
pub fn string_width(text: &str, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_units(c) as u32).sum();
    units as f32 / 1000.0 * font_size * PT_TO_MM
}

/// Word-wrap `text` into lines no wider than `max_width` millimetres.
///
/// Breaks at whitespace, hard-splits words that alone exceed the width,
/// and preserves explicit newlines. Always returns at least one
/// (possibly empty) line.
pub fn split_text_to_size(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, max_width, font_size, &mut lines);
    }
    lines
}

fn wrap_paragraph(paragraph: &str, max_width: f32, font_size: f32, lines: &mut Vec<String>) {
    let mut current = String::new();
    for word in paragraph.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if string_width(&candidate, font_size) <= max_width {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if string_width(word, font_size) <= max_width {
            current = word.to_string();
        } else {
            current = hard_split(word, max_width, font_size, lines);
        }
    }
    lines.push(current);
}

/// Split an over-long word at character boundaries; returns the tail that
/// still fits on an open line.
fn hard_split(word: &str, max_width: f32, font_size: f32, lines: &mut Vec<String>) -> String {
    let mut chunk = String::new();
    for c in word.chars() {
        chunk.push(c);
        if string_width(&chunk, font_size) > max_width && chunk.chars().count() > 1 {
            chunk.pop();
            lines.push(std::mem::take(&mut chunk));
            chunk.push(c);
        }
    }
    chunk
}
