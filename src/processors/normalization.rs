//! Text repair pipeline for noisy OCR output.
//!
//! Recognition engines concatenate labels and values ("Year2000"), drop
//! spacing around field keywords, and emit a mix of separator glyphs. The
//! [`normalize`] function runs four ordered repair passes over raw text:
//!
//! 1. NFKC canonicalization, stripping control and format characters;
//! 2. spacing repair between letters (Latin or Devanagari) and digits;
//! 3. spacing around the fixed bilingual field-keyword set;
//! 4. separator standardization into a lone `" : "` token, then whitespace
//!    collapse.
//!
//! The pipeline is deterministic and idempotent: re-applying it to its own
//! output is a fixed point.

use unicode_normalization::UnicodeNormalization;

/// Field keywords printed on citizenship cards, Latin and Devanagari.
const KEYWORDS: &[&str] = &["Year", "Month", "Day", "नाम", "थर", "जन्म", "मिति", "नं"];

/// Separator glyphs collapsed into a standalone `" : "` token.
const SEPARATORS: &[char] = &[':', ';', '|', '।', '!'];

/// Runs the full text repair pipeline.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = canonicalize(text);
    let text = repair_digit_spacing(&text);
    let text = space_keywords(&text);
    let text = standardize_separators(&text);
    squeeze_whitespace(&text)
}

/// NFKC composition plus removal of control/format characters.
fn canonicalize(text: &str) -> String {
    text.nfkc().filter(|c| !is_stripped_char(*c)).collect()
}

/// Control characters and the invisible format characters OCR engines leak
/// into Devanagari output (zero-width joiners, BOM, directional marks).
fn is_stripped_char(c: char) -> bool {
    c.is_control()
        || matches!(c, '\u{200B}'..='\u{200F}')
        || c == '\u{FEFF}'
        || c == '\u{00AD}'
}

fn is_devanagari_digit(c: char) -> bool {
    ('\u{0966}'..='\u{096F}').contains(&c)
}

/// Letters that can butt up against a digit in a concatenation artifact.
/// Devanagari digits are excluded so digit runs stay intact.
fn is_script_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || (('\u{0900}'..='\u{097F}').contains(&c) && !is_devanagari_digit(c))
}

fn is_digit_char(c: char) -> bool {
    c.is_ascii_digit() || is_devanagari_digit(c)
}

/// Inserts a space between adjacent letter/digit pairs in either order.
fn repair_digit_spacing(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if let Some(p) = prev {
            let letter_digit = is_script_letter(p) && is_digit_char(c);
            let digit_letter = is_digit_char(p) && is_script_letter(c);
            if letter_digit || digit_letter {
                out.push(' ');
            }
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Surrounds each keyword occurrence with spaces, ASCII-case-insensitively.
fn space_keywords(text: &str) -> String {
    let mut current = text.to_string();
    for keyword in KEYWORDS {
        current = surround_keyword(&current, keyword);
    }
    current
}

fn surround_keyword(text: &str, keyword: &str) -> String {
    let klen = keyword.len();
    let mut out = String::with_capacity(text.len() + 8);
    let mut skip_until = 0usize;
    for (i, c) in text.char_indices() {
        if i < skip_until {
            continue;
        }
        if let Some(candidate) = text.get(i..i + klen) {
            if candidate.eq_ignore_ascii_case(keyword) {
                out.push(' ');
                out.push_str(candidate);
                out.push(' ');
                skip_until = i + klen;
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Replaces each separator glyph with a standalone `" : "` token.
fn standardize_separators(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if SEPARATORS.contains(&c) {
            out.push_str(" : ");
        } else {
            out.push(c);
        }
    }
    out
}

/// Collapses runs of whitespace into single spaces and trims the ends.
fn squeeze_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
