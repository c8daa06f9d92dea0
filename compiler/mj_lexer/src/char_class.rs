//! Character classification.
//!
//! Every `char` maps to exactly one [`CharClass`]; there is no failure mode.
//! The ASCII range is served from a 128-entry table built once on first use.
//! Everything above it is looked up in sorted range tables; characters
//! outside the Basic Multilingual Plane are always [`CharClass::Other`].

use std::cmp::Ordering;
use std::sync::LazyLock;

mod tables;

/// Equivalence class of an input character, used to select pattern
/// transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Space, tab, form feed.
    Whitespace,
    /// `\n` or `\r`.
    LineTerminator,
    /// Letters, currency symbols and connector punctuation (`_`, `$`): may
    /// start an identifier.
    IdentStart,
    /// Characters that may continue, but not start, an identifier
    /// (ignorable controls, combining marks, non-ASCII digits).
    IdentPart,
    /// `0`-`9`.
    Digit,
    Slash,
    Star,
    Dot,
    Ampersand,
    /// Single-character operators: `! + , - ; < =`.
    Operator,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    /// Anything no pattern starts with.
    Other,
}

impl CharClass {
    #[inline]
    pub fn is_ident_start(self) -> bool {
        self == CharClass::IdentStart
    }

    #[inline]
    pub fn is_ident_part(self) -> bool {
        matches!(
            self,
            CharClass::IdentStart | CharClass::IdentPart | CharClass::Digit
        )
    }
}

static ASCII_CLASSES: LazyLock<[CharClass; 128]> = LazyLock::new(build_ascii_table);

fn build_ascii_table() -> [CharClass; 128] {
    let mut table = [CharClass::Other; 128];
    for (byte, slot) in (0u8..128).zip(table.iter_mut()) {
        *slot = match byte {
            b' ' | b'\t' | 0x0C => CharClass::Whitespace,
            b'\n' | b'\r' => CharClass::LineTerminator,
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'$' => CharClass::IdentStart,
            0x00..=0x08 | 0x0E..=0x1B | 0x7F => CharClass::IdentPart,
            b'0'..=b'9' => CharClass::Digit,
            b'/' => CharClass::Slash,
            b'*' => CharClass::Star,
            b'.' => CharClass::Dot,
            b'&' => CharClass::Ampersand,
            b'!' | b'+' | b',' | b'-' | b';' | b'<' | b'=' => CharClass::Operator,
            b'(' => CharClass::LeftParen,
            b')' => CharClass::RightParen,
            b'[' => CharClass::LeftBracket,
            b']' => CharClass::RightBracket,
            b'{' => CharClass::LeftBrace,
            b'}' => CharClass::RightBrace,
            _ => CharClass::Other,
        };
    }
    table
}

/// Classify one character.
#[inline]
pub fn classify(c: char) -> CharClass {
    if c.is_ascii() {
        ASCII_CLASSES[c as usize]
    } else {
        classify_non_ascii(c)
    }
}

fn classify_non_ascii(c: char) -> CharClass {
    if in_ranges(tables::IDENT_START, c) {
        CharClass::IdentStart
    } else if in_ranges(tables::IDENT_PART, c) {
        CharClass::IdentPart
    } else {
        CharClass::Other
    }
}

fn in_ranges(ranges: &[(char, char)], c: char) -> bool {
    ranges
        .binary_search_by(|&(lo, hi)| {
            if hi < c {
                Ordering::Less
            } else if lo > c {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}
