//! Token taxonomy and the `Token` value handed to consumers.
//!
//! A [`Token`] is a plain `Copy` value: kind, char offset, char length, and an
//! optional [`PairId`] for brackets. It carries no text; consumers that need
//! the lexeme slice it from their own copy of the source or ask the lexer for
//! [`token_text()`](crate::Lexer::token_text) before the next call.

use std::fmt;
use std::num::NonZeroI8;
use std::str::FromStr;

/// Highlighting category of a token.
///
/// `String` and `Default` belong to the taxonomy shared with style tables but
/// are never produced by the scanner: MiniJava has no string literals, and
/// `Default` styles text that is not covered by any token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenType {
    Keyword = 0,
    Type = 1,
    Identifier = 2,
    Number = 3,
    Operator = 4,
    Comment = 5,
    String = 6,
    Default = 7,
}

impl TokenType {
    /// Number of variants, for tables indexed by `TokenType as usize`.
    pub const COUNT: usize = 8;

    /// All variants in discriminant order.
    pub const ALL: [TokenType; Self::COUNT] = [
        TokenType::Keyword,
        TokenType::Type,
        TokenType::Identifier,
        TokenType::Number,
        TokenType::Operator,
        TokenType::Comment,
        TokenType::String,
        TokenType::Default,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            TokenType::Keyword => "keyword",
            TokenType::Type => "type",
            TokenType::Identifier => "identifier",
            TokenType::Number => "number",
            TokenType::Operator => "operator",
            TokenType::Comment => "comment",
            TokenType::String => "string",
            TokenType::Default => "default",
        }
    }

    /// Index into a `[T; TokenType::COUNT]` table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no [`TokenType`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown token type `{0}`")]
pub struct ParseTokenTypeError(pub String);

impl FromStr for TokenType {
    type Err = ParseTokenTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenType::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseTokenTypeError(s.to_owned()))
    }
}

/// Bracket family carried in the magnitude of a [`PairId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum BracketKind {
    /// `(` `)`
    Paren = 1,
    /// `[` `]`
    Square = 2,
    /// `{` `}`
    Curly = 3,
}

impl BracketKind {
    pub const ALL: [BracketKind; 3] = [BracketKind::Paren, BracketKind::Square, BracketKind::Curly];

    /// Opening and closing characters.
    pub const fn delimiters(self) -> (char, char) {
        match self {
            BracketKind::Paren => ('(', ')'),
            BracketKind::Square => ('[', ']'),
            BracketKind::Curly => ('{', '}'),
        }
    }
}

/// Signed bracket tag: magnitude is the [`BracketKind`], sign is polarity
/// (positive opens, negative closes).
///
/// Stored as `NonZeroI8` so `Option<PairId>` stays one byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairId(NonZeroI8);

impl PairId {
    /// Tag for an opening bracket of `kind`.
    pub const fn open(kind: BracketKind) -> Self {
        match NonZeroI8::new(kind as i8) {
            Some(v) => PairId(v),
            None => unreachable!(),
        }
    }

    /// Tag for a closing bracket of `kind`.
    pub const fn close(kind: BracketKind) -> Self {
        match NonZeroI8::new(-(kind as i8)) {
            Some(v) => PairId(v),
            None => unreachable!(),
        }
    }

    /// Signed value: `±1` paren, `±2` square, `±3` curly.
    #[inline]
    pub const fn get(self) -> i8 {
        self.0.get()
    }

    pub const fn kind(self) -> BracketKind {
        match self.0.get().unsigned_abs() {
            1 => BracketKind::Paren,
            2 => BracketKind::Square,
            _ => BracketKind::Curly,
        }
    }

    #[inline]
    pub const fn is_open(self) -> bool {
        self.0.get() > 0
    }

    #[inline]
    pub const fn is_close(self) -> bool {
        self.0.get() < 0
    }

    /// `true` if `self` is the closing counterpart of `open`.
    #[inline]
    pub const fn closes(self, open: PairId) -> bool {
        open.is_open() && self.0.get() == -open.0.get()
    }
}

impl fmt::Debug for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.get())
    }
}

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.get())
    }
}

/// A classified span of source text.
///
/// Offsets and lengths count `char`s (Unicode scalar values) from the start
/// of the current scan unit, i.e. since the last [`reset`](crate::Lexer::reset).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenType,
    /// Char offset of the first character.
    pub start: u32,
    /// Length in chars, always `>= 1`.
    pub len: u32,
    /// Bracket tag; `None` for everything but `( ) [ ] { }`.
    pub pair: Option<PairId>,
}

/// Size assertion: `Token` is passed around by value in highlighting loops.
/// u32 + u32 + u8 + Option<NonZeroI8> (1 byte) => 10, padded to 12.
const _: () = assert!(std::mem::size_of::<Token>() <= 12);

impl Token {
    #[inline]
    pub const fn new(kind: TokenType, start: u32, len: u32) -> Self {
        Token {
            kind,
            start,
            len,
            pair: None,
        }
    }

    #[inline]
    pub const fn with_pair(kind: TokenType, start: u32, len: u32, pair: PairId) -> Self {
        Token {
            kind,
            start,
            len,
            pair: Some(pair),
        }
    }

    /// Exclusive end offset, saturating at `u32::MAX`. Tokens from a
    /// [`Lexer`](crate::Lexer) never saturate.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.start.saturating_add(self.len)
    }

    /// Char range covered by this token, for slicing a `Vec<char>` or
    /// iterating `str::chars()`.
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end() as usize
    }

    /// Extract this token's text from the full source it was scanned from.
    ///
    /// Walks `source` by chars, so it is linear in `start`; highlighters that
    /// slice many tokens should convert the source to a `Vec<char>` once.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        let mut indices = source.char_indices().map(|(i, _)| i).chain(std::iter::once(source.len()));
        let start = indices.nth(self.start as usize).unwrap_or(source.len());
        let end = if self.len == 0 {
            start
        } else {
            indices.nth(self.len as usize - 1).unwrap_or(source.len())
        };
        &source[start..end]
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}+{}", self.kind, self.start, self.len)?;
        if let Some(pair) = self.pair {
            write!(f, " ({pair})")?;
        }
        Ok(())
    }
}
