//! Source coordinates.

use std::fmt;

/// A location in the scanned input.
///
/// All fields are 0-based and count `char`s. `Display` renders the
/// human-facing 1-based `line:column` form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Char offset from the start of the scan unit.
    pub offset: u32,
    pub line: u32,
    /// Chars since the last line terminator.
    pub column: u32,
}

impl Position {
    pub const START: Position = Position {
        offset: 0,
        line: 0,
        column: 0,
    };
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Returns `true` for characters that end a line for line counting.
///
/// `\r\n` is handled by the caller as a single terminator.
#[inline]
pub(crate) fn is_line_terminator(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
