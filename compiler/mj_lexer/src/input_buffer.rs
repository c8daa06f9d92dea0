//! Growable lookahead window over a [`CharSource`].
//!
//! # Layout
//!
//! ```text
//! buf: [ consumed... | start ..... marked ..... cursor ..... filled | free ]
//!                      ^ match     ^ longest    ^ next char    ^ end of
//!                        start       accepting    to read        read input
//! ```
//!
//! Everything before `start` belongs to committed tokens and may be
//! discarded by the next refill. `start..filled` must survive a refill,
//! so when it fills the whole buffer the buffer doubles instead.
//!
//! Offsets, lines and columns are advanced on [`commit`](InputBuffer::commit)
//! only, so characters read as lookahead and then rolled back never touch
//! the position counters.

use std::io;

use crate::position::{is_line_terminator, Position};
use crate::source::CharSource;

/// Smallest buffer the lexer will allocate.
const MIN_CAPACITY: usize = 1;

/// One input symbol: a character, or the end-of-input sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Symbol {
    Char(char),
    Eof,
}

pub(crate) struct InputBuffer<S> {
    source: S,
    buf: Vec<char>,
    /// Number of valid chars in `buf`.
    filled: usize,
    /// First char of the current match.
    start: usize,
    /// Next char to read.
    cursor: usize,
    /// End of the longest accepted prefix of the current match.
    marked: usize,
    /// The source reported exhaustion.
    at_eof: bool,
    /// Position of `buf[marked]` after the last commit.
    pos: Position,
    /// The last committed char was `\r` (so a following `\n` is the same line break).
    after_cr: bool,
    initial_capacity: usize,
}

impl<S: CharSource> InputBuffer<S> {
    pub(crate) fn new(source: S, capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY);
        Self {
            source,
            buf: vec!['\0'; capacity],
            filled: 0,
            start: 0,
            cursor: 0,
            marked: 0,
            at_eof: false,
            pos: Position::START,
            after_cr: false,
            initial_capacity: capacity,
        }
    }

    /// Swap in a new source, discarding every buffered char and resetting
    /// position counters. Returns the previous source.
    pub(crate) fn reset(&mut self, source: S) -> S {
        self.buf.truncate(self.initial_capacity);
        self.buf.shrink_to(self.initial_capacity);
        self.filled = 0;
        self.start = 0;
        self.cursor = 0;
        self.marked = 0;
        self.at_eof = false;
        self.pos = Position::START;
        self.after_cr = false;
        std::mem::replace(&mut self.source, source)
    }

    /// Start a new match at the end of the previous one.
    #[inline]
    pub(crate) fn begin(&mut self) {
        self.start = self.marked;
        self.cursor = self.marked;
    }

    /// Look at the next symbol without consuming it, refilling if needed.
    #[inline]
    pub(crate) fn peek(&mut self) -> io::Result<Symbol> {
        if self.cursor == self.filled && !self.refill()? {
            return Ok(Symbol::Eof);
        }
        Ok(Symbol::Char(self.buf[self.cursor]))
    }

    /// Consume the char returned by the last [`peek`](Self::peek).
    #[inline]
    pub(crate) fn advance(&mut self) {
        debug_assert!(self.cursor < self.filled, "advance past filled input");
        self.cursor += 1;
    }

    /// Record the current cursor as the longest accepting position.
    #[inline]
    pub(crate) fn mark(&mut self) {
        self.marked = self.cursor;
    }

    /// Length of the accepted prefix of the current match.
    #[inline]
    pub(crate) fn match_len(&self) -> usize {
        self.marked - self.start
    }

    /// Retract the accepted end of the current match by `n` chars.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds the current match length. The pattern table is
    /// the only caller; an oversized pushback means the table is inconsistent.
    pub(crate) fn pushback(&mut self, n: usize) {
        let len = self.match_len();
        assert!(
            n <= len,
            "pushback of {n} chars exceeds match length {len}"
        );
        self.marked -= n;
    }

    /// Abandon the current match: the next [`begin`](Self::begin) starts
    /// over at the same char.
    pub(crate) fn rewind(&mut self) {
        self.cursor = self.start;
        self.marked = self.start;
    }

    /// Accept exactly the first char of the current match and return it.
    ///
    /// Used for error recovery when no pattern accepted anything. The caller
    /// must have peeked at least one char of this match.
    pub(crate) fn accept_first(&mut self) -> char {
        debug_assert!(self.start < self.filled, "no char to accept");
        self.marked = self.start + 1;
        self.buf[self.start]
    }

    /// Finalise the current match: advance position counters over the
    /// accepted chars and return the match's start position and length.
    ///
    /// Returns `None`, committing nothing, if the match would end past
    /// offset `u32::MAX`.
    pub(crate) fn commit(&mut self) -> Option<(Position, u32)> {
        let start = self.pos;
        let len = u32::try_from(self.match_len()).ok()?;
        self.pos.offset.checked_add(len)?;
        // Line and column never exceed the offset.
        for &c in &self.buf[self.start..self.marked] {
            self.pos.offset += 1;
            if c == '\n' && self.after_cr {
                self.after_cr = false;
            } else if is_line_terminator(c) {
                self.pos.line += 1;
                self.pos.column = 0;
                self.after_cr = c == '\r';
            } else {
                self.pos.column += 1;
                self.after_cr = false;
            }
        }
        Some((start, len))
    }

    /// Chars of the most recently committed (or current) match.
    pub(crate) fn matched(&self) -> &[char] {
        &self.buf[self.start..self.marked]
    }

    /// Position of the first char not yet committed.
    #[inline]
    pub(crate) fn position(&self) -> Position {
        self.pos
    }

    /// Current allocation, in chars.
    pub(crate) fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Pull more input from the source.
    ///
    /// Returns `false` once the source is exhausted. Compacts the buffer
    /// first, then grows it (at least doubling) if the unread region of the
    /// current match still fills it.
    fn refill(&mut self) -> io::Result<bool> {
        if self.at_eof {
            return Ok(false);
        }

        if self.start > 0 {
            self.buf.copy_within(self.start..self.filled, 0);
            self.filled -= self.start;
            self.cursor -= self.start;
            self.marked -= self.start;
            self.start = 0;
        }

        if self.filled == self.buf.len() {
            let new_len = (self.buf.len() * 2).max(MIN_CAPACITY);
            tracing::debug!(
                from = self.buf.len(),
                to = new_len,
                "growing input buffer to hold an open match"
            );
            self.buf.resize(new_len, '\0');
        }

        let n = self.source.read_chars(&mut self.buf[self.filled..])?;
        if n == 0 {
            self.at_eof = true;
            return Ok(false);
        }
        self.filled += n;
        Ok(true)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
