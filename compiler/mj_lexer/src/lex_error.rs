//! Errors returned by [`Lexer::next_token`](crate::Lexer::next_token).

use std::io;

use crate::position::Position;

#[derive(Debug, thiserror::Error)]
pub enum LexError {
    /// No pattern accepts the character at `position`.
    ///
    /// Only produced under [`UnmatchedPolicy::Error`](crate::UnmatchedPolicy::Error).
    /// The lexer has already moved past `found`; calling `next_token` again
    /// resumes with the following character.
    #[error("{position}: unexpected character {found:?}")]
    Lexical { position: Position, found: char },

    /// The character source failed. The lexer state is unchanged, so a
    /// retry re-reads from the same point.
    #[error("failed to read source")]
    Io(#[from] io::Error),

    /// The next token would end past offset `u32::MAX`. Ends the stream:
    /// further calls return `Ok(None)` until the lexer is reset.
    #[error("{position}: source longer than {} chars", u32::MAX)]
    SourceTooLarge { position: Position },
}

impl LexError {
    /// Position of a lexical or overflow error; `None` for I/O failures.
    pub fn position(&self) -> Option<Position> {
        match self {
            LexError::Lexical { position, .. } | LexError::SourceTooLarge { position } => {
                Some(*position)
            }
            LexError::Io(_) => None,
        }
    }
}
