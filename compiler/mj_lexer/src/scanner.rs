//! The maximal-munch scanning engine.
//!
//! Every rule of the pattern table runs in parallel over the input. The
//! engine reads symbols until no rule is alive (or end of input has been
//! fed), remembers the longest prefix some rule accepted, and rolls the
//! input back to it. Among rules accepting that same longest prefix the
//! earliest in the table wins.

use std::fmt;
use std::io;
use std::iter::FusedIterator;

use crate::char_class::classify;
use crate::config::{LexerConfig, UnmatchedPolicy};
use crate::emitter::{emit, Emission};
use crate::input_buffer::{InputBuffer, Symbol};
use crate::lex_error::LexError;
use crate::position::Position;
use crate::rules::{Input, Step, RULES};
use crate::source::{CharSource, StrSource};
use crate::token::Token;

/// Result of one longest-match race.
enum Race {
    /// Rule `rule` won; the last `trailing` chars are lookahead only.
    Won { rule: usize, trailing: usize },
    /// Input remains but no rule accepts a prefix of it.
    NoMatch,
    /// Nothing left to read.
    End,
}

/// Streaming MiniJava lexer.
///
/// Pulls characters from a [`CharSource`] on demand and hands out one
/// [`Token`] per [`next_token`](Lexer::next_token) call. Whitespace (and,
/// under [`UnmatchedPolicy::Skip`], unrecognised characters) never reaches
/// the caller.
///
/// ```
/// use mj_lexer::{Lexer, TokenType};
///
/// let mut lexer = Lexer::for_str("int x;");
/// let first = lexer.next_token().unwrap().unwrap();
/// assert_eq!(first.kind, TokenType::Type);
/// assert_eq!(lexer.token_text(), "int");
/// ```
pub struct Lexer<S> {
    input: InputBuffer<S>,
    config: LexerConfig,
    /// Rules still alive in the current race, with their states, in
    /// priority order.
    alive: Vec<(usize, u32)>,
    /// Where the last token (or offending char) started.
    token_start: Position,
    /// End of stream has been reported.
    finished: bool,
}

impl<'a> Lexer<StrSource<'a>> {
    /// Lexer over an in-memory string, with the default configuration.
    pub fn for_str(text: &'a str) -> Self {
        Lexer::new(StrSource::new(text))
    }
}

impl<S: CharSource> Lexer<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: S, config: LexerConfig) -> Self {
        Lexer {
            input: InputBuffer::new(source, config.buffer_capacity),
            config,
            alive: Vec::with_capacity(RULES.len()),
            token_start: Position::START,
            finished: false,
        }
    }

    /// Start a new scan unit over `source`.
    ///
    /// All buffered text and the position counters are discarded; offsets
    /// of subsequent tokens count from 0 again. Returns the previous source.
    pub fn reset(&mut self, source: S) -> S {
        tracing::debug!(
            discarded_at = %self.input.position(),
            "resetting lexer onto a new source"
        );
        self.alive.clear();
        self.token_start = Position::START;
        self.finished = false;
        self.input.reset(source)
    }

    /// Scan the next token.
    ///
    /// Returns `Ok(None)` at end of input, and keeps doing so until the next
    /// [`reset`](Self::reset). A [`LexError::Lexical`] leaves the lexer just
    /// past the offending character; a [`LexError::Io`] leaves it where the
    /// failed token started. [`LexError::SourceTooLarge`] ends the stream.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if self.finished {
            return Ok(None);
        }

        loop {
            self.input.begin();
            let race = match self.race() {
                Ok(race) => race,
                Err(err) => {
                    self.input.rewind();
                    return Err(err.into());
                }
            };

            match race {
                Race::End => {
                    tracing::trace!(at = %self.input.position(), "end of stream");
                    self.finished = true;
                    return Ok(None);
                }
                Race::NoMatch => {
                    let found = self.input.accept_first();
                    let (position, _) = self.commit()?;
                    self.token_start = position;
                    return Err(LexError::Lexical { position, found });
                }
                Race::Won { rule, trailing } => {
                    self.input.pushback(trailing);
                    let (position, len) = self.commit()?;
                    match emit(&RULES[rule], position.offset, len) {
                        Emission::Token(token) => {
                            self.token_start = position;
                            tracing::trace!(?token, at = %position, "token");
                            return Ok(Some(token));
                        }
                        Emission::Skip => {}
                    }
                }
            }
        }
    }

    fn commit(&mut self) -> Result<(Position, u32), LexError> {
        self.input.commit().ok_or_else(|| {
            self.finished = true;
            LexError::SourceTooLarge {
                position: self.input.position(),
            }
        })
    }

    /// Run all rules from the current match start and mark the longest
    /// accepted prefix.
    fn race(&mut self) -> io::Result<Race> {
        let rules = &*RULES;
        let tolerate_unmatched = self.config.unmatched == UnmatchedPolicy::Skip;
        self.alive.clear();
        self.alive.extend(
            rules
                .iter()
                .enumerate()
                .filter(|(_, rule)| tolerate_unmatched || !rule.is_catch_all())
                .map(|(index, _)| (index, 0)),
        );

        let mut winner = None;
        let mut first = true;
        while !self.alive.is_empty() {
            let symbol = self.input.peek()?;
            let input = match symbol {
                Symbol::Char(c) => {
                    self.input.advance();
                    Input::Char(c, classify(c))
                }
                Symbol::Eof if first => return Ok(Race::End),
                Symbol::Eof => Input::Eof,
            };
            first = false;

            let mut accepted = None;
            self.alive.retain_mut(|(rule, state)| {
                let matcher = rules[*rule].matcher;
                match matcher.step(*state, input) {
                    Step::Dead => false,
                    Step::Alive {
                        state: next,
                        accepting,
                    } => {
                        *state = next;
                        if accepting && accepted.is_none() {
                            accepted = Some((*rule, matcher.trailing(next)));
                        }
                        true
                    }
                }
            });

            if let Some((rule, trailing)) = accepted {
                self.input.mark();
                winner = Some(Race::Won { rule, trailing });
            }
            if input == Input::Eof {
                break;
            }
        }

        Ok(winner.unwrap_or(Race::NoMatch))
    }

    /// Position of the first character not yet consumed by a token, error
    /// or skip.
    pub fn position(&self) -> Position {
        self.input.position()
    }

    /// Position of the first char of the last token (or offending
    /// character) returned by [`next_token`](Self::next_token).
    pub fn token_position(&self) -> Position {
        self.token_start
    }

    /// Text of the last token (or offending character) returned by
    /// [`next_token`](Self::next_token). Empty before the first call and
    /// after end of stream.
    pub fn token_text(&self) -> String {
        if self.finished {
            return String::new();
        }
        self.input.matched().iter().collect()
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Current input buffer size in chars; at least the configured
    /// capacity, larger once a long token forced growth.
    pub fn buffer_capacity(&self) -> usize {
        self.input.capacity()
    }

    /// Iterate over the remaining tokens.
    pub fn tokens(&mut self) -> Tokens<'_, S> {
        Tokens { lexer: self }
    }
}

impl<S> fmt::Debug for Lexer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("config", &self.config)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

/// Iterator returned by [`Lexer::tokens`].
///
/// Yields `Err` for lexical and I/O errors without stopping; ends (for good)
/// at end of input.
#[derive(Debug)]
pub struct Tokens<'l, S> {
    lexer: &'l mut Lexer<S>,
}

impl<S: CharSource> Iterator for Tokens<'_, S> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lexer.next_token().transpose()
    }
}

impl<S: CharSource> FusedIterator for Tokens<'_, S> {}

/// Scan a whole string with the default configuration.
///
/// Under the default [`UnmatchedPolicy::Skip`] a string source cannot
/// produce errors, so this returns the tokens directly.
///
/// ```
/// use mj_lexer::{tokenize, TokenType};
///
/// let kinds: Vec<_> = tokenize("x = 1;").iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenType::Identifier, TokenType::Operator, TokenType::Number, TokenType::Operator]
/// );
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    Lexer::for_str(text).tokens().flatten().collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
