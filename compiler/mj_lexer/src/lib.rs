//! MiniJava lexer.
//!
//! A streaming, maximal-munch scanner that turns MiniJava source into
//! classified tokens for syntax highlighting and compiler front-ends:
//! - [`classify`] maps every `char` to a [`CharClass`]
//! - [`CharSource`] feeds the lexer in chunks ([`StrSource`], [`ReaderSource`])
//! - [`Lexer`] runs the longest-match race over the pattern table
//! - [`match_brackets`] pairs the bracket tokens the lexer tagged
//!
//! # Token stream guarantees
//!
//! - Tokens come out in strictly increasing, non-overlapping order.
//! - Tokens plus the skipped gaps (whitespace, stray chars) cover the input
//!   exactly; offsets count `char`s.
//! - The same input always yields the same tokens, whatever the buffer size
//!   or the way the source splits its reads.
//!
//! ```
//! use mj_lexer::{tokenize, TokenType};
//!
//! let tokens = tokenize("class A { }");
//! assert_eq!(tokens[0].kind, TokenType::Keyword);
//! assert_eq!(tokens[2].pair.map(|p| p.get()), Some(3));
//! ```

mod char_class;
mod config;
mod emitter;
mod input_buffer;
mod lex_error;
mod pairs;
mod position;
mod rules;
mod scanner;
mod source;
mod token;

pub use char_class::{classify, CharClass};
pub use config::{LexerConfig, UnmatchedPolicy, DEFAULT_BUFFER_CAPACITY};
pub use lex_error::LexError;
pub use pairs::{match_brackets, BracketMatches};
pub use position::Position;
pub use rules::{KEYWORDS, OPERATORS, TYPES};
pub use scanner::{tokenize, Lexer, Tokens};
pub use source::{CharSource, ReaderSource, StrSource};
pub use token::{BracketKind, PairId, ParseTokenTypeError, Token, TokenType};
