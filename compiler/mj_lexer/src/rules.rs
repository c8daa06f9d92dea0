//! The MiniJava pattern table.
//!
//! Each [`Rule`] pairs a [`Matcher`] (a tiny state machine over classified
//! input) with the [`Action`] taken when it wins. The table order is the
//! priority order: when several rules accept the same longest prefix, the
//! one listed first wins. That is what makes `class` a keyword while
//! `classify`, accepted only by the identifier rule at length 8, stays an
//! identifier.
//!
//! | Priority | Rules | Action |
//! |---|---|---|
//! | 1 | [`KEYWORDS`] | `Keyword` |
//! | 2 | [`TYPES`] | `Type` |
//! | 3 | [`OPERATORS`] | `Operator` |
//! | 4 | `( ) [ ] { }` | `Operator` with a pair id |
//! | 5 | number | `Number` |
//! | 6 | identifier | `Identifier` |
//! | 7 | line comment | `Comment` |
//! | 8 | block comment | `Comment` |
//! | 9 | whitespace | skip |
//! | 10 | any char | skip (only when unmatched chars are tolerated) |

use std::sync::LazyLock;

use crate::char_class::CharClass;
use crate::token::{BracketKind, PairId, TokenType};

/// Reserved words, including the dotted `System.out.println`.
pub const KEYWORDS: [&str; 17] = [
    "public",
    "class",
    "static",
    "void",
    "main",
    "String",
    "extends",
    "return",
    "if",
    "else",
    "while",
    "for",
    "new",
    "this",
    "true",
    "false",
    "System.out.println",
];

/// Built-in type names.
pub const TYPES: [&str; 2] = ["int", "boolean"];

/// Operator lexemes (brackets excluded: those carry pair ids).
pub const OPERATORS: [&str; 10] = ["&&", "!", "+", ",", "-", ";", "<", "=", "*", "."];

/// Bracket lexemes with their pair ids.
const BRACKETS: [(&str, PairId); 6] = [
    ("(", PairId::open(BracketKind::Paren)),
    (")", PairId::close(BracketKind::Paren)),
    ("[", PairId::open(BracketKind::Square)),
    ("]", PairId::close(BracketKind::Square)),
    ("{", PairId::open(BracketKind::Curly)),
    ("}", PairId::close(BracketKind::Curly)),
];

/// A classified input symbol as seen by matchers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Input {
    Char(char, CharClass),
    Eof,
}

/// Result of feeding one symbol to a matcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// No transition: the matcher is out of the race.
    Dead,
    /// Transition taken; `accepting` means the prefix read so far is a
    /// complete match.
    Alive { state: u32, accepting: bool },
}

impl Step {
    #[inline]
    const fn to(state: u32, accepting: bool) -> Self {
        Step::Alive { state, accepting }
    }
}

/// Pattern state machines. State `0` is the start state for all of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Matcher {
    /// Exact ASCII text; the state is the number of chars matched.
    Literal(&'static str),
    /// `[0-9]+`
    Number,
    /// Identifier start followed by identifier parts.
    Identifier,
    /// `//` up to and including the line terminator, which the rule then
    /// pushes back (see [`Matcher::trailing`]).
    LineComment,
    /// `/* ... */`, or `/* ...` up to end of input.
    BlockComment,
    /// Runs of blanks and line terminators.
    Whitespace,
    /// Any single char.
    AnyChar,
}

// Line comment states.
const LC_SLASH: u32 = 1;
const LC_BODY: u32 = 2;
const LC_CR: u32 = 3;
const LC_LF: u32 = 4;
const LC_CRLF: u32 = 5;

// Block comment states.
const BC_SLASH: u32 = 1;
const BC_BODY: u32 = 2;
const BC_STAR: u32 = 3;
const BC_CLOSED: u32 = 4;
const BC_AT_EOF: u32 = 5;

impl Matcher {
    /// Feed one symbol from `state`.
    pub(crate) fn step(self, state: u32, input: Input) -> Step {
        match self {
            Matcher::Literal(text) => match input {
                Input::Char(c, _)
                    if text
                        .as_bytes()
                        .get(state as usize)
                        .is_some_and(|&b| char::from(b) == c) =>
                {
                    let next = state + 1;
                    Step::to(next, next as usize == text.len())
                }
                _ => Step::Dead,
            },
            Matcher::Number => match input {
                Input::Char(_, CharClass::Digit) => Step::to(1, true),
                _ => Step::Dead,
            },
            Matcher::Identifier => match input {
                Input::Char(_, class) if state == 0 && class.is_ident_start() => Step::to(1, true),
                Input::Char(_, class) if state == 1 && class.is_ident_part() => Step::to(1, true),
                _ => Step::Dead,
            },
            Matcher::LineComment => Self::line_comment(state, input),
            Matcher::BlockComment => Self::block_comment(state, input),
            Matcher::Whitespace => match input {
                Input::Char(_, CharClass::Whitespace | CharClass::LineTerminator) => {
                    Step::to(1, true)
                }
                _ => Step::Dead,
            },
            Matcher::AnyChar => match input {
                Input::Char(..) if state == 0 => Step::to(1, true),
                _ => Step::Dead,
            },
        }
    }

    fn line_comment(state: u32, input: Input) -> Step {
        let Input::Char(c, _) = input else {
            return Step::Dead;
        };
        match (state, c) {
            (0, '/') => Step::to(LC_SLASH, false),
            (LC_SLASH, '/') => Step::to(LC_BODY, true),
            (LC_BODY, '\r') => Step::to(LC_CR, true),
            (LC_BODY, '\n') => Step::to(LC_LF, true),
            (LC_BODY, _) => Step::to(LC_BODY, true),
            (LC_CR, '\n') => Step::to(LC_CRLF, true),
            _ => Step::Dead,
        }
    }

    fn block_comment(state: u32, input: Input) -> Step {
        match (state, input) {
            (0, Input::Char('/', _)) => Step::to(BC_SLASH, false),
            (BC_SLASH, Input::Char('*', _)) => Step::to(BC_BODY, false),
            (BC_BODY | BC_STAR, Input::Eof) => Step::to(BC_AT_EOF, true),
            (BC_BODY | BC_STAR, Input::Char('*', _)) => Step::to(BC_STAR, false),
            (BC_STAR, Input::Char('/', _)) => Step::to(BC_CLOSED, true),
            (BC_BODY | BC_STAR, Input::Char(..)) => Step::to(BC_BODY, false),
            _ => Step::Dead,
        }
    }

    /// Chars at the end of an accepted match (ending in `state`) that are
    /// trailing context rather than part of the token.
    pub(crate) fn trailing(self, state: u32) -> usize {
        match (self, state) {
            (Matcher::LineComment, LC_CR | LC_LF) => 1,
            (Matcher::LineComment, LC_CRLF) => 2,
            _ => 0,
        }
    }
}

/// What a winning match produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Emit(TokenType),
    /// `Operator` token tagged with a pair id.
    Bracket(PairId),
    Skip,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Rule {
    pub(crate) matcher: Matcher,
    pub(crate) action: Action,
}

impl Rule {
    const fn new(matcher: Matcher, action: Action) -> Self {
        Rule { matcher, action }
    }

    /// The fallback that swallows characters no other rule starts with.
    #[inline]
    pub(crate) fn is_catch_all(&self) -> bool {
        self.matcher == Matcher::AnyChar
    }
}

/// The full table, in priority order. Built once.
pub(crate) static RULES: LazyLock<Box<[Rule]>> = LazyLock::new(build_rules);

fn build_rules() -> Box<[Rule]> {
    let literals = |words: &'static [&'static str], kind: TokenType| {
        words
            .iter()
            .map(move |&word| Rule::new(Matcher::Literal(word), Action::Emit(kind)))
    };
    let brackets = BRACKETS
        .iter()
        .map(|&(text, pair)| Rule::new(Matcher::Literal(text), Action::Bracket(pair)));

    literals(&KEYWORDS, TokenType::Keyword)
        .chain(literals(&TYPES, TokenType::Type))
        .chain(literals(&OPERATORS, TokenType::Operator))
        .chain(brackets)
        .chain([
            Rule::new(Matcher::Number, Action::Emit(TokenType::Number)),
            Rule::new(Matcher::Identifier, Action::Emit(TokenType::Identifier)),
            Rule::new(Matcher::LineComment, Action::Emit(TokenType::Comment)),
            Rule::new(Matcher::BlockComment, Action::Emit(TokenType::Comment)),
            Rule::new(Matcher::Whitespace, Action::Skip),
            Rule::new(Matcher::AnyChar, Action::Skip),
        ])
        .collect()
}
