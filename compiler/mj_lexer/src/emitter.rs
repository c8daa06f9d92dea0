//! Turns an accepted match into what the caller sees.

use crate::rules::{Action, Rule};
use crate::token::{Token, TokenType};

/// Outcome of a winning match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Emission {
    Token(Token),
    /// Whitespace or a tolerated stray char: scan again.
    Skip,
}

/// Build the emission for `rule` accepting `len` chars at char offset `start`.
#[inline]
pub(crate) fn emit(rule: &Rule, start: u32, len: u32) -> Emission {
    match rule.action {
        Action::Emit(kind) => Emission::Token(Token::new(kind, start, len)),
        Action::Bracket(pair) => {
            Emission::Token(Token::with_pair(TokenType::Operator, start, len, pair))
        }
        Action::Skip => Emission::Skip,
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use super::*;
    use crate::rules::{Matcher, RULES};
    use crate::token::{BracketKind, PairId};

    fn rule_for(matcher: Matcher) -> Rule {
        RULES
            .iter()
            .copied()
            .find(|r| r.matcher == matcher)
            .unwrap()
    }

    #[test]
    fn keyword_and_comment_tokens() {
        assert_eq!(
            emit(&rule_for(Matcher::Literal("while")), 4, 5),
            Emission::Token(Token::new(TokenType::Keyword, 4, 5))
        );
        assert_eq!(
            emit(&rule_for(Matcher::BlockComment), 0, 9),
            Emission::Token(Token::new(TokenType::Comment, 0, 9))
        );
    }

    #[test]
    fn brackets_are_operators_with_pair_ids() {
        assert_eq!(
            emit(&rule_for(Matcher::Literal("]")), 7, 1),
            Emission::Token(Token::with_pair(
                TokenType::Operator,
                7,
                1,
                PairId::close(BracketKind::Square)
            ))
        );
    }

    #[test]
    fn whitespace_and_catch_all_skip() {
        assert_eq!(emit(&rule_for(Matcher::Whitespace), 0, 3), Emission::Skip);
        assert_eq!(emit(&rule_for(Matcher::AnyChar), 0, 1), Emission::Skip);
    }
}
