//! Token dump: one tab-separated line per token.
//!
//! ```text
//! 3:9	keyword	57+18	-	"System.out.println"
//! 3:27	operator	75+1	+1	"("
//! ```

use std::io::{self, Write};

use mj_lexer::{Position, Token};

pub fn write_token(out: &mut impl Write, at: Position, token: &Token, text: &str) -> io::Result<()> {
    let pair = token
        .pair
        .map_or_else(|| "-".to_owned(), |pair| pair.to_string());
    writeln!(
        out,
        "{at}\t{}\t{}+{}\t{pair}\t{text:?}",
        token.kind, token.start, token.len
    )
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use mj_lexer::{BracketKind, PairId, TokenType};
    use pretty_assertions::assert_eq;

    use super::*;

    fn line(at: Position, token: Token, text: &str) -> String {
        let mut out = Vec::new();
        write_token(&mut out, at, &token, text).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_token() {
        assert_eq!(
            line(Position::START, Token::new(TokenType::Keyword, 0, 5), "class"),
            "1:1\tkeyword\t0+5\t-\t\"class\"\n"
        );
    }

    #[test]
    fn bracket_and_escaped_text() {
        let at = Position {
            offset: 20,
            line: 2,
            column: 4,
        };
        assert_eq!(
            line(
                at,
                Token::with_pair(TokenType::Operator, 20, 1, PairId::close(BracketKind::Curly)),
                "}"
            ),
            "3:5\toperator\t20+1\t-3\t\"}\"\n"
        );
        assert_eq!(
            line(at, Token::new(TokenType::Comment, 20, 7), "/*\ta\n*/"),
            "3:5\tcomment\t20+7\t-\t\"/*\\ta\\n*/\"\n"
        );
    }
}
