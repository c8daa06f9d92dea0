use pretty_assertions::assert_eq;

use super::*;
use crate::token::TokenType;

/// Serves `text` one char per read, failing once when `fail_at` chars have
/// been handed out.
struct FlakySource {
    chars: Vec<char>,
    next: usize,
    fail_at: Option<usize>,
}

impl FlakySource {
    fn new(text: &str, fail_at: usize) -> Self {
        FlakySource {
            chars: text.chars().collect(),
            next: 0,
            fail_at: Some(fail_at),
        }
    }
}

impl CharSource for FlakySource {
    fn read_chars(&mut self, buf: &mut [char]) -> io::Result<usize> {
        if self.fail_at == Some(self.next) {
            self.fail_at = None;
            return Err(io::Error::other("disk on fire"));
        }
        match (self.chars.get(self.next), buf.first_mut()) {
            (Some(&c), Some(slot)) => {
                *slot = c;
                self.next += 1;
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

fn kinds_and_texts(text: &str) -> Vec<(TokenType, String)> {
    let mut lexer = Lexer::for_str(text);
    let mut out = Vec::new();
    while let Some(token) = lexer.next_token().unwrap() {
        out.push((token.kind, lexer.token_text()));
    }
    out
}

#[test]
fn token_text_tracks_the_last_token() {
    assert_eq!(
        kinds_and_texts("while (x < 10) // loop\n"),
        vec![
            (TokenType::Keyword, "while".to_owned()),
            (TokenType::Operator, "(".to_owned()),
            (TokenType::Identifier, "x".to_owned()),
            (TokenType::Operator, "<".to_owned()),
            (TokenType::Number, "10".to_owned()),
            (TokenType::Operator, ")".to_owned()),
            (TokenType::Comment, "// loop".to_owned()),
        ]
    );
}

#[test]
fn end_of_stream_is_sticky() {
    let mut lexer = Lexer::for_str("x");
    assert!(lexer.next_token().unwrap().is_some());
    assert!(lexer.next_token().unwrap().is_none());
    assert!(lexer.next_token().unwrap().is_none());
    assert_eq!(lexer.token_text(), "");
    assert_eq!(lexer.tokens().count(), 0);
}

#[test]
fn io_error_mid_token_can_be_retried() {
    // Fails after `ide` has been read as part of an identifier.
    let mut lexer = Lexer::with_config(
        FlakySource::new("ident = 1", 3),
        LexerConfig::default().buffer_capacity(1),
    );
    let err = lexer.next_token().unwrap_err();
    assert!(matches!(err, LexError::Io(_)), "{err:?}");
    assert_eq!(err.position(), None);
    assert_eq!(lexer.position(), Position::START);

    let token = lexer.next_token().unwrap().unwrap();
    assert_eq!(token, Token::new(TokenType::Identifier, 0, 5));
    assert_eq!(lexer.token_text(), "ident");
    let rest: Vec<_> = lexer.tokens().map(Result::unwrap).collect();
    assert_eq!(
        rest,
        vec![
            Token::new(TokenType::Operator, 6, 1),
            Token::new(TokenType::Number, 8, 1),
        ]
    );
}

#[test]
fn lexical_error_reports_the_char_and_moves_on() {
    let config = LexerConfig::default().unmatched(UnmatchedPolicy::Error);
    let mut lexer = Lexer::with_config(StrSource::new("a\n #b"), config);
    assert_eq!(
        lexer.next_token().unwrap(),
        Some(Token::new(TokenType::Identifier, 0, 1))
    );

    let err = lexer.next_token().unwrap_err();
    let LexError::Lexical { position, found } = err else {
        panic!("expected a lexical error, got {err:?}");
    };
    assert_eq!(found, '#');
    assert_eq!(
        position,
        Position {
            offset: 3,
            line: 1,
            column: 1
        }
    );
    assert_eq!(lexer.token_text(), "#");
    assert_eq!(
        lexer.next_token().unwrap(),
        Some(Token::new(TokenType::Identifier, 4, 1))
    );
}

#[test]
fn error_message_names_position_and_char() {
    let config = LexerConfig::default().unmatched(UnmatchedPolicy::Error);
    let mut lexer = Lexer::with_config(StrSource::new("x\n  @"), config);
    lexer.next_token().unwrap();
    let err = lexer.next_token().unwrap_err();
    assert_eq!(err.to_string(), "2:3: unexpected character '@'");
}

#[test]
fn reset_starts_a_new_scan_unit() {
    let mut lexer = Lexer::for_str("int a;\nint b;");
    lexer.next_token().unwrap();
    lexer.next_token().unwrap();
    assert_eq!(lexer.position().offset, 5);

    let _old = lexer.reset(StrSource::new("x"));
    assert_eq!(lexer.position(), Position::START);
    assert_eq!(
        lexer.next_token().unwrap(),
        Some(Token::new(TokenType::Identifier, 0, 1))
    );
    assert_eq!(lexer.next_token().unwrap(), None);

    // A finished lexer comes back to life after a reset.
    lexer.reset(StrSource::new("1"));
    assert_eq!(
        lexer.next_token().unwrap(),
        Some(Token::new(TokenType::Number, 0, 1))
    );
}

#[test]
fn long_comment_grows_a_tiny_buffer() {
    let text = format!("/*{}*/ x", "-".repeat(100));
    let mut lexer = Lexer::with_config(
        StrSource::new(&text),
        LexerConfig::default().buffer_capacity(4),
    );
    assert_eq!(
        lexer.next_token().unwrap(),
        Some(Token::new(TokenType::Comment, 0, 104))
    );
    assert!(lexer.buffer_capacity() >= 104);
    assert_eq!(
        lexer.next_token().unwrap(),
        Some(Token::new(TokenType::Identifier, 105, 1))
    );
}

#[test]
fn lexer_is_send_when_its_source_is() {
    fn assert_send<T: Send>() {}
    assert_send::<Lexer<StrSource<'static>>>();
}

#[test]
fn token_position_is_where_the_token_starts() {
    let mut lexer = Lexer::for_str("/* a\n b */ x\r\n  y");
    lexer.next_token().unwrap();
    assert_eq!(lexer.token_position(), Position::START);
    assert_eq!((lexer.position().line, lexer.position().column), (1, 5));

    lexer.next_token().unwrap();
    assert_eq!(
        lexer.token_position(),
        Position {
            offset: 11,
            line: 1,
            column: 6
        }
    );

    lexer.next_token().unwrap();
    assert_eq!(
        lexer.token_position(),
        Position {
            offset: 16,
            line: 2,
            column: 2
        }
    );
}
