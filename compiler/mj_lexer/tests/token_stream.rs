//! End-to-end token stream behaviour on MiniJava snippets.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::io::Cursor;

use mj_lexer::{
    tokenize, LexError, Lexer, LexerConfig, ReaderSource, StrSource, Token, TokenType,
    UnmatchedPolicy, KEYWORDS, TYPES,
};
use pretty_assertions::assert_eq;

use TokenType::{Comment, Identifier, Keyword, Number, Operator, Type};

/// `(kind, start, len)` triples, which read better in diffs than `Token`s.
fn lex(text: &str) -> Vec<(TokenType, u32, u32)> {
    tokenize(text)
        .into_iter()
        .map(|t| (t.kind, t.start, t.len))
        .collect()
}

fn pair_ids(text: &str) -> Vec<i8> {
    tokenize(text)
        .into_iter()
        .filter_map(|t| t.pair.map(|p| p.get()))
        .collect()
}

// === Maximal munch and priority ===

#[test]
fn keyword_wins_a_tie_identifier_wins_when_longer() {
    assert_eq!(lex("class"), [(Keyword, 0, 5)]);
    assert_eq!(lex("classify"), [(Identifier, 0, 8)]);
    assert_eq!(lex("int integer"), [(Type, 0, 3), (Identifier, 4, 7)]);
}

#[test]
fn every_reserved_word_is_recognised() {
    for word in KEYWORDS {
        let len = u32::try_from(word.len()).unwrap();
        assert_eq!(lex(word), [(Keyword, 0, len)], "{word}");
    }
    for word in TYPES {
        let len = u32::try_from(word.len()).unwrap();
        assert_eq!(lex(word), [(Type, 0, len)], "{word}");
    }
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(lex("Class string"), [(Identifier, 0, 5), (Identifier, 6, 6)]);
}

#[test]
fn number_then_identifier() {
    assert_eq!(lex("123abc"), [(Number, 0, 3), (Identifier, 3, 3)]);
    assert_eq!(lex("abc123"), [(Identifier, 0, 6)]);
    assert_eq!(lex("1.5"), [(Number, 0, 1), (Operator, 1, 1), (Number, 2, 1)]);
}

#[test]
fn dotted_keyword_rolls_back_when_incomplete() {
    assert_eq!(
        lex("System.out"),
        [(Identifier, 0, 6), (Operator, 6, 1), (Identifier, 7, 3)]
    );
    assert_eq!(lex("System.out.printlnx"), [(Keyword, 0, 18), (Identifier, 18, 1)]);
    assert_eq!(
        lex("System.out.println(x);"),
        [
            (Keyword, 0, 18),
            (Operator, 18, 1),
            (Identifier, 19, 1),
            (Operator, 20, 1),
            (Operator, 21, 1),
        ]
    );
}

#[test]
fn operators() {
    assert_eq!(
        lex("a&&!b<c"),
        [
            (Identifier, 0, 1),
            (Operator, 1, 2),
            (Operator, 3, 1),
            (Identifier, 4, 1),
            (Operator, 5, 1),
            (Identifier, 6, 1),
        ]
    );
    assert_eq!(
        lex("x=y*2-z+1,"),
        [
            (Identifier, 0, 1),
            (Operator, 1, 1),
            (Identifier, 2, 1),
            (Operator, 3, 1),
            (Number, 4, 1),
            (Operator, 5, 1),
            (Identifier, 6, 1),
            (Operator, 7, 1),
            (Number, 8, 1),
            (Operator, 9, 1),
        ]
    );
}

// === Skipping ===

#[test]
fn empty_and_blank_input() {
    assert!(lex("").is_empty());
    assert!(lex(" \t\r\n\u{C}").is_empty());
}

#[test]
fn stray_characters_are_skipped() {
    // Lone `&` and `/` start no token; MiniJava has no string literals.
    assert_eq!(lex("a & b"), [(Identifier, 0, 1), (Identifier, 4, 1)]);
    assert_eq!(lex("x/y"), [(Identifier, 0, 1), (Identifier, 2, 1)]);
    assert_eq!(lex("\"hi\" 'c'"), [(Identifier, 1, 2), (Identifier, 6, 1)]);
    assert!(lex("#@|%").is_empty());
}

// === Comments ===

#[test]
fn line_comment_excludes_its_terminator() {
    assert_eq!(lex("// a comment\nx"), [(Comment, 0, 12), (Identifier, 13, 1)]);
    assert_eq!(lex("// a comment\r\nx"), [(Comment, 0, 12), (Identifier, 14, 1)]);
    assert_eq!(lex("// a comment\rx"), [(Comment, 0, 12), (Identifier, 13, 1)]);
    assert_eq!(lex("x // trailing"), [(Identifier, 0, 1), (Comment, 2, 11)]);
}

#[test]
fn line_comment_hides_everything_to_end_of_line() {
    assert_eq!(lex("// class { /* x\ny"), [(Comment, 0, 15), (Identifier, 16, 1)]);
}

#[test]
fn block_comments() {
    assert_eq!(
        lex("a /* b\n c */ d"),
        [(Identifier, 0, 1), (Comment, 2, 10), (Identifier, 13, 1)]
    );
    // Ends at the first `*/`.
    assert_eq!(lex("/* a */ */"), [(Comment, 0, 7), (Operator, 8, 1)]);
    assert_eq!(lex("/**/"), [(Comment, 0, 4)]);
}

#[test]
fn unterminated_block_comment_runs_to_end_of_input() {
    assert_eq!(lex("x /* never closed\nint y;"), [(Identifier, 0, 1), (Comment, 2, 22)]);
    assert_eq!(lex("/*"), [(Comment, 0, 2)]);
}

// === Brackets ===

#[test]
fn brackets_carry_pair_ids() {
    assert_eq!(pair_ids("(())"), [1, 1, -1, -1]);
    assert_eq!(pair_ids("{[()]}"), [3, 2, 1, -1, -2, -3]);
    // Balance is not the lexer's business.
    assert_eq!(pair_ids("]]("), [-2, -2, 1]);
}

#[test]
fn brackets_are_operators() {
    for token in tokenize("{[()]}") {
        assert_eq!(token.kind, Operator);
        assert_eq!(token.len, 1);
    }
    assert!(tokenize("+ ;").iter().all(|t| t.pair.is_none()));
}

// === A real program ===

const PROGRAM: &str = "\
class Factorial {
    public static void main(String[] a) {
        System.out.println(new Fac().ComputeFac(10));
    }
}

class Fac {
    // recursive
    public int ComputeFac(int num) {
        int num_aux;
        if (num < 1) num_aux = 1;
        else num_aux = num * (this.ComputeFac(num - 1));
        return num_aux;
    }
}
";

#[test]
fn program_tokens_reconstruct_their_text() {
    let texts: Vec<&str> = tokenize(PROGRAM).iter().map(|t| t.text(PROGRAM)).collect();
    assert_eq!(
        &texts[..16],
        [
            "class", "Factorial", "{", "public", "static", "void", "main", "(", "String", "[",
            "]", "a", ")", "{", "System.out.println", "(",
        ]
    );
    assert!(texts.contains(&"// recursive"));
    assert_eq!(texts.last(), Some(&"}"));
}

#[test]
fn program_brackets_balance() {
    assert!(mj_lexer::match_brackets(&tokenize(PROGRAM)).is_balanced());
}

#[test]
fn positions_follow_lines() {
    let mut lexer = Lexer::for_str(PROGRAM);
    let mut comment_line = None;
    while let Some(token) = lexer.next_token().unwrap() {
        if token.kind == Comment {
            // `position` is just past the token.
            comment_line = Some(lexer.position().line);
        }
    }
    assert_eq!(comment_line, Some(7));
    assert_eq!(lexer.position().line, 15);
    assert_eq!(lexer.position().column, 0);
}

// === Strict mode ===

#[test]
fn strict_mode_reports_and_recovers() {
    let config = LexerConfig::default().unmatched(UnmatchedPolicy::Error);
    let mut lexer = Lexer::with_config(StrSource::new("a & b\n\"c"), config);

    let mut seen = Vec::new();
    for item in lexer.tokens() {
        match item {
            Ok(token) => seen.push(Ok((token.kind, token.start))),
            Err(LexError::Lexical { position, found }) => {
                seen.push(Err((found, position.offset, position.line)));
            }
            Err(err) => panic!("unexpected {err:?}"),
        }
    }
    assert_eq!(
        seen,
        [
            Ok((Identifier, 0)),
            Err(('&', 2, 0)),
            Ok((Identifier, 4)),
            Err(('"', 6, 1)),
            Ok((Identifier, 7)),
        ]
    );
}

#[test]
fn strict_mode_still_skips_whitespace_and_reads_comments() {
    let config = LexerConfig::default().unmatched(UnmatchedPolicy::Error);
    let mut lexer = Lexer::with_config(StrSource::new("  /* c */\n// d\n"), config);
    let tokens: Vec<Token> = lexer.tokens().collect::<Result<_, _>>().unwrap();
    assert_eq!(
        tokens,
        [Token::new(Comment, 2, 7), Token::new(Comment, 10, 4)]
    );
}

// === Streaming ===

#[test]
fn tiny_buffer_matches_default_buffer() {
    let config = LexerConfig::default().buffer_capacity(1);
    let mut lexer = Lexer::with_config(StrSource::new(PROGRAM), config);
    let streamed: Vec<Token> = lexer.tokens().collect::<Result<_, _>>().unwrap();
    assert_eq!(streamed, tokenize(PROGRAM));
}

#[test]
fn non_ascii_identifiers_follow_java_rules() {
    // Decomposed `é`: the combining accent continues the identifier.
    assert_eq!(lex("e\u{301}x"), [(Identifier, 0, 3)]);
    assert_eq!(lex("£x"), [(Identifier, 0, 2)]);
    assert_eq!(lex("a\u{AD}b"), [(Identifier, 0, 3)]);
    assert_eq!(lex("x²"), [(Identifier, 0, 1)]);
}

#[test]
fn byte_at_a_time_reader_matches_string_source() {
    let text = "int é = 1; // ü\nString ж; /* ✓ */";
    let source = ReaderSource::with_chunk_size(Cursor::new(text.as_bytes()), 1);
    let config = LexerConfig::default().buffer_capacity(2);
    let mut lexer = Lexer::with_config(source, config);
    let streamed: Vec<Token> = lexer.tokens().collect::<Result<_, _>>().unwrap();
    assert_eq!(streamed, tokenize(text));
    assert_eq!(
        streamed.iter().map(|t| t.text(text)).collect::<Vec<_>>(),
        ["int", "é", "=", "1", ";", "// ü", "String", "ж", ";", "/* ✓ */"]
    );
}

#[test]
fn invalid_utf8_is_replaced_not_fatal() {
    let bytes: &[u8] = b"a \xFF b";
    let mut lexer = Lexer::new(ReaderSource::new(bytes));
    let tokens: Vec<Token> = lexer.tokens().collect::<Result<_, _>>().unwrap();
    assert_eq!(
        tokens,
        [
            Token::new(Identifier, 0, 1),
            Token::new(Identifier, 4, 1)
        ]
    );
}
