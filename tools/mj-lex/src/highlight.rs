//! ANSI 24-bit colour rendering of a token stream.

use std::io::{self, Write};

use mj_lexer::{Token, TokenType};

use crate::style::{Rgb, StyleTable};

const RESET: &str = "\x1b[0m";

fn set_foreground(out: &mut impl Write, color: Rgb) -> io::Result<()> {
    write!(out, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// Write `source` to `out`, colouring each char by the token covering it.
///
/// Text outside every token (whitespace, skipped characters) takes the
/// [`TokenType::Default`] colour. An escape is only emitted when the colour
/// changes.
pub fn write_highlighted(
    out: &mut impl Write,
    source: &str,
    tokens: &[Token],
    styles: &StyleTable,
) -> io::Result<()> {
    let mut current = None;
    let mut tokens = tokens.iter().peekable();
    let mut utf8 = [0u8; 4];

    for (offset, c) in (0u32..).zip(source.chars()) {
        while tokens.next_if(|t| t.end() <= offset).is_some() {}
        let kind = match tokens.peek() {
            Some(token) if token.start <= offset => token.kind,
            _ => TokenType::Default,
        };

        let color = styles.get(kind);
        if current != Some(color) {
            set_foreground(out, color)?;
            current = Some(color);
        }
        out.write_all(c.encode_utf8(&mut utf8).as_bytes())?;
    }

    if current.is_some() {
        out.write_all(RESET.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use mj_lexer::tokenize;
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(source: &str, styles: &StyleTable) -> String {
        let mut out = Vec::new();
        write_highlighted(&mut out, source, &tokenize(source), styles).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn colour_changes_only_between_styles() {
        assert_eq!(
            render("int x", &StyleTable::default()),
            "\x1b[38;2;0;41;103mint\x1b[38;2;0;0;0m x\x1b[0m"
        );
    }

    #[test]
    fn gaps_use_the_default_style() {
        let mut styles = StyleTable::default();
        styles.set(TokenType::Default, Rgb::from_hex(0x80_8080));
        assert_eq!(
            render("a #b", &styles),
            "\x1b[38;2;0;0;0ma\x1b[38;2;128;128;128m #\x1b[38;2;0;0;0mb\x1b[0m"
        );
    }

    #[test]
    fn comment_keeps_its_colour_across_chars() {
        assert_eq!(
            render("// é\n", &StyleTable::default()),
            "\x1b[38;2;17;78;33m// é\x1b[38;2;0;0;0m\n\x1b[0m"
        );
    }

    #[test]
    fn empty_source_writes_nothing() {
        assert_eq!(render("", &StyleTable::default()), "");
    }
}
