//! Command-line options.

use std::path::PathBuf;

use mj_lexer::{LexerConfig, ParseTokenTypeError, TokenType, UnmatchedPolicy};

use crate::style::{ParseColorError, Rgb, StyleTable};

pub const USAGE: &str = "\
Usage: mj-lex [OPTIONS] [FILE]

Tokenize a MiniJava source file (stdin when FILE is absent or `-`).

Options:
  --highlight              Print the source with ANSI colours instead of a token dump
  --color=<kind>=<colour>  Override a token colour, e.g. --color=comment=#808080
  --strict                 Report characters that start no token
  --pairs                  Report unbalanced brackets
  --buffer=<n>             Initial input buffer size in chars
  -h, --help               Show this help

Kinds: keyword type identifier number operator comment string default
Set RUST_LOG (e.g. RUST_LOG=mj_lexer=trace) to see lexer tracing.
";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputPath {
    Stdin,
    File(PathBuf),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// One line per token.
    #[default]
    Dump,
    /// The source, coloured per token type.
    Highlight,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub input: InputPath,
    pub mode: Mode,
    pub strict: bool,
    pub pairs: bool,
    pub buffer: Option<usize>,
    pub styles: StyleTable,
    pub help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            input: InputPath::Stdin,
            mode: Mode::Dump,
            strict: false,
            pairs: false,
            buffer: None,
            styles: StyleTable::default(),
            help: false,
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("unexpected extra argument `{0}`")]
    ExtraArgument(String),
    #[error("invalid buffer size `{0}`")]
    BufferSize(String),
    #[error("expected --color=<kind>=<colour>, got `{0}`")]
    ColorSyntax(String),
    #[error(transparent)]
    ColorKind(#[from] ParseTokenTypeError),
    #[error(transparent)]
    Color(#[from] ParseColorError),
}

impl Options {
    /// Parse arguments (without the program name).
    pub fn parse(args: &[String]) -> Result<Options, OptionsError> {
        let mut options = Options::default();
        let mut input = None;

        for arg in args {
            if arg == "-h" || arg == "--help" {
                options.help = true;
            } else if arg == "--highlight" {
                options.mode = Mode::Highlight;
            } else if arg == "--strict" {
                options.strict = true;
            } else if arg == "--pairs" {
                options.pairs = true;
            } else if let Some(size) = arg.strip_prefix("--buffer=") {
                let size = size
                    .parse::<usize>()
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or_else(|| OptionsError::BufferSize(size.to_owned()))?;
                options.buffer = Some(size);
            } else if let Some(entry) = arg.strip_prefix("--color=") {
                let (kind, color) = entry
                    .split_once('=')
                    .ok_or_else(|| OptionsError::ColorSyntax(entry.to_owned()))?;
                options
                    .styles
                    .set(kind.parse::<TokenType>()?, color.parse::<Rgb>()?);
            } else if arg.starts_with('-') && arg != "-" {
                return Err(OptionsError::UnknownOption(arg.clone()));
            } else if input.is_some() {
                return Err(OptionsError::ExtraArgument(arg.clone()));
            } else if arg == "-" {
                input = Some(InputPath::Stdin);
            } else {
                input = Some(InputPath::File(PathBuf::from(arg)));
            }
        }

        options.input = input.unwrap_or(InputPath::Stdin);
        Ok(options)
    }

    /// Lexer settings implied by these options.
    pub fn lexer_config(&self) -> LexerConfig {
        let mut config = LexerConfig::default();
        if let Some(size) = self.buffer {
            config = config.buffer_capacity(size);
        }
        if self.strict {
            config = config.unmatched(UnmatchedPolicy::Error);
        }
        config
    }

    /// Name used in diagnostics.
    pub fn input_name(&self) -> String {
        match &self.input {
            InputPath::Stdin => "<stdin>".to_owned(),
            InputPath::File(path) => path.display().to_string(),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> Result<Options, OptionsError> {
        let args: Vec<String> = args.iter().map(|&a| a.to_owned()).collect();
        Options::parse(&args)
    }

    #[test]
    fn defaults_to_dumping_stdin() {
        let options = parse(&[]).unwrap();
        assert_eq!(options, Options::default());
        assert_eq!(options.lexer_config(), LexerConfig::default());
        assert_eq!(options.input_name(), "<stdin>");
    }

    #[test]
    fn flags_and_file() {
        let options = parse(&["--highlight", "Main.java", "--strict", "--pairs", "--buffer=64"])
            .unwrap();
        assert_eq!(options.input, InputPath::File(PathBuf::from("Main.java")));
        assert_eq!(options.mode, Mode::Highlight);
        assert!(options.strict && options.pairs);
        assert_eq!(
            options.lexer_config(),
            LexerConfig::default()
                .buffer_capacity(64)
                .unmatched(UnmatchedPolicy::Error)
        );
    }

    #[test]
    fn dash_means_stdin() {
        assert_eq!(parse(&["-"]).unwrap().input, InputPath::Stdin);
    }

    #[test]
    fn color_overrides() {
        let options = parse(&["--color=comment=#808080", "--color=Keyword=0x0000ff"]).unwrap();
        assert_eq!(options.styles.get(TokenType::Comment), Rgb::from_hex(0x80_8080));
        assert_eq!(options.styles.get(TokenType::Keyword), Rgb::from_hex(0x00_00ff));
    }

    #[test]
    fn usage_errors() {
        assert_eq!(
            parse(&["--verbose"]),
            Err(OptionsError::UnknownOption("--verbose".to_owned()))
        );
        assert_eq!(
            parse(&["a.java", "b.java"]),
            Err(OptionsError::ExtraArgument("b.java".to_owned()))
        );
        assert_eq!(
            parse(&["--buffer=0"]),
            Err(OptionsError::BufferSize("0".to_owned()))
        );
        assert_eq!(
            parse(&["--color=comment"]),
            Err(OptionsError::ColorSyntax("comment".to_owned()))
        );
        assert_eq!(
            parse(&["--color=keywords=#000000"]),
            Err(OptionsError::ColorKind(ParseTokenTypeError("keywords".to_owned())))
        );
        assert_eq!(
            parse(&["--color=number=red"]),
            Err(OptionsError::Color(ParseColorError("red".to_owned())))
        );
    }
}
