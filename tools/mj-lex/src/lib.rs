//! MiniJava token dump and terminal syntax highlighter.
//!
//! The binary is a thin shell over [`run`]: it parses [`Options`], opens the
//! input and maps the returned [`Report`] to an exit code.

mod dump;
mod highlight;
mod logging;
mod options;
mod style;

use std::io::{self, Read, Write};

use mj_lexer::{
    match_brackets, CharSource, LexError, Lexer, Position, ReaderSource, StrSource, Token,
};

pub use dump::write_token;
pub use highlight::write_highlighted;
pub use logging::init_tracing;
pub use options::{InputPath, Mode, Options, OptionsError, USAGE};
pub use style::{ParseColorError, Rgb, StyleTable};

/// Summary of one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub tokens: usize,
    pub lexical_errors: usize,
    pub unbalanced: usize,
}

impl Report {
    /// No lexical errors and no unbalanced brackets.
    pub fn is_clean(&self) -> bool {
        self.lexical_errors == 0 && self.unbalanced == 0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("cannot read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot scan {name}: {source}")]
    Scan {
        name: String,
        #[source]
        source: LexError,
    },
    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
}

/// Tokens seen by [`scan`], with their start positions.
#[derive(Default)]
struct Scanned {
    tokens: Vec<Token>,
    starts: Vec<Position>,
    lexical_errors: usize,
}

/// Lex `input` according to `options`, writing the dump or highlighted
/// source to `out` and diagnostics to `diag`.
pub fn run(
    options: &Options,
    mut input: impl Read,
    out: &mut impl Write,
    diag: &mut impl Write,
) -> Result<Report, RunError> {
    let name = options.input_name();
    let config = options.lexer_config();
    tracing::debug!(input = %name, mode = ?options.mode, ?config, "scanning");

    let scanned = match options.mode {
        Mode::Dump => {
            let lexer = Lexer::with_config(ReaderSource::new(input), config);
            scan(lexer, &name, diag, |token, at, text| {
                write_token(out, at, token, text)
            })?
        }
        Mode::Highlight => {
            let mut bytes = Vec::new();
            input
                .read_to_end(&mut bytes)
                .map_err(|source| RunError::Read {
                    name: name.clone(),
                    source,
                })?;
            let source = String::from_utf8_lossy(&bytes);
            let lexer = Lexer::with_config(StrSource::new(&source), config);
            let scanned = scan(lexer, &name, diag, |_, _, _| Ok(()))?;
            write_highlighted(out, &source, &scanned.tokens, &options.styles)?;
            scanned
        }
    };

    let unbalanced = if options.pairs {
        report_unbalanced(&scanned, &name, diag)?
    } else {
        0
    };

    let report = Report {
        tokens: scanned.tokens.len(),
        lexical_errors: scanned.lexical_errors,
        unbalanced,
    };
    tracing::debug!(?report, "done");
    Ok(report)
}

/// Drain `lexer`, handing every token to `each` and reporting lexical
/// errors to `diag`.
fn scan<S: CharSource>(
    mut lexer: Lexer<S>,
    name: &str,
    diag: &mut impl Write,
    mut each: impl FnMut(&Token, Position, &str) -> io::Result<()>,
) -> Result<Scanned, RunError> {
    let mut scanned = Scanned::default();
    loop {
        match lexer.next_token() {
            Ok(Some(token)) => {
                let at = lexer.token_position();
                each(&token, at, &lexer.token_text())?;
                scanned.tokens.push(token);
                scanned.starts.push(at);
            }
            Ok(None) => return Ok(scanned),
            Err(err @ LexError::Lexical { .. }) => {
                writeln!(diag, "error: {name}:{err}")?;
                scanned.lexical_errors += 1;
            }
            Err(LexError::Io(source)) => {
                return Err(RunError::Read {
                    name: name.to_owned(),
                    source,
                })
            }
            Err(source @ LexError::SourceTooLarge { .. }) => {
                return Err(RunError::Scan {
                    name: name.to_owned(),
                    source,
                })
            }
        }
    }
}

fn report_unbalanced(
    scanned: &Scanned,
    name: &str,
    diag: &mut impl Write,
) -> Result<usize, RunError> {
    let matches = match_brackets(&scanned.tokens);
    for &index in matches.unbalanced() {
        let Some(pair) = scanned.tokens[index].pair else {
            continue;
        };
        let (open, close) = pair.kind().delimiters();
        let bracket = if pair.is_open() { open } else { close };
        writeln!(
            diag,
            "error: {name}:{}: unbalanced `{bracket}`",
            scanned.starts[index]
        )?;
    }
    Ok(matches.unbalanced().len())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
