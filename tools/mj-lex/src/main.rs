//! `mj-lex`: dump or highlight the tokens of a MiniJava source file.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::process::ExitCode;

use mj_lex::{init_tracing, run, InputPath, Options, USAGE};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match Options::parse(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprint!("{USAGE}");
            return ExitCode::from(2);
        }
    };
    if options.help {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let input: Box<dyn Read> = match &options.input {
        InputPath::Stdin => Box::new(io::stdin().lock()),
        InputPath::File(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(err) => {
                eprintln!("error: cannot open '{}': {err}", path.display());
                return ExitCode::from(1);
            }
        },
    };

    let mut out = BufWriter::new(io::stdout().lock());
    let mut diag = io::stderr().lock();
    let result = run(&options, input, &mut out, &mut diag).and_then(|report| {
        out.flush()?;
        Ok(report)
    });

    match result {
        Ok(report) if report.is_clean() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}
