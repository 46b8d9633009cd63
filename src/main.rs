//! CLI entry point for the `linecalc` tool.
//!
//! Reads lines from a file or standard input and evaluates them, printing
//! each expression's value. Exits non-zero on the first line that is neither
//! a command nor an expression.

use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use linecalc::{CalcError, Cli, Config, Session};

fn main() -> ExitCode {
    let result = Config::from_cli(Cli::parse()).and_then(|config| {
        init_logging(&config);
        run(&config)
    });
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(config: &Config) {
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_env("RUST_LOG")
        .init();
}

fn run(config: &Config) -> Result<(), CalcError> {
    let input = config.input.open()?;
    let stdout = io::stdout().lock();
    let mut session = Session::new(stdout).with_precision(config.precision);
    session.run(input)?;
    Ok(())
}

fn report(err: &CalcError) {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    let _ = writeln!(io::stderr(), "ERROR: {message}");
}
