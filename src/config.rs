//! Command-line configuration.
//!
//! [`Cli`] is the raw `clap` surface. [`Config::from_cli`] validates it into
//! the settings the binary runs with.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::error::CalcError;
use crate::format::{DEFAULT_PRECISION, MAX_PRECISION};

/// Evaluate arithmetic expressions line by line.
///
/// Lines are read from INPUT, or from standard input when no file is given.
/// `set <slot> <expr>` stores a value in one of ten memory slots, `%<slot>`
/// reads it back, `%` is the previous result and `exit` stops.
#[derive(Debug, Parser)]
#[command(name = "linecalc", version)]
pub struct Cli {
    /// File to read lines from
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Significant digits in printed results
    #[arg(short, long, default_value_t = DEFAULT_PRECISION, value_parser = parse_precision)]
    pub precision: usize,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Where lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Open the input for line-by-line reading.
    ///
    /// # Errors
    /// Returns [`CalcError::Open`] when a file input cannot be opened.
    pub fn open(&self) -> Result<Box<dyn BufRead>, CalcError> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock()) as Box<dyn BufRead>),
            Self::File(path) => File::open(path)
                .map(|file| Box::new(BufReader::new(file)) as Box<dyn BufRead>)
                .map_err(|source| CalcError::Open {
                    path: path.clone(),
                    source,
                }),
        }
    }
}

/// Validated run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: Input,
    pub precision: usize,
    pub log_level: LevelFilter,
}

impl Config {
    /// Validate parsed arguments.
    ///
    /// # Errors
    /// Returns [`CalcError::ArgumentCount`] when more than one input file is
    /// named.
    pub fn from_cli(cli: Cli) -> Result<Self, CalcError> {
        let count = cli.inputs.len();
        let mut inputs = cli.inputs.into_iter();
        let input = match (inputs.next(), inputs.next()) {
            (None, _) => Input::Stdin,
            (Some(path), None) => Input::File(path),
            (Some(_), Some(_)) => return Err(CalcError::ArgumentCount(count)),
        };
        Ok(Self {
            input,
            precision: cli.precision,
            log_level: log_level(cli.verbose),
        })
    }
}

fn parse_precision(arg: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(digits @ 1..=MAX_PRECISION) => Ok(digits),
        Ok(_) => Err(format!("precision must be between 1 and {MAX_PRECISION}")),
        Err(e) => Err(e.to_string()),
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
