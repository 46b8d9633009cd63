//! Errors reported by the line-execution layer and at startup.
//!
//! The evaluator itself never produces these; it only answers `None`. A
//! [`CalcError`] is raised once that answer reaches the session, or when the
//! input cannot be set up in the first place.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    /// More than one input file was named on the command line.
    #[error("invalid number of arguments: expected at most 1 input file, got {0}")]
    ArgumentCount(usize),
    /// The input file could not be opened.
    #[error("file {} couldn't be opened for input", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Reading the next line failed.
    #[error("failed to read input")]
    Read(#[source] io::Error),
    /// Writing a result failed.
    #[error("failed to write output")]
    Write(#[source] io::Error),
    /// A line is neither a command nor an expression.
    #[error("syntax error")]
    Syntax,
}
