//! Line-by-line execution.
//!
//! A [`Session`] owns the [`Context`] and an output sink. Each line is tried
//! as a command first and as an expression second. Expression results are
//! written to the sink and become the new last result. The first line that
//! is neither aborts the run.

use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::Context;
use crate::command::{self, Flow};
use crate::error::CalcError;
use crate::evaluator::evaluate;
use crate::format::{DEFAULT_PRECISION, format_general};

#[derive(Debug)]
pub struct Session<W> {
    ctx: Context,
    out: W,
    precision: usize,
}

impl<W: Write> Session<W> {
    /// Create a session with a fresh context writing results to `out`.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            ctx: Context::new(),
            out,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Set the number of significant digits used for printed results.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Consume the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Execute a single line.
    ///
    /// Blank lines are accepted and do nothing.
    ///
    /// # Errors
    /// Returns [`CalcError::Syntax`] when the line is neither a command nor an
    /// expression, and [`CalcError::Write`] when the result cannot be written.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow, CalcError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }
        if let Some(flow) = command::execute(&mut self.ctx, line) {
            return Ok(flow);
        }
        let value = evaluate(&self.ctx, line).ok_or(CalcError::Syntax)?;
        writeln!(self.out, "{}", format_general(value, self.precision))
            .and_then(|()| self.out.flush())
            .map_err(CalcError::Write)?;
        self.ctx.set_last_result(value);
        Ok(Flow::Continue)
    }

    /// Execute every line of `input` until it is exhausted or `exit` runs.
    ///
    /// # Errors
    /// Stops at the first failing line and returns its error. Read failures
    /// are reported as [`CalcError::Read`].
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<Flow, CalcError> {
        for (number, line) in input.lines().enumerate() {
            let line = line.map_err(CalcError::Read)?;
            debug!("line {}: {line:?}", number + 1);
            match self.execute_line(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(Flow::Exit),
                Err(e) => {
                    warn!("line {} failed: {e}", number + 1);
                    return Err(e);
                }
            }
        }
        Ok(Flow::Continue)
    }
}
