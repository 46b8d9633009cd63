//! `%` and `%<n>` memory references.

use super::{Evaluator, evaluate_integer};

impl Evaluator<'_> {
    /// Bare `%` reads the last result; `%<n>` reads slot `n`.
    ///
    /// The index must be a plain unsigned integer directly after the `%`.
    /// Indices past the last slot are rejected.
    pub(super) fn read_memory(&self, src: &str) -> Option<f64> {
        let index = src.strip_prefix('%')?;
        if index.is_empty() {
            return Some(self.ctx.last_result());
        }
        self.ctx.slot(evaluate_integer(index)?)
    }
}
