//! Evaluator state and the recogniser chain.

use log::trace;

use crate::Context;

/// Evaluates expressions against a borrowed [`Context`].
///
/// The evaluator never writes to the context. Updating memory slots and the
/// last-result register is left to the caller.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    pub(super) ctx: &'a Context,
}

/// Evaluate `src` as an arithmetic expression.
///
/// Leading and trailing whitespace is ignored. Returns `None` when no
/// recogniser accepts the text.
///
/// # Examples
///
/// ```
/// use linecalc::{Context, evaluate};
///
/// let ctx = Context::new();
/// assert_eq!(evaluate(&ctx, " 2 + 3 * 4 "), Some(14.0));
/// assert_eq!(evaluate(&ctx, "2 +"), None);
/// ```
#[must_use]
pub fn evaluate(ctx: &Context, src: &str) -> Option<f64> {
    Evaluator::new(ctx).evaluate(src)
}

impl<'a> Evaluator<'a> {
    #[must_use]
    pub fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }

    /// Trim `src` and run the recogniser chain over it.
    #[must_use]
    pub fn evaluate(&self, src: &str) -> Option<f64> {
        self.evaluate_trimmed(src.trim())
    }

    // Order matters: literals are tried before the binary scan so a numeral
    // is never split, and the binary scan runs before unary prefixes so
    // `1-2` is not read as `1` followed by `-2`.
    pub(super) fn evaluate_trimmed(&self, src: &str) -> Option<f64> {
        let value = self
            .read_memory(src)
            .or_else(|| self.read_literal(src))
            .or_else(|| self.read_group(src))
            .or_else(|| self.read_binary(src))
            .or_else(|| self.read_unary(src))
            .or_else(|| self.read_named(src));
        if let Some(v) = value {
            trace!("evaluated {src:?} to {v}");
        }
        value
    }
}
