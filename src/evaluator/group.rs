//! Parenthesised sub-expressions.

use super::Evaluator;

impl Evaluator<'_> {
    // Only the outermost characters are checked. `(1)+(2)` passes this test,
    // fails on the interior `1)+(2` and is then picked up by the binary scan.
    pub(super) fn read_group(&self, src: &str) -> Option<f64> {
        let inner = src.strip_prefix('(')?.strip_suffix(')')?;
        self.evaluate_trimmed(inner.trim())
    }
}
