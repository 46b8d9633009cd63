//! Prefix operators.

use crate::operators::UNARY_OPERATORS;

use super::Evaluator;

impl Evaluator<'_> {
    /// Apply the first prefix operator whose symbol starts `src`.
    ///
    /// There is no backtracking: if the operand after the first matching
    /// symbol does not evaluate, the whole recogniser fails even when a later
    /// symbol would also have matched.
    pub(super) fn read_unary(&self, src: &str) -> Option<f64> {
        let (op, rest) = UNARY_OPERATORS
            .iter()
            .find_map(|op| src.strip_prefix(op.symbol).map(|rest| (op, rest)))?;
        let operand = self.evaluate_trimmed(rest.trim())?;
        Some((op.apply)(operand))
    }
}
