//! Infix operators with precedence and associativity.
//!
//! Tiers are visited from lowest to highest precedence, so the operator that
//! binds loosest becomes the outermost split. Inside a tier the scan
//! direction encodes associativity: left-associative tiers try the rightmost
//! occurrence first, right-associative tiers the leftmost. The first split
//! whose two sides both evaluate wins.

use crate::operators::{Assoc, BinaryOperator, PRECEDENCE_TIERS, PrecedenceTier};

use super::Evaluator;

impl Evaluator<'_> {
    pub(super) fn read_binary(&self, src: &str) -> Option<f64> {
        PRECEDENCE_TIERS
            .iter()
            .find_map(|tier| self.read_tier(src, tier))
    }

    fn read_tier(&self, src: &str, tier: &PrecedenceTier) -> Option<f64> {
        match tier.assoc {
            Assoc::LeftAssoc => (1..=src.len()).rev().find_map(|end| {
                tier.operators.iter().find_map(|op| {
                    let start = end.checked_sub(op.symbol.len())?;
                    self.split_at(src, op, start)
                })
            }),
            Assoc::RightAssoc => (0..src.len()).find_map(|start| {
                tier.operators
                    .iter()
                    .find_map(|op| self.split_at(src, op, start))
            }),
        }
    }

    /// Try `op` at byte offset `start`, evaluating both sides on a match.
    ///
    /// Offsets that do not fall on a character boundary simply fail to match.
    fn split_at(&self, src: &str, op: &BinaryOperator, start: usize) -> Option<f64> {
        let end = start + op.symbol.len();
        if src.get(start..end)? != op.symbol {
            return None;
        }
        let lhs = self.evaluate_trimmed(src.get(..start)?.trim())?;
        let rhs = self.evaluate_trimmed(src.get(end..)?.trim())?;
        Some((op.apply)(lhs, rhs))
    }
}
