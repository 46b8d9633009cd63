//! Recursive expression evaluator.
//!
//! Provides [`evaluate`], which turns an arithmetic expression into an `f64`
//! without tokenising it first. Each submodule contributes one recogniser to
//! the [`Evaluator`]: [`memory`] handles `%` references, [`literal`] plain
//! numbers, [`group`] a wrapping pair of parentheses, [`binary`] infix
//! operators, [`unary`] prefix operators and [`named`] constants. The
//! recognisers are chained in [`chain`], which is where the priority order
//! lives.
//!
//! Every recogniser answers with `Option<f64>`. A failed parse carries no
//! reason; callers only learn that the text is not an expression.

mod binary;
mod chain;
mod group;
mod literal;
mod memory;
mod named;
mod unary;

pub use chain::{Evaluator, evaluate};
pub use literal::evaluate_integer;
