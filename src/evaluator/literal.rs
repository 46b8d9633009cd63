//! Numeric literal recognition.
//!
//! Literals never carry a sign: `-2` is the unary minus applied to `2`, which
//! keeps sign handling in one place. Textual specials such as `inf` and `nan`
//! are not literals either.

use std::str::FromStr;

use super::Evaluator;

impl Evaluator<'_> {
    #[expect(
        clippy::unused_self,
        reason = "recognisers share a method shape for the chain"
    )]
    // Overflow to infinity is rejected; underflow to zero is not.
    pub(super) fn read_literal(&self, src: &str) -> Option<f64> {
        parse_unsigned(src).filter(|value: &f64| value.is_finite())
    }
}

/// Parse `src` as a memory slot index.
///
/// Accepts only a complete, unsigned decimal integer with no surrounding
/// whitespace. This is the parser behind `%<n>` references and the `set`
/// command's slot argument.
///
/// # Examples
///
/// ```
/// use linecalc::evaluate_integer;
///
/// assert_eq!(evaluate_integer("7"), Some(7));
/// assert_eq!(evaluate_integer("+7"), None);
/// assert_eq!(evaluate_integer("7.0"), None);
/// ```
#[must_use]
pub fn evaluate_integer(src: &str) -> Option<usize> {
    parse_unsigned(src)
}

fn parse_unsigned<T: FromStr>(src: &str) -> Option<T> {
    let first = src.chars().next()?;
    if !(first.is_ascii_digit() || first == '.') {
        return None;
    }
    src.parse().ok()
}
