//! Operator and constant tables for the evaluator.
//!
//! All operator data lives here so precedence, associativity and symbol
//! spelling can be adjusted in one place. The tables are plain data: the
//! recognisers in [`crate::evaluator`] walk them in declaration order.

#![expect(
    clippy::float_arithmetic,
    reason = "operator functions implement calculator arithmetic"
)]

use phf::phf_map;

/// Associativity of a precedence tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    /// `a - b - c` groups as `(a - b) - c`.
    LeftAssoc,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    RightAssoc,
}

/// A prefix operator such as `-` or `sin`.
#[derive(Debug, Clone, Copy)]
pub struct UnaryOperator {
    pub symbol: &'static str,
    pub apply: fn(f64) -> f64,
}

/// An infix operator such as `+` or `^`.
#[derive(Debug, Clone, Copy)]
pub struct BinaryOperator {
    pub symbol: &'static str,
    pub apply: fn(f64, f64) -> f64,
}

/// Operators sharing one precedence level and associativity.
#[derive(Debug, Clone, Copy)]
pub struct PrecedenceTier {
    pub operators: &'static [BinaryOperator],
    pub assoc: Assoc,
}

/// Zero-argument producer behind a named constant.
pub type Constant = fn() -> f64;

/// Prefix operators in match order.
///
/// Matching is first-prefix-wins in this order, so a symbol that is a prefix
/// of a later one shadows it.
pub const UNARY_OPERATORS: &[UnaryOperator] = &[
    UnaryOperator {
        symbol: "+",
        apply: |x| x,
    },
    UnaryOperator {
        symbol: "-",
        apply: |x| -x,
    },
    UnaryOperator {
        symbol: "sin",
        apply: f64::sin,
    },
    UnaryOperator {
        symbol: "cos",
        apply: f64::cos,
    },
    UnaryOperator {
        symbol: "tan",
        apply: f64::tan,
    },
    UnaryOperator {
        symbol: "log",
        apply: f64::ln,
    },
    UnaryOperator {
        symbol: "exp",
        apply: f64::exp,
    },
    UnaryOperator {
        symbol: "abs",
        apply: f64::abs,
    },
];

/// Binary operator tiers, lowest precedence first.
pub const PRECEDENCE_TIERS: &[PrecedenceTier] = &[
    PrecedenceTier {
        operators: &[
            BinaryOperator {
                symbol: "+",
                apply: |x, y| x + y,
            },
            BinaryOperator {
                symbol: "-",
                apply: |x, y| x - y,
            },
        ],
        assoc: Assoc::LeftAssoc,
    },
    PrecedenceTier {
        operators: &[
            BinaryOperator {
                symbol: "*",
                apply: |x, y| x * y,
            },
            BinaryOperator {
                symbol: "/",
                apply: |x, y| x / y,
            },
        ],
        assoc: Assoc::LeftAssoc,
    },
    PrecedenceTier {
        operators: &[BinaryOperator {
            symbol: "^",
            apply: f64::powf,
        }],
        assoc: Assoc::RightAssoc,
    },
];

static CONSTANTS: phf::Map<&'static str, Constant> = phf_map! {
    "pi" => (|| std::f64::consts::PI) as Constant,
    "e" => (|| std::f64::consts::E) as Constant,
};

/// Look up a named constant by exact, case-sensitive name.
#[must_use]
pub fn constant(name: &str) -> Option<f64> {
    CONSTANTS.get(name).map(|produce| produce())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn tiers_are_non_empty() {
        assert!(
            PRECEDENCE_TIERS
                .iter()
                .all(|tier| !tier.operators.is_empty())
        );
    }

    #[rstest]
    fn power_is_the_only_right_associative_tier() {
        let right: Vec<_> = PRECEDENCE_TIERS
            .iter()
            .filter(|tier| tier.assoc == Assoc::RightAssoc)
            .flat_map(|tier| tier.operators.iter().map(|op| op.symbol))
            .collect();
        assert_eq!(right, vec!["^"]);
    }

    #[rstest]
    #[case("pi", Some(std::f64::consts::PI))]
    #[case("e", Some(std::f64::consts::E))]
    #[case("PI", None)]
    #[case("p", None)]
    #[case("pie", None)]
    fn constants_match_exactly(#[case] name: &str, #[case] expected: Option<f64>) {
        assert_eq!(constant(name), expected);
    }
}
