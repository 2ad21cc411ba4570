//! Comparison operators for numeric clauses.
//!
//! The [`Op`] enum covers the prefix operators (`<`, `<=`, `>`, `>=`) and the
//! suffix shorthands written after the number (`3+`, `5-`).

use std::cmp::Ordering;

/// Comparison operator of a numeric condition.
///
/// The suffix forms are aliases:
/// - `AtMost` (`5-`) behaves as `Lte`
/// - `AtLeast` (`3+`) behaves as `Gte`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Less than (`<`).
    Lt,
    /// Less than or equal (`<=`).
    Lte,
    /// Greater than (`>`).
    Gt,
    /// Greater than or equal (`>=`).
    Gte,

    // Suffix aliases
    /// At most (`N-`), alias for `Lte`.
    AtMost,
    /// At least (`N+`), alias for `Gte`.
    AtLeast,
}

impl Op {
    /// Parses an operator from its textual form.
    ///
    /// Returns `None` for anything that is not one of the six symbols.
    pub fn from_symbol(symbol: &str) -> Option<Op> {
        match symbol {
            "<" => Some(Op::Lt),
            "<=" => Some(Op::Lte),
            ">" => Some(Op::Gt),
            ">=" => Some(Op::Gte),
            "-" => Some(Op::AtMost),
            "+" => Some(Op::AtLeast),
            _ => None,
        }
    }

    /// Returns `true` for the operators written after the number.
    pub fn is_suffix(self) -> bool {
        matches!(self, Op::AtMost | Op::AtLeast)
    }

    /// Normalizes suffix aliases to their canonical form.
    ///
    /// - `AtMost` -> `Lte`
    /// - `AtLeast` -> `Gte`
    /// - Others unchanged
    pub fn normalize(self) -> Op {
        match self {
            Op::AtMost => Op::Lte,
            Op::AtLeast => Op::Gte,
            other => other,
        }
    }

    /// Evaluates the operator given the ordering of candidate against criteria.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self.normalize() {
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            // normalize() never yields the aliases
            Op::AtMost | Op::AtLeast => false,
        }
    }

    /// Returns the symbol this operator is written with.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Lt => "<",
            Op::Lte => "<=",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::AtMost => "-",
            Op::AtLeast => "+",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
