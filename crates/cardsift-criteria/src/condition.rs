//! Parsed criteria clauses.
//!
//! A [`Condition`] is one OR-branch of a criteria text: either a numeric
//! comparison or a case-insensitive substring test.

use crate::op::Op;
use crate::value::{Number, Scalar};

/// A single parsed clause.
///
/// # Example
///
/// ```
/// use cardsift_criteria::{Condition, Op, Scalar};
///
/// let cond = Condition::numeric(Op::Gte, "3");
/// assert!(cond.matches(&Scalar::from("Cost: 5")));
///
/// let cond = Condition::contains("drag");
/// assert!(cond.matches(&Scalar::from("Dragon Knight")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Numeric comparison against the digits of the candidate.
    Numeric {
        /// The comparison operator.
        op: Op,
        /// The digit run as written in the clause.
        criteria: String,
    },
    /// Substring test on the candidate's canonical text.
    Contains {
        /// The clause text.
        criteria: String,
    },
}

impl Condition {
    /// Creates a numeric condition.
    pub fn numeric(op: Op, criteria: impl Into<String>) -> Self {
        Condition::Numeric {
            op,
            criteria: criteria.into(),
        }
    }

    /// Creates a contains condition.
    pub fn contains(criteria: impl Into<String>) -> Self {
        Condition::Contains {
            criteria: criteria.into(),
        }
    }

    /// Returns the criteria token.
    pub fn criteria(&self) -> &str {
        match self {
            Condition::Numeric { criteria, .. } | Condition::Contains { criteria } => criteria,
        }
    }

    /// Returns the operator of a numeric condition.
    pub fn op(&self) -> Option<Op> {
        match self {
            Condition::Numeric { op, .. } => Some(*op),
            Condition::Contains { .. } => None,
        }
    }

    /// Returns `true` if this is a numeric condition.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Condition::Numeric { .. })
    }

    /// Evaluates this condition against one candidate value.
    pub fn matches(&self, candidate: &Scalar) -> bool {
        match self {
            Condition::Numeric { op, criteria } => {
                let value = Number::from_digits(&candidate.canonical());
                match value.compare(Number::from_digits(criteria)) {
                    Some(ordering) => op.eval_ordering(ordering),
                    None => false,
                }
            }
            Condition::Contains { criteria } => candidate
                .canonical()
                .to_lowercase()
                .contains(&criteria.to_lowercase()),
        }
    }
}
