//! Criteria text parser.
//!
//! A criteria text is a list of clauses joined by `||`. Each clause is either
//! a numeric comparison, written with a leading operator (`>=3`, `< 10`) or a
//! trailing shorthand (`3+`, `5-`), or plain text matched as a substring.
//!
//! ```text
//! criteria := clause ( ws* "||" ws* clause )*
//! clause   := prefix | suffix | text
//! prefix   := ("<" | "<=" | ">" | ">=") ws* digit+ any*
//! suffix   := digit+ ws* ("+" | "-") any*
//! ```
//!
//! The whole text is trimmed and lowercased first. Parsing never fails:
//! anything that is not a numeric clause is a contains clause.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::condition::Condition;
use crate::op::Op;

static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\|\|\s*").expect("valid regex"));

static PREFIX_NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<op>[<>]=?)\s*(?P<criteria>[0-9]+)").expect("valid regex"));

static SUFFIX_NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<criteria>[0-9]+)\s*(?P<op>[+-])").expect("valid regex"));

/// Parses a criteria text into its ordered conditions.
///
/// # Example
///
/// ```
/// use cardsift_criteria::{parse, Condition, Op};
///
/// let conditions = parse(">= 3 || 5- || Dragon");
/// assert_eq!(
///     conditions,
///     vec![
///         Condition::numeric(Op::Gte, "3"),
///         Condition::numeric(Op::AtMost, "5"),
///         Condition::contains("dragon"),
///     ]
/// );
/// ```
pub fn parse(text: &str) -> Vec<Condition> {
    let normalized = text.trim().to_lowercase();
    let conditions: Vec<Condition> = SEPARATOR.split(&normalized).map(parse_clause).collect();
    tracing::debug!(text, ?conditions, "parsed criteria");
    conditions
}

/// Parses one clause. Prefix form takes precedence over suffix form.
fn parse_clause(clause: &str) -> Condition {
    numeric_match(&PREFIX_NUMERIC, clause)
        .or_else(|| numeric_match(&SUFFIX_NUMERIC, clause))
        .unwrap_or_else(|| Condition::contains(clause))
}

fn numeric_match(pattern: &Regex, clause: &str) -> Option<Condition> {
    let caps = pattern.captures(clause)?;
    let op = Op::from_symbol(caps.name("op")?.as_str())?;
    let criteria = caps.name("criteria")?.as_str();
    Some(Condition::numeric(op, criteria))
}
