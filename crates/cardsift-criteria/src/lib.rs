//! cardsift-criteria - filter-criteria language and matching engine for card collections.
//!
//! A criteria text is compiled into a predicate over one record field. The
//! engine supports:
//!
//! - OR-lists: clauses joined by `||`, any clause may match
//! - Numeric comparisons: `<`, `<=`, `>`, `>=` before the number, or the
//!   `N+` / `N-` shorthands after it
//! - Case-insensitive substring matching for everything else
//! - A secondary sub-record (the card back) searched as a fallback
//! - Negation of a whole filter
//!
//! # Quick Start
//!
//! ```rust
//! use cardsift_criteria::{load_records, FilterBuilder, FilterSet, DEFAULT_SECONDARY_FIELD};
//!
//! let data = r#"[
//!     {"name": "Son Goku", "cost": "Cost: 3", "color": ["Red"]},
//!     {"name": "Vegeta", "cost": "Cost: 5", "color": ["Blue"],
//!      "cardBack": {"name": "Super Saiyan Vegeta"}},
//!     {"name": "Piccolo", "cost": "Cost: 2", "color": ["Green"]}
//! ]"#;
//! let cards = load_records(data.as_bytes(), DEFAULT_SECONDARY_FIELD).unwrap();
//!
//! let mut filters = FilterSet::new();
//! filters.apply(&FilterBuilder::new("cost").text(">= 3"));
//! filters.apply(&FilterBuilder::new("name").text("saiyan || goku"));
//!
//! assert_eq!(filters.count(&cards), 2);
//! ```
//!
//! # Criteria Semantics
//!
//! ```text
//! filter matches record = (some clause matches some candidate value) XOR negated
//! filter set matches    = every filter matches
//! ```
//!
//! | Clause | Condition | Matches when |
//! |--------|-----------|--------------|
//! | `>=3`, `< 10` | numeric | the digits of a candidate compare true |
//! | `3+`, `5-` | numeric | at least / at most the number |
//! | anything else | contains | a candidate contains the text, ignoring case |
//!
//! A record without a value for the field (absent or null) never matches.

mod condition;
mod config;
mod error;
mod filter;
mod filter_set;
mod matcher;
mod op;
mod parser;
mod record;
mod value;

// Re-export public API
pub use condition::Condition;
pub use config::Config;
pub use error::{CriteriaError, Result};
pub use filter::{filter_id, filter_key, FilterBuilder, FilterEntry, Predicate, Shortcuts};
pub use filter_set::FilterSet;
pub use matcher::{candidates, matches};
pub use op::Op;
pub use parser::parse;
pub use record::{
    describe_fields, load_records, FieldDescriptor, Record, Searchable, DEFAULT_SECONDARY_FIELD,
};
pub use value::{FieldType, FieldValue, Number, Scalar};
