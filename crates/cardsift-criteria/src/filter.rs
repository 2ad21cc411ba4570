//! Filter predicate builder.
//!
//! A [`FilterBuilder`] binds a field name and a criteria text into a
//! [`FilterEntry`]: an identifier plus a compiled [`Predicate`].

use std::collections::HashMap;
use std::fmt;

use crate::condition::Condition;
use crate::matcher::{candidates, matches};
use crate::parser::parse;
use crate::record::Searchable;
use crate::value::FieldType;

/// A compiled filter over one field.
///
/// Conditions are parsed once at build time; evaluation never mutates the
/// predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    field: String,
    field_type: FieldType,
    conditions: Vec<Condition>,
    negate: bool,
}

impl Predicate {
    /// Compiles a predicate from raw criteria text.
    pub fn new(field: impl Into<String>, text: &str, field_type: FieldType, negate: bool) -> Self {
        Predicate {
            field: field.into(),
            field_type,
            conditions: parse(text),
            negate,
        }
    }

    /// Tests a record.
    ///
    /// A record without a value for the field never matches; negation is
    /// applied to that result like any other.
    pub fn test<R: Searchable>(&self, record: &R) -> bool {
        let found = match candidates(record, &self.field, self.field_type) {
            Some(values) => matches(&self.conditions, values),
            None => false,
        };
        found != self.negate
    }

    /// Returns the field this predicate reads.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the field type used for candidate gathering.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Returns the parsed conditions.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Returns `true` if the predicate is negated.
    pub fn is_negated(&self) -> bool {
        self.negate
    }
}

/// A named, compiled filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterEntry {
    id: String,
    key: String,
    predicate: Predicate,
}

impl FilterEntry {
    /// Returns the display identifier, `"<field>: [NOT ]<text>"`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the deduplication key (the identifier, lowercased).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the compiled predicate.
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Tests a record.
    pub fn test<R: Searchable>(&self, record: &R) -> bool {
        self.predicate.test(record)
    }
}

impl fmt::Display for FilterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Builds the display identifier of a filter.
pub fn filter_id(field: &str, text: &str, negate: bool) -> String {
    if negate {
        format!("{field}: NOT {text}")
    } else {
        format!("{field}: {text}")
    }
}

/// Derives the deduplication key of an identifier.
pub fn filter_key(id: &str) -> String {
    id.to_lowercase()
}

/// Per-field maps from button ids to filter text.
///
/// Fields without a map use the button id itself as the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shortcuts {
    maps: HashMap<String, HashMap<String, String>>,
}

impl Shortcuts {
    /// Creates an empty set of shortcut maps.
    pub fn new() -> Self {
        Shortcuts::default()
    }

    /// Adds a mapping from `id` to `text` for `field`.
    pub fn with(
        mut self,
        field: impl Into<String>,
        id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.maps
            .entry(field.into())
            .or_default()
            .insert(id.into(), text.into());
        self
    }

    /// Resolves a button id to filter text.
    ///
    /// Returns `None` when the field has a map that does not know `id`.
    pub fn resolve(&self, field: &str, id: &str) -> Option<String> {
        match self.maps.get(field) {
            Some(map) => map.get(id).cloned(),
            None => Some(id.to_string()),
        }
    }
}

impl From<HashMap<String, HashMap<String, String>>> for Shortcuts {
    fn from(maps: HashMap<String, HashMap<String, String>>) -> Self {
        Shortcuts { maps }
    }
}

/// Builder for filter entries.
///
/// # Example
///
/// ```
/// use cardsift_criteria::{FilterBuilder, Record};
///
/// let entry = FilterBuilder::new("cost")
///     .text(">=3")
///     .negate(true)
///     .build(&[])
///     .unwrap();
///
/// assert_eq!(entry.id(), "cost: NOT >=3");
/// assert!(entry.test(&Record::new().with_field("cost", 2i64)));
/// assert!(!entry.test(&Record::new().with_field("cost", 5i64)));
///
/// // same filter again is a duplicate
/// assert!(FilterBuilder::new("cost").text(">=3").negate(true).build(&[entry]).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct FilterBuilder {
    field: String,
    text: Option<String>,
    negate: bool,
    field_type: FieldType,
}

impl FilterBuilder {
    /// Starts a filter on `field`, typed as a string field.
    pub fn new(field: impl Into<String>) -> Self {
        FilterBuilder {
            field: field.into(),
            text: None,
            negate: false,
            field_type: FieldType::String,
        }
    }

    /// Starts a filter from a shortcut button.
    ///
    /// The id is resolved through `shortcuts`; an unknown id leaves the
    /// builder without text, so [`build`](Self::build) yields nothing.
    pub fn shortcut(field: impl Into<String>, id: &str, shortcuts: &Shortcuts) -> Self {
        let field = field.into();
        let text = shortcuts.resolve(&field, id);
        FilterBuilder {
            text,
            ..FilterBuilder::new(field)
        }
    }

    /// Sets the criteria text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets whether the filter is negated.
    pub fn negate(mut self, negate: bool) -> Self {
        self.negate = negate;
        self
    }

    /// Sets the field type used for candidate gathering.
    pub fn field_type(mut self, field_type: FieldType) -> Self {
        self.field_type = field_type;
        self
    }

    /// Returns the identifier the built entry would carry, if there is text.
    pub fn id(&self) -> Option<String> {
        self.text
            .as_deref()
            .map(|text| filter_id(&self.field, text, self.negate))
    }

    /// Builds the entry.
    ///
    /// Returns `None` if there is no text or if `existing` already holds an
    /// entry with the same key.
    pub fn build(&self, existing: &[FilterEntry]) -> Option<FilterEntry> {
        let Some(text) = self.text.as_deref() else {
            tracing::debug!(field = %self.field, "no usable filter text");
            return None;
        };

        let id = filter_id(&self.field, text, self.negate);
        let key = filter_key(&id);
        if existing.iter().any(|entry| entry.key == key) {
            tracing::debug!(%id, "filter already applied");
            return None;
        }

        let predicate = Predicate::new(self.field.clone(), text, self.field_type, self.negate);
        tracing::debug!(%id, conditions = ?predicate.conditions, "built filter");
        Some(FilterEntry { id, key, predicate })
    }
}
