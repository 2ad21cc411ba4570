//! The applied-filter collection.
//!
//! A [`FilterSet`] keeps filters in the order they were added. A record is
//! kept when every filter accepts it; an empty set keeps everything.

use crate::filter::{filter_key, FilterBuilder, FilterEntry};
use crate::record::Searchable;

/// Ordered, deduplicated collection of applied filters.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    entries: Vec<FilterEntry>,
}

impl FilterSet {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        FilterSet::default()
    }

    /// Adds an entry.
    ///
    /// Returns `false` and leaves the set unchanged if an entry with the same
    /// key is already present.
    pub fn add(&mut self, entry: FilterEntry) -> bool {
        if self.contains(entry.id()) {
            tracing::debug!(id = entry.id(), "filter already applied");
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Builds a filter against the current entries and adds it.
    ///
    /// Returns the new entry, or `None` if the builder had no text or the
    /// filter is already applied.
    pub fn apply(&mut self, builder: &FilterBuilder) -> Option<&FilterEntry> {
        let entry = builder.build(&self.entries)?;
        self.entries.push(entry);
        self.entries.last()
    }

    /// Removes the entry with the given identifier (compared case-insensitively).
    pub fn remove(&mut self, id: &str) -> Option<FilterEntry> {
        let key = filter_key(id);
        let index = self.entries.iter().position(|entry| entry.key() == key)?;
        Some(self.entries.remove(index))
    }

    /// Returns `true` if an entry with the given identifier is present.
    pub fn contains(&self, id: &str) -> bool {
        let key = filter_key(id);
        self.entries.iter().any(|entry| entry.key() == key)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the entries in insertion order.
    pub fn entries(&self) -> &[FilterEntry] {
        &self.entries
    }

    /// Iterates the entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, FilterEntry> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no filter is applied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tests a single record against every filter.
    pub fn matches<R: Searchable>(&self, record: &R) -> bool {
        self.entries.iter().all(|entry| entry.test(record))
    }

    /// Returns references to the matching records, in input order.
    pub fn filter<'a, R: Searchable>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|record| self.matches(*record)).collect()
    }

    /// Filters a vector in place, keeping only matching records.
    pub fn filter_mut<R: Searchable>(&self, records: &mut Vec<R>) {
        records.retain(|record| self.matches(record));
    }

    /// Counts the matching records.
    pub fn count<R: Searchable>(&self, records: &[R]) -> usize {
        records.iter().filter(|record| self.matches(*record)).count()
    }

    /// Finds the first matching record.
    pub fn find<'a, R: Searchable>(&self, records: &'a [R]) -> Option<&'a R> {
        records.iter().find(|record| self.matches(*record))
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a FilterEntry;
    type IntoIter = std::slice::Iter<'a, FilterEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
