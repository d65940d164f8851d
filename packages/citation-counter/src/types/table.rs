//! Aggregate table - deduplicated records with counts and provenance.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::record::CandidateRecord;

/// A deduplicated record with its tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateEntry {
    /// Deduplication key (see [`CandidateRecord::key`])
    pub key: String,

    /// First-seen record for this key
    pub record: CandidateRecord,

    /// Number of occurrences across all documents
    pub count: usize,

    /// Identifier of the document for every occurrence, in merge order.
    ///
    /// A document appears once per occurrence, so repeats within one
    /// document show up as duplicates here.
    pub sources: Vec<String>,
}

impl AggregateEntry {
    /// Create an entry for a first occurrence.
    pub fn new(record: CandidateRecord, source: impl Into<String>) -> Self {
        Self {
            key: record.key(),
            record,
            count: 1,
            sources: vec![source.into()],
        }
    }

    /// Set an explicit count (mostly useful for building report fixtures).
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Record another occurrence from `source`.
    pub fn add_occurrence(&mut self, source: impl Into<String>) {
        self.count += 1;
        self.sources.push(source.into());
    }

    /// Whether the key was seen more than once.
    pub fn is_repeated(&self) -> bool {
        self.count > 1
    }
}

/// Mapping from key to entry, remembering first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateTable {
    entries: IndexMap<String, AggregateEntry>,
}

impl AggregateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `record` from `source`.
    ///
    /// Returns `true` when the key was new. An existing entry keeps its
    /// first-seen record even if this one differs in non-key fields.
    pub fn observe(&mut self, record: CandidateRecord, source: &str) -> bool {
        let key = record.key();
        match self.entries.get_mut(&key) {
            Some(entry) => {
                entry.add_occurrence(source);
                false
            }
            None => {
                self.entries.insert(key, AggregateEntry::new(record, source));
                true
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&AggregateEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of counts over all entries.
    pub fn total_instances(&self) -> usize {
        self.entries.values().map(|e| e.count).sum()
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> impl Iterator<Item = &AggregateEntry> + '_ {
        self.entries.values()
    }

    /// Consume the table, yielding entries in first-seen order.
    pub fn into_entries(self) -> Vec<AggregateEntry> {
        self.entries.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observe_inserts_then_increments() {
        let mut table = AggregateTable::new();

        assert!(table.observe(CandidateRecord::bullet("x"), "doc1"));
        assert!(!table.observe(CandidateRecord::bullet("x"), "doc2"));

        let entry = table.get("x").unwrap();
        assert_eq!(entry.count, 2);
        assert_eq!(entry.sources, vec!["doc1", "doc2"]);
        assert!(entry.is_repeated());
    }

    #[test]
    fn test_observe_keeps_first_seen_record() {
        let mut table = AggregateTable::new();
        table.observe(CandidateRecord::citation("Smith", "2020", "A Study"), "doc1");
        table.observe(CandidateRecord::citation("Smith", "2020", "Another"), "doc2");

        let entry = table.get("Smith, 2020").unwrap();
        assert_eq!(entry.record.title(), Some("A Study"));
        assert_eq!(entry.count, 2);
    }

    #[test]
    fn test_entries_follow_first_seen_order() {
        let mut table = AggregateTable::new();
        table.observe(CandidateRecord::bullet("b"), "doc1");
        table.observe(CandidateRecord::bullet("a"), "doc1");
        table.observe(CandidateRecord::bullet("b"), "doc2");

        let keys: Vec<_> = table.entries().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(table.total_instances(), 3);
    }
}
