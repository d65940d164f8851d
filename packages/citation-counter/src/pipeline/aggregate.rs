//! Aggregation - merge per-document records into one frequency table.

use tracing::debug;

use crate::types::{record::CandidateRecord, table::AggregateTable};

/// Result of merging one document's records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Records consumed
    pub records: usize,

    /// Records whose key was not in the table yet
    pub new_keys: usize,
}

/// Merge `records` from `document_identifier` into `table`, in order.
///
/// Existing keys get their count bumped and the identifier appended to
/// their sources (repeats within one document append repeatedly). New
/// keys are inserted with count 1.
pub fn merge<I>(table: &mut AggregateTable, document_identifier: &str, records: I) -> MergeStats
where
    I: IntoIterator<Item = CandidateRecord>,
{
    let mut stats = MergeStats::default();

    for record in records {
        stats.records += 1;
        if table.observe(record, document_identifier) {
            stats.new_keys += 1;
        }
    }

    debug!(
        document = document_identifier,
        records = stats.records,
        new_keys = stats.new_keys,
        table_len = table.len(),
        "merged records"
    );

    stats
}

/// Build a fresh table from `(document identifier, records)` pairs, in the given order.
pub fn aggregate<'a, I>(documents: I) -> AggregateTable
where
    I: IntoIterator<Item = (&'a str, Vec<CandidateRecord>)>,
{
    let mut table = AggregateTable::new();
    for (identifier, records) in documents {
        merge(&mut table, identifier, records);
    }
    table
}
