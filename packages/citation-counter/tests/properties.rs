use citation_counter::{aggregate, pipeline::rank, AggregateEntry, CandidateRecord};
use proptest::prelude::*;

fn documents() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
    prop::collection::vec(
        (
            "doc[0-9]{1,2}",
            prop::collection::vec("[a-d]{1,2}", 0..8),
        ),
        0..6,
    )
}

fn build(docs: &[(String, Vec<String>)]) -> citation_counter::AggregateTable {
    aggregate(docs.iter().map(|(id, items)| {
        (
            id.as_str(),
            items.iter().map(|s| CandidateRecord::bullet(s.as_str())).collect(),
        )
    }))
}

proptest! {
    #[test]
    fn aggregation_is_deterministic(docs in documents()) {
        prop_assert_eq!(build(&docs), build(&docs));
    }

    #[test]
    fn counts_do_not_depend_on_document_order(docs in documents()) {
        let forward = build(&docs);
        let reversed: Vec<_> = docs.iter().rev().cloned().collect();
        let backward = build(&reversed);

        prop_assert_eq!(forward.len(), backward.len());
        for entry in forward.entries() {
            let other = backward.get(&entry.key).unwrap();
            prop_assert_eq!(entry.count, other.count);
        }
    }

    #[test]
    fn total_instances_equals_record_count(docs in documents()) {
        let table = build(&docs);
        let records: usize = docs.iter().map(|(_, items)| items.len()).sum();
        prop_assert_eq!(table.total_instances(), records);
        for entry in table.entries() {
            prop_assert_eq!(entry.count, entry.sources.len());
        }
    }

    #[test]
    fn ranking_is_sorted_and_stable(counts in prop::collection::vec(1usize..5, 0..20)) {
        let entries: Vec<AggregateEntry> = counts
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                AggregateEntry::new(CandidateRecord::bullet(format!("k{}", i)), "d").with_count(c)
            })
            .collect();
        let position = |key: &str| entries.iter().position(|e| e.key == key).unwrap();

        let ranked = rank(&entries);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
            if pair[0].count == pair[1].count {
                prop_assert!(position(&pair[0].key) < position(&pair[1].key));
            }
        }
    }
}
