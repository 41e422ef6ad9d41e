//! Aggregation tests: flatten order, dedup, idempotence.

use mentions_core::aggregate;
use mentions_model::MentionRecord;
use proptest::collection::vec as vec_of;
use proptest::prelude::{Just, Strategy, prop_oneof, proptest};

fn record(drug: &str, title: &str, ref_type: &str, date: Option<&str>) -> MentionRecord {
    MentionRecord {
        drug: drug.to_string(),
        title: title.to_string(),
        ref_type: ref_type.to_string(),
        date_mention: date.map(ToString::to_string),
    }
}

#[test]
fn overlapping_lists_deduplicate_keeping_first_occurrence() {
    let first = vec![
        record("1", "A", "clinical_publication", None),
        record("2", "B", "clinical_publication", None),
    ];
    let second = vec![
        record("2", "B", "clinical_publication", None),
        record("3", "C", "clinical_publication", None),
    ];
    let merged = aggregate(vec![first, second]);
    let drugs: Vec<&str> = merged.iter().map(|r| r.drug.as_str()).collect();
    assert_eq!(drugs, vec!["1", "2", "3"]);
}

#[test]
fn order_of_first_occurrence_is_preserved() {
    let first = vec![
        record("aspirin", "t1", "pubmed_publication", Some("2020-01-01")),
        record("aspirin", "j1", "journal", Some("2020-01-01")),
    ];
    let second = vec![
        record("aspirin", "t1", "pubmed_publication", Some("2020-01-01")),
        record("betamethasone", "t2", "clinical_publication", None),
    ];
    let merged = aggregate(vec![first.clone(), second]);
    assert_eq!(merged[0], first[0]);
    assert_eq!(merged[1], first[1]);
    assert_eq!(merged[2].drug, "betamethasone");
    assert_eq!(merged.len(), 3);
}

#[test]
fn records_differing_only_in_date_are_distinct() {
    let list = vec![
        record("aspirin", "t", "journal", Some("2020-01-01")),
        record("aspirin", "t", "journal", Some("2020-01-02")),
        record("aspirin", "t", "journal", None),
    ];
    assert_eq!(aggregate(vec![list]).len(), 3);
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(aggregate(Vec::new()).is_empty());
    assert!(aggregate(vec![Vec::new(), Vec::new()]).is_empty());
}

#[test]
fn aggregate_is_idempotent() {
    let list = vec![
        record("1", "A", "journal", None),
        record("2", "B", "journal", None),
        record("1", "A", "journal", None),
    ];
    let once = aggregate(vec![list]);
    let twice = aggregate(vec![once.clone()]);
    assert_eq!(once, twice);
}

fn arb_record() -> impl Strategy<Value = MentionRecord> {
    let drug = prop_oneof![Just("aspirin"), Just("ibuprofen"), Just("cortisone")];
    let title = prop_oneof![Just("t1"), Just("t2"), Just("t3")];
    let ref_type = prop_oneof![Just("journal"), Just("clinical_publication")];
    let date = prop_oneof![Just(None), Just(Some("2020-01-01")), Just(Some("2021-02-03"))];
    (drug, title, ref_type, date).prop_map(|(drug, title, ref_type, date)| {
        record(drug, title, ref_type, date)
    })
}

proptest! {
    #[test]
    fn aggregate_is_idempotent_for_any_list(
        lists in vec_of(vec_of(arb_record(), 0..8), 0..4)
    ) {
        let once = aggregate(lists);
        let twice = aggregate(vec![once.clone()]);
        assert_eq!(once, twice);
    }

    #[test]
    fn output_is_a_subsequence_of_the_flattened_input(
        lists in vec_of(vec_of(arb_record(), 0..8), 0..4)
    ) {
        let flattened: Vec<MentionRecord> = lists.iter().flatten().cloned().collect();
        let merged = aggregate(lists);
        let mut cursor = flattened.iter();
        for record in &merged {
            assert!(cursor.any(|candidate| candidate == record));
        }
    }
}
