//! Matcher behavior tests.

use mentions_core::Matcher;
use mentions_model::{MatchConfig, MentionError, Table};

fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(headers.iter().map(ToString::to_string).collect());
    for row in rows {
        table.push_row(row.iter().map(ToString::to_string).collect());
    }
    table
}

fn drugs(names: &[&str]) -> Table {
    let rows: Vec<Vec<String>> = names.iter().map(|name| vec![name.to_string()]).collect();
    let mut table = Table::new(vec!["drug".to_string()]);
    for row in rows {
        table.push_row(row);
    }
    table
}

fn test_config() -> MatchConfig {
    MatchConfig {
        drug_col: "drug".to_string(),
        title_col: "title".to_string(),
        journal_col: "journal".to_string(),
        date_col: "date".to_string(),
        source: "test".to_string(),
    }
}

#[test]
fn aspirin_scenario_yields_publication_and_journal_records() {
    let publications = table(
        &["title", "journal", "date"],
        &[&["aspirin reduces fever", "Journal of Medicine", "2020-01-01"]],
    );
    let records = Matcher::new(test_config())
        .run(&drugs(&["aspirin"]), &publications)
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].drug, "aspirin");
    assert_eq!(records[0].title, "aspirin reduces fever");
    assert_eq!(records[0].ref_type, "test_publication");
    assert_eq!(records[0].date_mention.as_deref(), Some("2020-01-01"));
    assert_eq!(records[1].title, "Journal of Medicine");
    assert_eq!(records[1].ref_type, "journal");
    assert_eq!(records[1].date_mention.as_deref(), Some("2020-01-01"));
}

#[test]
fn strict_substring_does_not_match_whole_word() {
    let publications = table(
        &["title", "journal", "date"],
        &[&["cortisone study", "Endocrine Review", "2020-01-01"]],
    );
    let matcher = Matcher::new(test_config());

    let partial = matcher.run(&drugs(&["cort"]), &publications).unwrap();
    assert!(partial.is_empty());

    let exact = matcher.run(&drugs(&["cortisone"]), &publications).unwrap();
    assert_eq!(exact.len(), 2);
}

#[test]
fn regex_metacharacters_in_drug_names_match_literally() {
    let publications = table(
        &["title", "journal", "date"],
        &[
            &["vitamin b-12 deficiency", "Nutrition", "2020-01-01"],
            &["vitamin b12 deficiency", "Nutrition", "2020-01-01"],
        ],
    );
    let records = Matcher::new(test_config())
        .run(&drugs(&["b-12"]), &publications)
        .unwrap();
    let titles: Vec<&str> = records
        .iter()
        .filter(|record| record.ref_type == "test_publication")
        .map(|record| record.title.as_str())
        .collect();
    assert_eq!(titles, vec!["vitamin b-12 deficiency"]);
}

#[test]
fn journal_mentions_deduplicate_per_drug_journal_date() {
    // Two raw matches with the same (drug, journal, date) but
    // different titles: one journal record only.
    let publications = table(
        &["title", "journal", "date"],
        &[
            &["ibuprofen in treatment", "Journal B", "2021-01-01"],
            &["ibuprofen long-term study", "Journal B", "2021-01-01"],
            &["ibuprofen revisited", "Journal B", "2021-06-01"],
        ],
    );
    let records = Matcher::new(test_config())
        .run(&drugs(&["ibuprofen"]), &publications)
        .unwrap();

    let publication_count = records
        .iter()
        .filter(|record| record.ref_type == "test_publication")
        .count();
    let journal_records: Vec<_> = records
        .iter()
        .filter(|record| record.ref_type == "journal")
        .collect();
    assert_eq!(publication_count, 3);
    assert_eq!(journal_records.len(), 2);
    assert_eq!(journal_records[0].date_mention.as_deref(), Some("2021-01-01"));
    assert_eq!(journal_records[1].date_mention.as_deref(), Some("2021-06-01"));
}

#[test]
fn journal_text_is_trimmed_but_keeps_casing() {
    let publications = table(
        &["title", "journal", "date"],
        &[&["aspirin study", "  The Lancet  ", "2020-01-01"]],
    );
    let records = Matcher::new(test_config())
        .run(&drugs(&["aspirin"]), &publications)
        .unwrap();
    assert_eq!(records[1].title, "The Lancet");
}

#[test]
fn rows_without_journal_emit_no_journal_record() {
    // Matches without a single journal value: publication records
    // only, and the journal pass comes up empty.
    let publications = table(
        &["title", "journal", "date"],
        &[
            &["aspirin study", "", "2020-01-01"],
            &["aspirin revisited", "   ", "2020-02-01"],
        ],
    );
    let records = Matcher::new(test_config())
        .run(&drugs(&["aspirin"]), &publications)
        .unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|record| record.ref_type == "test_publication"));
}

#[test]
fn absent_date_stays_absent() {
    let publications = table(
        &["title", "journal", "date"],
        &[&["aspirin study", "The Lancet", ""]],
    );
    let records = Matcher::new(test_config())
        .run(&drugs(&["aspirin"]), &publications)
        .unwrap();
    for record in &records {
        assert_eq!(record.date_mention, None);
    }
}

#[test]
fn unnormalized_dates_are_rendered_iso() {
    let publications = table(
        &["title", "journal", "date"],
        &[&["aspirin study", "The Lancet", "27 April 2020"]],
    );
    let records = Matcher::new(test_config())
        .run(&drugs(&["aspirin"]), &publications)
        .unwrap();
    assert_eq!(records[0].date_mention.as_deref(), Some("2020-04-27"));
}

#[test]
fn empty_drug_table_yields_empty_result() {
    let publications = table(
        &["title", "journal", "date"],
        &[&["aspirin study", "The Lancet", "2020-01-01"]],
    );
    let records = Matcher::new(test_config())
        .run(&drugs(&[]), &publications)
        .unwrap();
    assert!(records.is_empty());
}

#[test]
fn all_empty_drug_column_yields_empty_result() {
    let mut drug_table = Table::new(vec!["drug".to_string()]);
    drug_table.push_row(vec![String::new()]);
    drug_table.push_row(vec![String::new()]);
    let publications = table(
        &["title", "journal", "date"],
        &[&["aspirin study", "The Lancet", "2020-01-01"]],
    );
    let records = Matcher::new(test_config())
        .run(&drug_table, &publications)
        .unwrap();
    assert!(records.is_empty());
}

#[test]
fn one_drug_can_match_many_rows_and_one_row_many_drugs() {
    let publications = table(
        &["title", "journal", "date"],
        &[
            &["aspirin reduces fever", "Journal of Medicine", "2020-01-01"],
            &["paracetamol and its effects", "Health Weekly", "2019-12-15"],
            &["unrelated article", "Science Daily", "2021-06-30"],
            &["ibuprofen in treatment", "Medical Reports", "2022-03-10"],
            &["ibuprofen and aspirin combo", "Pharma Journal", "2023-04-22"],
        ],
    );
    let records = Matcher::new(test_config())
        .run(&drugs(&["aspirin", "ibuprofen", "paracetamol"]), &publications)
        .unwrap();
    let publication_count = records
        .iter()
        .filter(|record| record.ref_type == "test_publication")
        .count();
    assert_eq!(publication_count, 5);
    let matched: std::collections::BTreeSet<&str> =
        records.iter().map(|record| record.drug.as_str()).collect();
    assert_eq!(
        matched,
        ["aspirin", "ibuprofen", "paracetamol"].into_iter().collect()
    );
}

#[test]
fn missing_configured_column_is_fatal_before_matching() {
    let publications = table(&["title", "date"], &[&["aspirin study", "2020-01-01"]]);
    let err = Matcher::new(test_config())
        .run(&drugs(&["aspirin"]), &publications)
        .unwrap_err();
    assert!(matches!(err, MentionError::MissingColumn { .. }));
}

#[test]
fn duplicate_publication_rows_produce_duplicate_publication_records() {
    // Publication tables are deliberately not row-deduplicated; the
    // aggregator collapses exact repeats later.
    let publications = table(
        &["title", "journal", "date"],
        &[
            &["aspirin study", "The Lancet", "2020-01-01"],
            &["aspirin study", "The Lancet", "2020-01-01"],
        ],
    );
    let records = Matcher::new(test_config())
        .run(&drugs(&["aspirin"]), &publications)
        .unwrap();
    let publication_count = records
        .iter()
        .filter(|record| record.ref_type == "test_publication")
        .count();
    let journal_count = records
        .iter()
        .filter(|record| record.ref_type == "journal")
        .count();
    assert_eq!(publication_count, 2);
    assert_eq!(journal_count, 1);
}
