//! Staged pipeline: extract, clean, match, aggregate, save.
//!
//! Stages mirror the data flow: raw tables are read from disk, each
//! source is cleaned with its own column configuration, drugs are
//! matched against each publication source, the per-source record
//! lists are merged with duplicate removal, and the result is written
//! as a JSON report.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use mentions_core::{Matcher, aggregate};
use mentions_ingest::{read_csv_table, read_json_table};
use mentions_model::{
    JOURNAL_REF_TYPE, MentionError, MentionRecord, Table, clinical_clean_config,
    clinical_match_config, drugs_clean_config, pubmed_clean_config, pubmed_match_config,
};
use mentions_report::write_mentions_json;
use mentions_transform::{TableCleaner, concat_tables};

use crate::types::{RunResult, SourceSummary};

/// Input and output paths for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub drugs_csv: PathBuf,
    pub pubmed_csv: PathBuf,
    pub pubmed_json: PathBuf,
    pub clinical_csv: PathBuf,
    pub output: PathBuf,
}

/// Run the full pipeline and write the aggregated report.
pub fn run_pipeline(config: &RunConfig) -> Result<RunResult> {
    // Stage 1: Extract - load raw tables from disk
    let extract_span = info_span!("extract");
    let extract_start = Instant::now();
    let (drugs_raw, pubmed_csv_raw, pubmed_json_raw, clinical_raw) =
        extract_span.in_scope(|| {
            let drugs = read_csv_table(&config.drugs_csv).context("read drugs table")?;
            let pubmed_csv =
                read_csv_table(&config.pubmed_csv).context("read pubmed csv table")?;
            let pubmed_json =
                read_json_table(&config.pubmed_json).context("read pubmed json table")?;
            let clinical =
                read_csv_table(&config.clinical_csv).context("read clinical trials table")?;
            anyhow::Ok((drugs, pubmed_csv, pubmed_json, clinical))
        })?;
    info!(
        drug_rows = drugs_raw.row_count(),
        pubmed_csv_rows = pubmed_csv_raw.row_count(),
        pubmed_json_rows = pubmed_json_raw.row_count(),
        clinical_rows = clinical_raw.row_count(),
        duration_ms = extract_start.elapsed().as_millis(),
        "extract complete"
    );

    // Stage 2: Clean - per-source column cleaning, then merge the two
    // pubmed tables into one publication table
    let clean_span = info_span!("clean");
    let clean_start = Instant::now();
    let (drugs, pubmed, clinical) = clean_span.in_scope(|| {
        let drugs = TableCleaner::new(drugs_clean_config()).clean(drugs_raw)?;
        let pubmed_cleaner = TableCleaner::new(pubmed_clean_config());
        let pubmed_json = pubmed_cleaner.clean(pubmed_json_raw)?;
        let pubmed_csv = pubmed_cleaner.clean(pubmed_csv_raw)?;
        let pubmed = concat_tables(vec![pubmed_json, pubmed_csv])?;
        let clinical = TableCleaner::new(clinical_clean_config()).clean(clinical_raw)?;
        Ok::<_, MentionError>((drugs, pubmed, clinical))
    })?;
    info!(
        drug_rows = drugs.row_count(),
        pubmed_rows = pubmed.row_count(),
        clinical_rows = clinical.row_count(),
        duration_ms = clean_start.elapsed().as_millis(),
        "clean complete"
    );

    // Stage 3: Match - drugs against each publication source
    let match_span = info_span!("match");
    let match_start = Instant::now();
    let clinical_config = clinical_match_config();
    let pubmed_config = pubmed_match_config();
    let clinical_source = clinical_config.source.clone();
    let pubmed_source = pubmed_config.source.clone();
    let (clinical_records, pubmed_records) = match_span.in_scope(|| {
        let clinical_records = Matcher::new(clinical_config).run(&drugs, &clinical)?;
        let pubmed_records = Matcher::new(pubmed_config).run(&drugs, &pubmed)?;
        Ok::<_, MentionError>((clinical_records, pubmed_records))
    })?;
    info!(
        clinical_mentions = clinical_records.len(),
        pubmed_mentions = pubmed_records.len(),
        duration_ms = match_start.elapsed().as_millis(),
        "matching complete"
    );
    let sources = vec![
        source_summary(&clinical_source, &clinical, &clinical_records),
        source_summary(&pubmed_source, &pubmed, &pubmed_records),
    ];

    // Stage 4: Aggregate - merge per-source lists, drop exact repeats
    let aggregate_span = info_span!("aggregate");
    let aggregate_start = Instant::now();
    let total_records = clinical_records.len() + pubmed_records.len();
    let merged = aggregate_span.in_scope(|| aggregate(vec![clinical_records, pubmed_records]));
    info!(
        unique_records = merged.len(),
        duration_ms = aggregate_start.elapsed().as_millis(),
        "aggregation complete"
    );

    // Stage 5: Save - write the JSON report
    let save_span = info_span!("save");
    let save_start = Instant::now();
    let output_path = save_span.in_scope(|| write_mentions_json(&config.output, &merged))?;
    info!(
        path = %output_path.display(),
        duration_ms = save_start.elapsed().as_millis(),
        "save complete"
    );

    Ok(RunResult {
        output_path,
        drug_count: drugs.row_count(),
        sources,
        total_records,
        unique_records: merged.len(),
    })
}

fn source_summary(source: &str, publications: &Table, records: &[MentionRecord]) -> SourceSummary {
    let journal_mentions = records
        .iter()
        .filter(|record| record.ref_type == JOURNAL_REF_TYPE)
        .count();
    SourceSummary {
        source: source.to_string(),
        publication_rows: publications.row_count(),
        publication_mentions: records.len() - journal_mentions,
        journal_mentions,
    }
}
