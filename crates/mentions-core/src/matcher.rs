//! Drug-mention matching.
//!
//! A [`Matcher`] is configured once per publication source and finds
//! whole-word occurrences of drug names inside publication titles,
//! then derives journal mentions from the same matches. Raw matches
//! are ephemeral; only [`MentionRecord`]s leave this module.

use std::collections::BTreeSet;

use regex::Regex;
use tracing::{info, warn};

use mentions_model::{MatchConfig, MentionRecord, Result, Table};
use mentions_transform::normalize_date;

/// One (drug, matching row) pair. Not deduplicated: duplicate source
/// rows produce duplicate raw matches by design, and the aggregator
/// collapses them later.
#[derive(Debug, Clone)]
struct RawMatch {
    drug: String,
    title: String,
    journal: Option<String>,
    date: Option<String>,
}

/// Finds and formats drug mentions for one publication source.
#[derive(Debug, Clone)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Find whole-word drug occurrences in publication titles.
    ///
    /// Each distinct non-empty drug name becomes a word-boundary
    /// anchored pattern with special characters escaped literally.
    /// O(drugs x rows); a row may match several drugs and a drug
    /// several rows. An entirely empty drug column yields an empty
    /// result, not an error.
    fn find_mentions(&self, drugs: &Table, publications: &Table) -> Result<Vec<RawMatch>> {
        let drug_idx = drugs.require_column(&self.config.drug_col, "drugs")?;
        let title_idx = publications.require_column(&self.config.title_col, &self.config.source)?;
        let journal_idx =
            publications.require_column(&self.config.journal_col, &self.config.source)?;
        let date_idx = publications.require_column(&self.config.date_col, &self.config.source)?;

        let mut seen_drugs = BTreeSet::new();
        let mut matches = Vec::new();
        for drug in drugs.column_values(drug_idx) {
            if !seen_drugs.insert(drug.to_string()) {
                continue;
            }
            let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(drug)))
                .expect("escaped literal is a valid pattern");
            for (row_idx, _) in publications.rows.iter().enumerate() {
                let Some(title) = publications.value(row_idx, title_idx) else {
                    continue;
                };
                if !pattern.is_match(title) {
                    continue;
                }
                matches.push(RawMatch {
                    drug: drug.to_string(),
                    title: title.to_string(),
                    journal: publications
                        .value(row_idx, journal_idx)
                        .map(ToString::to_string),
                    date: publications.value(row_idx, date_idx).map(ToString::to_string),
                });
            }
        }
        info!(
            source = %self.config.source,
            mentions = matches.len(),
            "found drug mentions in publication titles"
        );
        Ok(matches)
    }

    /// Format raw matches into the uniform record shape.
    ///
    /// Publication records come first, one per raw match. Journal
    /// records follow in first-seen raw-match order, one per distinct
    /// (drug, trimmed journal, date) triple. Journal text keeps its
    /// source casing and is only trimmed, a deliberately lighter
    /// normalization than titles receive.
    fn format_mentions(&self, matches: &[RawMatch]) -> Vec<MentionRecord> {
        if matches.is_empty() {
            warn!(source = %self.config.source, "no matches found");
            return Vec::new();
        }

        let mut records: Vec<MentionRecord> = matches
            .iter()
            .map(|raw| {
                MentionRecord::publication(
                    &raw.drug,
                    &raw.title,
                    &self.config.source,
                    raw.date.clone(),
                )
            })
            .collect();
        let publication_count = records.len();

        let mut seen_journals = BTreeSet::new();
        for raw in matches {
            let Some(journal) = raw.journal.as_deref() else {
                continue;
            };
            let journal = journal.trim();
            if journal.is_empty() {
                continue;
            }
            let key = (raw.drug.clone(), journal.to_string(), raw.date.clone());
            if seen_journals.insert(key) {
                records.push(MentionRecord::journal(&raw.drug, journal, raw.date.clone()));
            }
        }
        let journal_count = records.len() - publication_count;
        if journal_count == 0 {
            warn!(source = %self.config.source, "no journal values present in matched rows");
        }
        info!(
            source = %self.config.source,
            publication_mentions = publication_count,
            journal_mentions = journal_count,
            "formatted mention records"
        );
        records
    }

    /// Re-render any parseable `date_mention` as `YYYY-MM-DD`.
    ///
    /// Dates arrive pre-canonicalized from the cleaner; this pass
    /// covers values that bypassed it. Absent dates stay absent and
    /// unparseable strings pass through unchanged.
    fn normalize_dates(records: &mut [MentionRecord]) {
        for record in records {
            if let Some(date) = record.date_mention.as_deref()
                && let Some(normalized) = normalize_date(date)
            {
                record.date_mention = Some(normalized);
            }
        }
    }

    /// Full matching run: validate columns, find, format, normalize.
    ///
    /// A configured column missing from either schema is a fatal
    /// configuration error raised before any matching attempt.
    pub fn run(&self, drugs: &Table, publications: &Table) -> Result<Vec<MentionRecord>> {
        self.config.validate(drugs, publications)?;
        let matches = self.find_mentions(drugs, publications)?;
        let mut records = self.format_mentions(&matches);
        Self::normalize_dates(&mut records);
        Ok(records)
    }
}
