//! Post-run analysis over a written mentions report.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use mentions_model::{JOURNAL_REF_TYPE, MentionRecord};

/// The journal citing the most distinct drugs, with the drugs it cites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalAnalysis {
    pub journal: String,
    pub drugs: BTreeSet<String>,
}

/// Find the journal mentioning the greatest number of distinct drugs
/// in a previously written report.
///
/// Journal and drug names are trimmed and lowercased before grouping;
/// records with an empty journal or drug are skipped, as are
/// publication records. Returns `None` when the report holds no
/// journal records. Ties resolve to the alphabetically first journal.
pub fn journal_with_most_drugs(report_path: &Path) -> Result<Option<JournalAnalysis>> {
    let text = fs::read_to_string(report_path)
        .with_context(|| format!("read report {}", report_path.display()))?;
    let records: Vec<MentionRecord> = serde_json::from_str(&text)
        .with_context(|| format!("parse report {}", report_path.display()))?;

    let mut journal_to_drugs: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for record in &records {
        if record.ref_type != JOURNAL_REF_TYPE {
            continue;
        }
        let journal = record.title.trim().to_lowercase();
        let drug = record.drug.trim().to_lowercase();
        if journal.is_empty() || drug.is_empty() {
            continue;
        }
        journal_to_drugs.entry(journal).or_default().insert(drug);
    }

    let mut best: Option<JournalAnalysis> = None;
    for (journal, drugs) in journal_to_drugs {
        let better = match &best {
            None => true,
            Some(current) => drugs.len() > current.drugs.len(),
        };
        if better {
            best = Some(JournalAnalysis { journal, drugs });
        }
    }
    match &best {
        Some(analysis) => info!(
            journal = %analysis.journal,
            distinct_drugs = analysis.drugs.len(),
            "journal with most drug mentions"
        ),
        None => warn!(path = %report_path.display(), "no journal mentions in report"),
    }
    Ok(best)
}
