use serde::{Deserialize, Serialize};

/// Literal reference type for journal-derived records.
pub const JOURNAL_REF_TYPE: &str = "journal";

/// Reference type for publication-derived records of a given source.
pub fn publication_ref_type(source: &str) -> String {
    format!("{source}_publication")
}

/// One deduplicable drug mention, the unit persisted to the report.
///
/// Two records with identical field values are the same entity; `Eq`
/// and `Hash` derive over the full field set so first-occurrence
/// deduplication can use the record directly as a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MentionRecord {
    pub drug: String,
    pub title: String,
    pub ref_type: String,
    /// Rendered `YYYY-MM-DD`, serialized as `null` when absent.
    pub date_mention: Option<String>,
}

impl MentionRecord {
    pub fn publication(drug: &str, title: &str, source: &str, date: Option<String>) -> Self {
        Self {
            drug: drug.to_string(),
            title: title.to_string(),
            ref_type: publication_ref_type(source),
            date_mention: date,
        }
    }

    pub fn journal(drug: &str, journal: &str, date: Option<String>) -> Self {
        Self {
            drug: drug.to_string(),
            title: journal.to_string(),
            ref_type: JOURNAL_REF_TYPE.to_string(),
            date_mention: date,
        }
    }
}
