//! Per-source column configurations.
//!
//! Column roles are bound to typed values once at startup and
//! validated against the actual table schema before any matching,
//! rather than being looked up by string key at call time.

use crate::error::Result;
use crate::table::Table;

/// Column roles driving the table cleaner for one source.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    /// Identifier column, stringified and prefixed for cross-source uniqueness.
    pub id_column: String,
    pub id_prefix: String,
    /// Columns canonicalized to `YYYY-MM-DD`.
    pub date_columns: Vec<String>,
    /// Rows missing a value in any of these columns are dropped.
    pub drop_na_columns: Vec<String>,
    /// Free-text columns stripped of special characters and lowercased.
    pub text_search_columns: Vec<String>,
}

/// Column roles plus the source tag driving one matcher instance.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub drug_col: String,
    pub title_col: String,
    pub journal_col: String,
    pub date_col: String,
    /// Literal tag naming the publication table, used in `ref_type`.
    pub source: String,
}

impl MatchConfig {
    /// Validate that every configured column exists in the row schemas.
    ///
    /// Fatal configuration error, raised before any matching attempt.
    pub fn validate(&self, drugs: &Table, publications: &Table) -> Result<()> {
        drugs.require_column(&self.drug_col, "drugs")?;
        publications.require_column(&self.title_col, &self.source)?;
        publications.require_column(&self.journal_col, &self.source)?;
        publications.require_column(&self.date_col, &self.source)?;
        Ok(())
    }
}

/// Cleaning configuration for the drug reference table.
pub fn drugs_clean_config() -> CleanConfig {
    CleanConfig {
        id_column: "atccode".to_string(),
        id_prefix: "drug".to_string(),
        date_columns: Vec::new(),
        drop_na_columns: vec!["drug".to_string()],
        text_search_columns: vec!["drug".to_string()],
    }
}

/// Cleaning configuration for bibliographic (PubMed) tables.
pub fn pubmed_clean_config() -> CleanConfig {
    CleanConfig {
        id_column: "id".to_string(),
        id_prefix: "pubmed".to_string(),
        date_columns: vec!["date".to_string()],
        drop_na_columns: vec!["title".to_string(), "journal".to_string()],
        text_search_columns: vec!["title".to_string()],
    }
}

/// Cleaning configuration for clinical-trial tables.
pub fn clinical_clean_config() -> CleanConfig {
    CleanConfig {
        id_column: "id".to_string(),
        id_prefix: "clinical".to_string(),
        date_columns: vec!["date".to_string()],
        drop_na_columns: vec!["scientific_title".to_string(), "journal".to_string()],
        text_search_columns: vec!["scientific_title".to_string()],
    }
}

/// Matching configuration for drugs against clinical trials.
pub fn clinical_match_config() -> MatchConfig {
    MatchConfig {
        drug_col: "drug".to_string(),
        title_col: "scientific_title".to_string(),
        journal_col: "journal".to_string(),
        date_col: "date".to_string(),
        source: "clinical".to_string(),
    }
}

/// Matching configuration for drugs against PubMed publications.
pub fn pubmed_match_config() -> MatchConfig {
    MatchConfig {
        drug_col: "drug".to_string(),
        title_col: "title".to_string(),
        journal_col: "journal".to_string(),
        date_col: "date".to_string(),
        source: "pubmed".to_string(),
    }
}
