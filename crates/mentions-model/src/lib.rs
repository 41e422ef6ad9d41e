//! Data model for the drug-mentions pipeline.

pub mod config;
pub mod error;
pub mod record;
pub mod table;

pub use config::{
    CleanConfig, MatchConfig, clinical_clean_config, clinical_match_config, drugs_clean_config,
    pubmed_clean_config, pubmed_match_config,
};
pub use error::{MentionError, Result};
pub use record::{JOURNAL_REF_TYPE, MentionRecord, publication_ref_type};
pub use table::Table;
