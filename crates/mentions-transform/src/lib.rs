//! Column-level cleaning and table utilities for the drug-mentions
//! pipeline.

pub mod cleaning;
pub mod concat;
pub mod datetime;

pub use cleaning::TableCleaner;
pub use concat::concat_tables;
pub use datetime::{STANDARD_DATE_FORMAT, normalize_date, parse_date};
