//! Matching and aggregation engine for the drug-mentions pipeline.
//!
//! [`Matcher`] finds whole-word drug mentions in publication titles
//! and derives journal mentions from them; [`aggregate`] merges the
//! per-source record lists and removes exact duplicates. Both are
//! pure over their inputs apart from the fatal configuration errors
//! documented on [`Matcher::run`].

pub mod aggregator;
pub mod matcher;

pub use aggregator::aggregate;
pub use matcher::Matcher;
