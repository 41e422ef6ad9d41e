//! Library components of the drug-mentions CLI.

pub mod analysis;
pub mod logging;
pub mod pipeline;
pub mod types;
