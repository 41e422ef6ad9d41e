//! Match-list aggregation.

use std::collections::HashSet;

use tracing::info;

use mentions_model::MentionRecord;

/// Flatten per-source match lists and drop exact duplicates.
///
/// Inner lists are concatenated in input order; the first occurrence
/// of each distinct record (full field-set equality) is kept, later
/// repeats are dropped. Result order is order of first occurrence.
/// Empty input yields an empty result.
pub fn aggregate(lists: Vec<Vec<MentionRecord>>) -> Vec<MentionRecord> {
    let flattened: Vec<MentionRecord> = lists.into_iter().flatten().collect();
    let total = flattened.len();

    let mut seen = HashSet::with_capacity(total);
    let mut unique = Vec::with_capacity(total);
    for record in flattened {
        if seen.insert(record.clone()) {
            unique.push(record);
        }
    }
    info!(
        total_entries = total,
        unique_entries = unique.len(),
        duplicates_removed = total - unique.len(),
        "aggregated match lists"
    );
    unique
}
