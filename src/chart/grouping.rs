//! Splitting a position's mutation list into per-group sub-series.

use std::collections::HashMap;

use crate::model::MutationRecord;

/// Buckets one position's mutations by the owning sample's group label.
/// Bucket order is first-seen order; within a bucket, input order is kept.
/// Samples without a label share one distinct `None` bucket.
pub fn split_position_by_group<'a>(
    records: &'a [MutationRecord],
    sample_groups: &HashMap<String, String>,
) -> Vec<(Option<String>, Vec<&'a MutationRecord>)> {
    // Explicit insertion-ordered mapping; bucket counts are small.
    let mut buckets: Vec<(Option<String>, Vec<&MutationRecord>)> = Vec::new();
    for record in records {
        let key = sample_groups.get(&record.sample_id).cloned();
        match buckets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, bucket)) => bucket.push(record),
            None => buckets.push((key, vec![record])),
        }
    }
    buckets
}

/// Applies [`split_position_by_group`] to every position and flattens the
/// result, preserving position order and per-position bucket order. Under no
/// grouping this is the identity on each position.
pub fn split_mutations_by_sample_group(
    positions: &[Vec<MutationRecord>],
    sample_groups: &HashMap<String, String>,
) -> Vec<Vec<MutationRecord>> {
    let mut out = Vec::new();
    for records in positions {
        for (_, bucket) in split_position_by_group(records, sample_groups) {
            out.push(bucket.into_iter().cloned().collect());
        }
    }
    out
}
