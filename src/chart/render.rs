//! Render-data synthesis: turns classified per-sample slots into connected
//! polylines and interpolated gray points.

use std::collections::HashMap;

use tracing::warn;

use crate::chart::classify::{Classification, classify_sample};
use crate::chart::grouping::split_position_by_group;
use crate::chart::{RenderData, RenderLine, RenderPoint};
use crate::model::{MutationRecord, Sample, SampleCoverage};

/// Computes the plot-ready data for every tracked mutation position.
///
/// `samples` is the master ordering; `sample_index` maps sample id to its
/// fixed x position and is authoritative. `coverage` is keyed by
/// `unique_sample_key`. When `group_by` is set, every position is split into
/// per-group sub-series and each sub-series sees only its group's samples.
///
/// Pure and total: reference errors (a record naming an unknown sample, a
/// group label for an unknown sample) degrade to exclusion, never to a
/// failure.
pub fn compute_render_data(
    samples: &[Sample],
    positions: &[Vec<MutationRecord>],
    sample_index: &HashMap<String, usize>,
    profile_id: &str,
    coverage: &HashMap<String, SampleCoverage>,
    group_by: Option<&str>,
    sample_groups: &HashMap<String, String>,
) -> RenderData {
    let mut data = RenderData::default();

    for records in positions {
        // Position identity comes from its records; an empty position has
        // none and contributes nothing.
        let Some(first) = records.first() else {
            continue;
        };
        let gene = first.gene.as_str();
        let protein_change = first.protein_change.as_str();

        for record in records {
            if !sample_index.contains_key(&record.sample_id) {
                warn!(
                    sample_id = %record.sample_id,
                    gene,
                    "mutation record references a sample outside the master list; skipped"
                );
            }
        }

        if group_by.is_some() {
            for (key, bucket) in split_position_by_group(records, sample_groups) {
                let universe: Vec<&Sample> = samples
                    .iter()
                    .filter(|s| sample_groups.get(&s.sample_id) == key.as_ref())
                    .collect();
                let (points, grays) = synthesize_series(
                    &universe,
                    &bucket,
                    sample_index,
                    profile_id,
                    gene,
                    coverage,
                );
                push_series(&mut data, gene, protein_change, key, points, grays);
            }
        } else {
            let universe: Vec<&Sample> = samples.iter().collect();
            let bucket: Vec<&MutationRecord> = records.iter().collect();
            let (points, grays) =
                synthesize_series(&universe, &bucket, sample_index, profile_id, gene, coverage);
            push_series(&mut data, gene, protein_change, None, points, grays);
        }
    }

    data
}

fn push_series(
    data: &mut RenderData,
    gene: &str,
    protein_change: &str,
    group: Option<String>,
    points: Vec<RenderPoint>,
    grays: Vec<RenderPoint>,
) {
    if !points.is_empty() {
        data.lines.push(RenderLine {
            gene: gene.to_string(),
            protein_change: protein_change.to_string(),
            group,
            points,
        });
    }
    data.gray_points.extend(grays);
}

struct Slot<'a> {
    x: usize,
    sample_id: &'a str,
    record: Option<&'a MutationRecord>,
    verdict: Classification,
}

/// One position x one group bucket: classify every sample of the universe,
/// restrict to the realised range, and emit line points plus interpolated
/// gray points.
fn synthesize_series(
    universe: &[&Sample],
    records: &[&MutationRecord],
    sample_index: &HashMap<String, usize>,
    profile_id: &str,
    gene: &str,
    coverage: &HashMap<String, SampleCoverage>,
) -> (Vec<RenderPoint>, Vec<RenderPoint>) {
    let mut slots: Vec<Slot> = Vec::new();
    for sample in universe {
        let Some(&x) = sample_index.get(&sample.sample_id) else {
            continue;
        };
        // First record for the sample wins when duplicates exist.
        let record = records
            .iter()
            .copied()
            .find(|m| m.sample_id == sample.sample_id);
        let cov = coverage.get(&sample.unique_sample_key);
        if let Some(verdict) = classify_sample(record, cov, profile_id, gene) {
            slots.push(Slot {
                x,
                sample_id: &sample.sample_id,
                record,
                verdict,
            });
        }
    }
    slots.sort_by_key(|s| s.x);

    // The realised range is bounded by the first and last line-point slot;
    // everything outside it is discarded, including gray candidates.
    let Some(first_real) = slots.iter().position(|s| s.verdict.status.is_line_point()) else {
        return (Vec::new(), Vec::new());
    };
    let last_real = slots
        .iter()
        .rposition(|s| s.verdict.status.is_line_point())
        .unwrap_or(first_real);
    let range = &slots[first_real..=last_real];

    let mut points = Vec::new();
    let mut grays = Vec::new();
    for (i, slot) in range.iter().enumerate() {
        if slot.verdict.status.is_line_point() {
            points.push(slot_point(slot, slot.verdict.vaf.unwrap_or(0.0)));
        } else if let Some(y) = interpolated_y(range, i) {
            grays.push(slot_point(slot, y));
        }
    }
    (points, grays)
}

fn slot_point(slot: &Slot<'_>, y: f64) -> RenderPoint {
    RenderPoint {
        x: slot.x,
        y,
        sample_id: slot.sample_id.to_string(),
        status: slot.verdict.status,
        mutation: slot.record.cloned(),
    }
}

/// Mean of the nearest line-point neighbors on either side of `i`, or `None`
/// when either neighbor is missing (the candidate then contributes nothing).
fn interpolated_y(range: &[Slot<'_>], i: usize) -> Option<f64> {
    let left = range[..i]
        .iter()
        .rev()
        .find(|s| s.verdict.status.is_line_point())?;
    let right = range[i + 1..]
        .iter()
        .find(|s| s.verdict.status.is_line_point())?;
    let left_y = left.verdict.vaf.unwrap_or(0.0);
    let right_y = right.verdict.vaf.unwrap_or(0.0);
    Some((left_y + right_y) / 2.0)
}
