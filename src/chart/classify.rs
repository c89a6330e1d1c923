//! Per-sample mutation-status classification.

use crate::chart::MutationStatus;
use crate::model::{MutationRecord, SampleCoverage};

/// Classifier verdict for one (sample, position) slot. `vaf` is present
/// exactly for the two statuses derived from read counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub status: MutationStatus,
    pub vaf: Option<f64>,
}

/// Resolves one sample at one mutation position to a status, or to `None`
/// when the sample is excluded from the chart entirely (no coverage fact, or
/// nothing profiled for the profile and no explicit per-gene flag).
///
/// Total and deterministic: data gaps are statuses, never errors.
pub fn classify_sample(
    record: Option<&MutationRecord>,
    coverage: Option<&SampleCoverage>,
    profile_id: &str,
    gene: &str,
) -> Option<Classification> {
    if let Some(record) = record {
        let verdict = match record.vaf() {
            Some(vaf) if record.is_uncalled() => Classification {
                status: MutationStatus::ProfiledWithReadsButUncalled,
                vaf: Some(vaf),
            },
            Some(vaf) => Classification {
                status: MutationStatus::MutatedWithVaf,
                vaf: Some(vaf),
            },
            None => Classification {
                status: MutationStatus::MutatedButNoVaf,
                vaf: None,
            },
        };
        return Some(verdict);
    }

    let coverage = coverage?;
    if coverage.is_profiled_for_gene(profile_id, gene) {
        return Some(Classification {
            status: MutationStatus::ProfiledButNotMutated,
            vaf: None,
        });
    }
    if coverage.is_profiled_at_all(profile_id)
        || coverage.is_flagged_not_profiled_for_gene(profile_id, gene)
    {
        return Some(Classification {
            status: MutationStatus::NotProfiled,
            vaf: None,
        });
    }
    // Not profiled at all for this profile: the sample does not exist for
    // this chart.
    None
}
