pub mod classify;
pub mod grouping;
pub mod render;

use serde::{Deserialize, Serialize};

use crate::model::MutationRecord;

/// Status of one (sample, mutation position) pair. Exactly one applies;
/// samples not profiled at all for the profile get no status and no point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MutationStatus {
    MutatedWithVaf,
    ProfiledWithReadsButUncalled,
    MutatedButNoVaf,
    NotProfiled,
    ProfiledButNotMutated,
}

impl MutationStatus {
    /// Statuses that yield a connected line point; the other two yield
    /// interpolated gray points.
    pub fn is_line_point(self) -> bool {
        matches!(
            self,
            MutationStatus::MutatedWithVaf
                | MutationStatus::ProfiledWithReadsButUncalled
                | MutationStatus::ProfiledButNotMutated
        )
    }
}

/// One plotted marker. `x` is the sample's fixed position in the master
/// sample ordering, independent of grouping; `y` is a VAF fraction in [0,1].
/// Synthetic zero points and NOT_PROFILED gray points carry no mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPoint {
    pub x: usize,
    pub y: f64,
    pub sample_id: String,
    pub status: MutationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutation: Option<MutationRecord>,
}

/// A connected polyline for one mutation identity within one sample group.
/// Points are strictly increasing in `x` and all have a line-point status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderLine {
    pub gene: String,
    pub protein_change: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub points: Vec<RenderPoint>,
}

/// Output of the synthesizer. Aggregation order across positions is
/// unspecified; consumers associate lines via their identity fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderData {
    pub lines: Vec<RenderLine>,
    pub gray_points: Vec<RenderPoint>,
}
