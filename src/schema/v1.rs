use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::chart::{RenderLine, RenderPoint};
use crate::model::{MutationRecord, Sample, SampleCoverage};

/// Chart-input document: everything the hosting application has already
/// fetched for one patient timeline, as an immutable snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartInputV1 {
    pub schema_version: String,
    pub molecular_profile_id: String,
    /// Master sample ordering; index in this list is the x coordinate.
    pub samples: Vec<Sample>,
    /// One record list per tracked mutation position.
    pub positions: Vec<Vec<MutationRecord>>,
    /// Coverage facts keyed by `unique_sample_key`.
    #[serde(default)]
    pub coverage: HashMap<String, SampleCoverage>,
    /// Grouping attribute name; absent means no grouping.
    #[serde(default)]
    pub group_by: Option<String>,
    /// Sample id to group label, used only when `group_by` is set.
    #[serde(default)]
    pub sample_groups: HashMap<String, String>,
}

impl ChartInputV1 {
    /// Sample-order index map derived from the master list.
    pub fn sample_index(&self) -> HashMap<String, usize> {
        self.samples
            .iter()
            .enumerate()
            .map(|(i, s)| (s.sample_id.clone(), i))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YAxisBlock {
    pub tickmarks: Vec<f64>,
    pub labels: Vec<String>,
    /// Pixel coordinate per tickmark, present when a plot height was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixels: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub molecular_profile_id: String,
    pub lines: Vec<RenderLine>,
    pub gray_points: Vec<RenderPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<YAxisBlock>,
}

impl RenderReportV1 {
    pub fn empty(tool_version: &str, molecular_profile_id: &str) -> Self {
        Self {
            tool: "vaf-timeline".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            molecular_profile_id: molecular_profile_id.to_string(),
            lines: Vec::new(),
            gray_points: Vec::new(),
            y_axis: None,
        }
    }
}
