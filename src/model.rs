//! Domain types supplied by the hosting application: samples, mutation
//! records, and per-sample sequencing-coverage facts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub sample_id: String,
    pub unique_sample_key: String,
    pub patient_id: String,
    pub study_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationRecord {
    pub gene: String,
    pub protein_change: String,
    pub sample_id: String,
    pub unique_sample_key: String,
    pub molecular_profile_id: String,
    /// Raw caller status tag, e.g. "uncalled" for reads present but no
    /// formal call.
    #[serde(default)]
    pub call_status: Option<String>,
    #[serde(default)]
    pub alt_count: Option<u32>,
    #[serde(default)]
    pub ref_count: Option<u32>,
}

impl MutationRecord {
    /// Variant allele frequency, defined when both read counts are present
    /// and at least one read was observed.
    pub fn vaf(&self) -> Option<f64> {
        let alt = self.alt_count?;
        let reference = self.ref_count?;
        let total = alt + reference;
        if total == 0 {
            return None;
        }
        Some(alt as f64 / total as f64)
    }

    pub fn is_uncalled(&self) -> bool {
        self.call_status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("uncalled"))
    }
}

/// One gene-panel coverage entry, scoped to a molecular profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenePanelEntry {
    pub molecular_profile_id: String,
    pub profiled: bool,
}

/// Coverage fact for one sample: which genes were sequenced with adequate
/// coverage, per molecular profile. Genes appear either at whole-profile
/// granularity (`all_genes`) or individually (`by_gene`); explicit
/// not-profiled flags use the same two granularities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleCoverage {
    #[serde(default)]
    pub all_genes: Vec<GenePanelEntry>,
    #[serde(default)]
    pub by_gene: HashMap<String, Vec<GenePanelEntry>>,
    #[serde(default)]
    pub not_profiled_all_genes: Vec<GenePanelEntry>,
    #[serde(default)]
    pub not_profiled_by_gene: HashMap<String, Vec<GenePanelEntry>>,
}

impl SampleCoverage {
    /// True when the sample was sequenced at this gene for this profile:
    /// listed in a profiled partition and not explicitly flagged
    /// not-profiled.
    pub fn is_profiled_for_gene(&self, profile_id: &str, gene: &str) -> bool {
        let profiled = has_profile(&self.all_genes, profile_id)
            || self
                .by_gene
                .get(gene)
                .is_some_and(|entries| has_profile(entries, profile_id));
        let flagged = has_profile(&self.not_profiled_all_genes, profile_id)
            || self.is_flagged_not_profiled_for_gene(profile_id, gene);
        profiled && !flagged
    }

    /// True when the sample has at least one profiled entry for the profile,
    /// at either granularity.
    pub fn is_profiled_at_all(&self, profile_id: &str) -> bool {
        has_profile(&self.all_genes, profile_id)
            || self
                .by_gene
                .values()
                .any(|entries| has_profile(entries, profile_id))
    }

    pub fn is_flagged_not_profiled_for_gene(&self, profile_id: &str, gene: &str) -> bool {
        self.not_profiled_by_gene
            .get(gene)
            .is_some_and(|entries| has_profile(entries, profile_id))
    }
}

fn has_profile(entries: &[GenePanelEntry], profile_id: &str) -> bool {
    entries.iter().any(|e| e.molecular_profile_id == profile_id)
}
