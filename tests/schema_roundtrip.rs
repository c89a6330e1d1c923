use std::collections::HashMap;

use vaf_timeline::chart::{MutationStatus, RenderLine, RenderPoint};
use vaf_timeline::model::{GenePanelEntry, MutationRecord, Sample, SampleCoverage};
use vaf_timeline::schema::v1::{ChartInputV1, RenderReportV1, YAxisBlock};

fn input_fixture() -> ChartInputV1 {
    let mut coverage = HashMap::new();
    coverage.insert(
        "uniqueKey1".to_string(),
        SampleCoverage {
            all_genes: vec![GenePanelEntry {
                molecular_profile_id: "mutations".to_string(),
                profiled: true,
            }],
            ..Default::default()
        },
    );
    ChartInputV1 {
        schema_version: "v1".to_string(),
        molecular_profile_id: "mutations".to_string(),
        samples: vec![Sample {
            sample_id: "sample1".to_string(),
            unique_sample_key: "uniqueKey1".to_string(),
            patient_id: "patient1".to_string(),
            study_id: "study1".to_string(),
        }],
        positions: vec![vec![MutationRecord {
            gene: "TP53".to_string(),
            protein_change: "R273H".to_string(),
            sample_id: "sample1".to_string(),
            unique_sample_key: "uniqueKey1".to_string(),
            molecular_profile_id: "mutations".to_string(),
            call_status: None,
            alt_count: Some(25),
            ref_count: Some(75),
        }]],
        coverage,
        group_by: Some("SampleType".to_string()),
        sample_groups: HashMap::from([("sample1".to_string(), "Primary".to_string())]),
    }
}

#[test]
fn chart_input_round_trips() {
    let input = input_fixture();
    let json = serde_json::to_string(&input).unwrap();
    let back: ChartInputV1 = serde_json::from_str(&json).unwrap();

    assert_eq!(back.schema_version, "v1");
    assert_eq!(back.molecular_profile_id, "mutations");
    assert_eq!(back.samples, input.samples);
    assert_eq!(back.positions, input.positions);
    assert_eq!(back.coverage, input.coverage);
    assert_eq!(back.group_by.as_deref(), Some("SampleType"));
    assert_eq!(back.sample_groups, input.sample_groups);
}

#[test]
fn optional_input_sections_default_when_absent() {
    let json = r#"{
        "schema_version": "v1",
        "molecular_profile_id": "mutations",
        "samples": [],
        "positions": [[{
            "gene": "TP53",
            "protein_change": "R273H",
            "sample_id": "sample1",
            "unique_sample_key": "uniqueKey1",
            "molecular_profile_id": "mutations"
        }]]
    }"#;
    let input: ChartInputV1 = serde_json::from_str(json).unwrap();
    assert!(input.coverage.is_empty());
    assert!(input.group_by.is_none());
    assert!(input.sample_groups.is_empty());

    let record = &input.positions[0][0];
    assert!(record.call_status.is_none());
    assert!(record.alt_count.is_none());
    assert!(record.ref_count.is_none());
    assert!(record.vaf().is_none());
}

#[test]
fn sample_index_follows_master_order() {
    let mut input = input_fixture();
    input.samples.push(Sample {
        sample_id: "sample2".to_string(),
        unique_sample_key: "uniqueKey2".to_string(),
        patient_id: "patient1".to_string(),
        study_id: "study1".to_string(),
    });
    let index = input.sample_index();
    assert_eq!(index["sample1"], 0);
    assert_eq!(index["sample2"], 1);
}

#[test]
fn statuses_serialize_as_screaming_snake_case() {
    let value = serde_json::to_value(MutationStatus::ProfiledWithReadsButUncalled).unwrap();
    assert_eq!(value, serde_json::json!("PROFILED_WITH_READS_BUT_UNCALLED"));
    let back: MutationStatus = serde_json::from_value(serde_json::json!("NOT_PROFILED")).unwrap();
    assert_eq!(back, MutationStatus::NotProfiled);
}

#[test]
fn report_round_trips_and_omits_empty_options() {
    let mut report = RenderReportV1::empty("0.1.0", "mutations");
    report.lines.push(RenderLine {
        gene: "TP53".to_string(),
        protein_change: "R273H".to_string(),
        group: None,
        points: vec![RenderPoint {
            x: 0,
            y: 0.25,
            sample_id: "sample1".to_string(),
            status: MutationStatus::MutatedWithVaf,
            mutation: None,
        }],
    });
    report.y_axis = Some(YAxisBlock {
        tickmarks: vec![0.0, 0.2],
        labels: vec!["0.0".to_string(), "0.2".to_string()],
        pixels: None,
    });

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["tool"], "vaf-timeline");
    assert_eq!(value["schema_version"], "v1");
    // None-valued options are omitted entirely.
    assert!(value["lines"][0].get("group").is_none());
    assert!(value["lines"][0]["points"][0].get("mutation").is_none());
    assert!(value["y_axis"].get("pixels").is_none());

    let back: RenderReportV1 = serde_json::from_value(value).unwrap();
    assert_eq!(back.lines, report.lines);
    assert_eq!(back.molecular_profile_id, "mutations");
    assert!(back.gray_points.is_empty());
}
