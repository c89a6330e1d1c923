use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;

use crate::schema::v1::{ChartInputV1, RenderReportV1};

pub fn read_chart_input(path: &Path) -> Result<ChartInputV1> {
    let reader = open_maybe_gz(path)?;
    let input: ChartInputV1 = serde_json::from_reader(BufReader::new(reader))
        .with_context(|| format!("failed to parse chart input {}", path.display()))?;
    Ok(input)
}

pub fn write_report(path: &Path, report: &RenderReportV1, pretty: bool) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(writer, report)?;
    } else {
        serde_json::to_writer(writer, report)?;
    }
    Ok(())
}

pub fn format_summary(report: &RenderReportV1) -> String {
    let mut out = String::new();
    out.push_str(&format!("vaf-timeline v{}\n", env!("CARGO_PKG_VERSION")));
    out.push_str(&format!("Profile: {}\n", report.molecular_profile_id));
    let points: usize = report.lines.iter().map(|l| l.points.len()).sum();
    out.push_str(&format!(
        "Lines: {} ({} points), gray points: {}\n",
        report.lines.len(),
        points,
        report.gray_points.len()
    ));
    if let Some(axis) = &report.y_axis {
        out.push_str(&format!(
            "Y axis: [{}]\n",
            axis.labels.join(", ")
        ));
    }
    out
}

pub(crate) fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        let decoder = GzDecoder::new(file);
        Ok(Box::new(decoder))
    } else {
        Ok(Box::new(file))
    }
}
