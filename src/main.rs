use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vaf_timeline::axis::scale::y_value_scale;
use vaf_timeline::axis::ticks::{minimal_distinct_tick_strings, y_axis_tickmarks};
use vaf_timeline::chart::render::compute_render_data;
use vaf_timeline::cli::{Cli, Commands, RenderArgs, ValidateArgs};
use vaf_timeline::io;
use vaf_timeline::schema::v1::{ChartInputV1, RenderReportV1, YAxisBlock};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => run_render(args),
        Commands::Validate(args) => run_validate(args),
    }
}

fn run_render(args: RenderArgs) -> Result<()> {
    let input = io::read_chart_input(&args.input)?;
    let sample_index = input.sample_index();

    let data = compute_render_data(
        &input.samples,
        &input.positions,
        &sample_index,
        &input.molecular_profile_id,
        &input.coverage,
        input.group_by.as_deref(),
        &input.sample_groups,
    );

    let mut report =
        RenderReportV1::empty(env!("CARGO_PKG_VERSION"), &input.molecular_profile_id);
    report.y_axis = Some(build_y_axis(&data, &args));
    report.lines = data.lines;
    report.gray_points = data.gray_points;

    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    io::write_report(&args.out, &report, args.pretty)?;
    print!("{}", io::format_summary(&report));
    Ok(())
}

fn build_y_axis(data: &vaf_timeline::chart::RenderData, args: &RenderArgs) -> YAxisBlock {
    let max_y = data
        .lines
        .iter()
        .flat_map(|l| l.points.iter())
        .chain(data.gray_points.iter())
        .map(|p| p.y)
        .fold(0.0f64, f64::max);
    let max_y = if max_y > 0.0 { max_y } else { 1.0 };

    let tickmarks = y_axis_tickmarks(0.0, max_y, args.num_ticks);
    let labels = minimal_distinct_tick_strings(&tickmarks);
    let pixels = args.plot_height.map(|height| {
        let scale = y_value_scale(0.0, max_y, height, args.log_scale);
        tickmarks.iter().map(|&t| scale(t)).collect()
    });
    YAxisBlock {
        tickmarks,
        labels,
        pixels,
    }
}

fn run_validate(args: ValidateArgs) -> Result<()> {
    let input = io::read_chart_input(&args.input)?;
    let warnings = collect_warnings(&input);

    println!("vaf-timeline validate ok");
    println!("samples: {}", input.samples.len());
    println!("positions: {}", input.positions.len());
    println!(
        "records: {}",
        input.positions.iter().map(|p| p.len()).sum::<usize>()
    );
    if !warnings.is_empty() {
        println!("warnings:");
        for warning in &warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

/// Referential-integrity diagnostics. None of these fail a render; the core
/// silently excludes the offending data, so surface them here instead.
fn collect_warnings(input: &ChartInputV1) -> Vec<String> {
    let sample_index = input.sample_index();
    let mut warnings = Vec::new();

    for records in &input.positions {
        for record in records {
            if !sample_index.contains_key(&record.sample_id) {
                warnings.push(format!(
                    "mutation {}/{} references unknown sample '{}'",
                    record.gene, record.protein_change, record.sample_id
                ));
            }
        }
    }
    for sample_id in input.sample_groups.keys() {
        if !sample_index.contains_key(sample_id) {
            warnings.push(format!("group label for unknown sample '{}'", sample_id));
        }
    }
    for sample in &input.samples {
        if !input.coverage.contains_key(&sample.unique_sample_key) {
            warnings.push(format!(
                "sample '{}' has no coverage entry and will be excluded",
                sample.sample_id
            ));
        }
    }
    warnings
}
