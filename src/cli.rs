use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::axis::DEFAULT_TICK_COUNT;

#[derive(Debug, Parser)]
#[command(name = "vaf-timeline", version, about = "VAF timeline render-data CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Render(RenderArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[arg(long, help = "Chart input JSON (optionally .gz)")]
    pub input: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, default_value_t = DEFAULT_TICK_COUNT, help = "Y-axis tick count")]
    pub num_ticks: i32,

    #[arg(long, help = "Plot height in pixels; emits tickmark pixel coordinates")]
    pub plot_height: Option<f64>,

    #[arg(long, default_value_t = false, help = "Use log10 y-axis scaling")]
    pub log_scale: bool,

    #[arg(long, default_value_t = false, help = "Pretty-print the output JSON")]
    pub pretty: bool,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Chart input JSON (optionally .gz)")]
    pub input: PathBuf,
}
