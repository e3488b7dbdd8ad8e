//! CLI command definitions using clap

use clap::{Parser, Subcommand};
use cotejar::IgnoreRegion;
use std::path::PathBuf;

/// Cotejador: CLI for Cotejar - baseline management and offline comparison
#[derive(Parser, Debug)]
#[command(name = "cotejador")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two PNG files pixel by pixel
    Compare(CompareArgs),

    /// Promote actual captures to accepted baselines
    Accept(AcceptArgs),

    /// Show which artifacts exist per screenshot name
    Status(StatusArgs),

    /// Delete run artifacts (diffs, optionally actuals)
    Clean(CleanArgs),
}

/// Arguments for the compare command
#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// Baseline (reference) PNG file
    pub baseline: PathBuf,

    /// Actual (candidate) PNG file
    pub actual: PathBuf,

    /// Maximum tolerated mismatch percentage (0.0-100.0)
    #[arg(short, long, default_value_t = 0.0)]
    pub threshold: f64,

    /// Rectangular region to exclude, as x,y,width,height (repeatable)
    #[arg(long = "ignore", value_name = "X,Y,W,H")]
    pub ignore: Vec<IgnoreRegion>,

    /// Write the diff visualization to this path
    #[arg(short, long)]
    pub diff: Option<PathBuf>,

    /// Write a JSON run report to this path
    #[arg(short, long)]
    pub report: Option<PathBuf>,
}

/// Arguments for the accept command
#[derive(Parser, Debug)]
pub struct AcceptArgs {
    /// Screenshot name to accept
    #[arg(short, long)]
    pub name: Option<String>,

    /// Accept every name present in the actual directory
    #[arg(long)]
    pub all: bool,

    /// Directory holding baseline images
    #[arg(long, default_value = "__baselines__")]
    pub baseline_dir: PathBuf,

    /// Directory holding actual (latest capture) images
    #[arg(long, default_value = "__actuals__")]
    pub actual_dir: PathBuf,
}

/// Arguments for the status command
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Directory holding baseline images
    #[arg(long, default_value = "__baselines__")]
    pub baseline_dir: PathBuf,

    /// Directory holding actual (latest capture) images
    #[arg(long, default_value = "__actuals__")]
    pub actual_dir: PathBuf,

    /// Directory holding diff images
    #[arg(long, default_value = "__diffs__")]
    pub diff_dir: PathBuf,
}

/// Arguments for the clean command
#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// Directory holding actual (latest capture) images
    #[arg(long, default_value = "__actuals__")]
    pub actual_dir: PathBuf,

    /// Directory holding diff images
    #[arg(long, default_value = "__diffs__")]
    pub diff_dir: PathBuf,

    /// Also delete actual captures, not just diffs
    #[arg(long)]
    pub actuals: bool,
}
