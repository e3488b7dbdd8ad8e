//! Offline comparison of two PNG files

use crate::commands::CompareArgs;
use crate::config::Verbosity;
use crate::error::{CliError, CliResult};
use console::style;
use cotejar::codec::{decode_png, encode_png};
use cotejar::comparator::{MatchOutcome, MatchReport};
use cotejar::{compare_pixels, sha256_hex, RunReport};
use std::path::Path;

/// Compare the two PNG files, optionally writing a diff image and a JSON
/// report, and fail when the mismatch exceeds the threshold
pub fn run_compare(verbosity: Verbosity, args: &CompareArgs) -> CliResult<()> {
    let baseline_bytes = std::fs::read(&args.baseline)?;
    let actual_bytes = std::fs::read(&args.actual)?;
    let baseline = decode_png(&baseline_bytes)?;
    let actual = decode_png(&actual_bytes)?;

    let comparison = compare_pixels(&baseline, &actual, &args.ignore);
    let failed = comparison.mismatch_percent > args.threshold;

    if let Some(diff_path) = &args.diff {
        if let Some(parent) = diff_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(diff_path, encode_png(&comparison.diff)?)?;
        if verbosity.is_verbose() {
            println!("diff written to {}", diff_path.display());
        }
    }

    if let Some(report_path) = &args.report {
        write_report(args, &comparison, failed, &baseline_bytes, &actual_bytes, report_path)?;
    }

    if !verbosity.is_quiet() {
        let verdict = if failed {
            style("FAIL").red().bold()
        } else {
            style("PASS").green().bold()
        };
        println!(
            "{verdict} {:.2}% of {}x{} pixels differ (threshold {:.2}%)",
            comparison.mismatch_percent,
            comparison.compared_width,
            comparison.compared_height,
            args.threshold,
        );
    }

    if failed {
        return Err(CliError::ComparisonFailed {
            mismatch_percent: comparison.mismatch_percent,
            threshold_percent: args.threshold,
        });
    }
    Ok(())
}

fn write_report(
    args: &CompareArgs,
    comparison: &cotejar::PixelComparison,
    failed: bool,
    baseline_bytes: &[u8],
    actual_bytes: &[u8],
    report_path: &Path,
) -> CliResult<()> {
    let name = args
        .actual
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("comparison")
        .to_string();
    let diff_path = args.diff.clone().unwrap_or_default();

    let mut report = RunReport::new();
    if failed {
        report.record_failure(
            name.as_str(),
            comparison.mismatch_percent,
            args.threshold,
            &diff_path,
        );
    } else {
        report.record_outcome(
            args.threshold,
            &MatchOutcome::Matched(MatchReport {
                name,
                mismatch_count: comparison.mismatch_count,
                mismatch_percent: comparison.mismatch_percent,
                threshold_percent: args.threshold,
                compared_width: comparison.compared_width,
                compared_height: comparison.compared_height,
                diff_path,
            }),
        );
    }
    report.attach_digests(
        Some(sha256_hex(baseline_bytes)),
        Some(sha256_hex(actual_bytes)),
    );
    report.write_json(report_path)?;
    Ok(())
}
