//! Artifact status per screenshot name

use crate::commands::StatusArgs;
use crate::config::Verbosity;
use crate::error::CliResult;
use console::style;
use cotejar::ArtifactStore;
use std::collections::BTreeSet;

/// Print which artifacts (baseline, actual, diff) exist for every known
/// screenshot name
pub fn run_status(verbosity: Verbosity, args: &StatusArgs) -> CliResult<()> {
    let store = ArtifactStore::new(&args.baseline_dir, &args.actual_dir, &args.diff_dir);

    let mut names: BTreeSet<String> = BTreeSet::new();
    names.extend(store.names_in(store.baseline_dir())?);
    names.extend(store.names_in(store.actual_dir())?);
    names.extend(store.names_in(store.diff_dir())?);

    if names.is_empty() {
        if !verbosity.is_quiet() {
            println!("no artifacts found");
        }
        return Ok(());
    }

    if verbosity.is_quiet() {
        return Ok(());
    }

    let mark = |present: bool| {
        if present {
            style("x").green().to_string()
        } else {
            style("-").dim().to_string()
        }
    };

    println!("B A D  name");
    let mut with_diff = 0usize;
    for name in &names {
        let has_baseline = store.baseline_path(name)?.exists();
        let has_actual = store.actual_path(name)?.exists();
        let has_diff = store.diff_path(name)?.exists();
        if has_diff {
            with_diff += 1;
        }
        println!(
            "{} {} {}  {name}",
            mark(has_baseline),
            mark(has_actual),
            mark(has_diff)
        );
    }
    println!("{} name(s), {with_diff} with diffs", names.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn args_for(root: &Path) -> StatusArgs {
        StatusArgs {
            baseline_dir: root.join("baselines"),
            actual_dir: root.join("actuals"),
            diff_dir: root.join("diffs"),
        }
    }

    #[test]
    fn test_status_empty_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_for(dir.path());
        assert!(run_status(Verbosity::Quiet, &args).is_ok());
    }

    #[test]
    fn test_status_with_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_for(dir.path());
        std::fs::create_dir_all(&args.baseline_dir).unwrap();
        std::fs::create_dir_all(&args.diff_dir).unwrap();
        std::fs::write(args.baseline_dir.join("home.png"), b"png").unwrap();
        std::fs::write(args.diff_dir.join("home-diff.png"), b"png").unwrap();
        assert!(run_status(Verbosity::Normal, &args).is_ok());
    }
}
