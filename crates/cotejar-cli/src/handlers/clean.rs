//! Delete run artifacts

use crate::commands::CleanArgs;
use crate::config::Verbosity;
use crate::error::CliResult;
use console::style;
use cotejar::ArtifactStore;

/// Delete diff artifacts, and actual captures too when `--actuals` is set.
/// Baselines are never touched; use `accept` to change them deliberately.
pub fn run_clean(verbosity: Verbosity, args: &CleanArgs) -> CliResult<()> {
    let store = ArtifactStore::new("__baselines__", &args.actual_dir, &args.diff_dir);

    let mut removed = 0usize;
    for name in store.names_in(store.diff_dir())? {
        let path = store.diff_path(&name)?;
        if path.exists() {
            std::fs::remove_file(&path)?;
            removed += 1;
        }
    }

    if args.actuals {
        for name in store.names_in(store.actual_dir())? {
            let path = store.actual_path(&name)?;
            if path.exists() {
                std::fs::remove_file(&path)?;
                removed += 1;
            }
        }
    }

    if !verbosity.is_quiet() {
        println!("{} {removed} artifact(s)", style("removed").green());
    }
    Ok(())
}
