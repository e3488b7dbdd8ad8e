//! Promote actual captures to accepted baselines

use crate::commands::AcceptArgs;
use crate::config::Verbosity;
use crate::error::{CliError, CliResult};
use console::style;
use cotejar::ArtifactStore;

/// Copy actual captures over their baselines, for one name or all names
/// present in the actual directory
pub fn run_accept(verbosity: Verbosity, args: &AcceptArgs) -> CliResult<()> {
    let store = ArtifactStore::new(&args.baseline_dir, &args.actual_dir, "__diffs__");

    let names: Vec<String> = if args.all {
        store.names_in(store.actual_dir())?
    } else if let Some(name) = &args.name {
        vec![name.clone()]
    } else {
        return Err(CliError::invalid_argument(
            "pass --name <NAME> or --all to choose what to accept",
        ));
    };

    if names.is_empty() {
        if !verbosity.is_quiet() {
            println!("nothing to accept in {}", store.actual_dir().display());
        }
        return Ok(());
    }

    for name in &names {
        let actual_path = store.actual_path(name)?;
        if !actual_path.exists() {
            return Err(CliError::config(format!(
                "no actual capture for {name:?} in {}",
                store.actual_dir().display()
            )));
        }
        let bytes = store.read_bytes(&actual_path)?;
        store.write_bytes(&store.baseline_path(name)?, &bytes)?;
        if !verbosity.is_quiet() {
            println!("{} {name}", style("accepted").green());
        }
    }

    if verbosity.is_verbose() {
        println!("{} baseline(s) updated", names.len());
    }
    Ok(())
}
