//! Cotejador: command-line interface for Cotejar
//!
//! ## Usage
//!
//! ```bash
//! cotejador compare baseline.png actual.png --threshold 0.5
//! cotejador accept --name home-page       # promote one capture
//! cotejador accept --all                  # promote every capture
//! cotejador status                        # which artifacts exist
//! cotejador clean --actuals               # drop diffs and captures
//! ```

use clap::Parser;
use cotejador::handlers::{run_accept, run_clean, run_compare, run_status};
use cotejador::{Cli, CliResult, Commands, Verbosity};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let verbosity = Verbosity::from_flags(cli.verbose, cli.quiet);
    init_tracing(verbosity);

    match cli.command {
        Commands::Compare(args) => run_compare(verbosity, &args),
        Commands::Accept(args) => run_accept(verbosity, &args),
        Commands::Status(args) => run_status(verbosity, &args),
        Commands::Clean(args) => run_clean(verbosity, &args),
    }
}

fn init_tracing(verbosity: Verbosity) {
    let default_filter = match verbosity {
        Verbosity::Quiet | Verbosity::Normal => return,
        Verbosity::Verbose => "cotejar=info,cotejador=info",
        Verbosity::Debug => "cotejar=debug,cotejador=debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
