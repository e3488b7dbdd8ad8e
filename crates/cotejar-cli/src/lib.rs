//! Cotejador CLI Library
//!
//! Command-line companion for the Cotejar visual regression library:
//! baseline management, artifact status, and offline comparison.

#![warn(missing_docs)]

mod commands;
mod config;
mod error;
pub mod handlers;

pub use commands::{AcceptArgs, CleanArgs, Cli, Commands, CompareArgs, StatusArgs};
pub use config::Verbosity;
pub use error::{CliError, CliResult};
