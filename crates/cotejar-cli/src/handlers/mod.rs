//! Command handlers
//!
//! One module per subcommand; each handler maps CLI arguments onto library
//! operations and prints human-readable results.

pub mod accept;
pub mod clean;
pub mod compare;
pub mod status;

pub use accept::run_accept;
pub use clean::run_clean;
pub use compare::run_compare;
pub use status::run_status;
