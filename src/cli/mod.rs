//! CLI module for secondmax
//!
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod setup;

pub use args::{Cli, OutputFormatArg};
pub use setup::{build_run_config, init_logging, log_level_for};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    use clap::Parser;
    Cli::parse()
}
