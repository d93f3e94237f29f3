//! Setup and initialization functions for CLI
//!
//! Logging setup and merging of command-line flags over file configuration.

use log::LevelFilter;

use super::args::Cli;
use crate::commands::run::RunConfig;
use crate::config::SecondmaxConfig;
use crate::io::OutputFormat;

/// Map `-v` occurrences to a log level
pub fn log_level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize stderr logging once at startup. `RUST_LOG` wins when set.
pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log_level_for(verbosity))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr);

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if let Err(e) = builder.try_init() {
        eprintln!("Note: Logger already configured: {}", e);
    }
}

/// Pure function to merge CLI overrides into the loaded configuration
pub fn build_run_config(cli: &Cli, config: SecondmaxConfig) -> RunConfig {
    let SecondmaxConfig { prompts, output } = config;
    let format = cli.format.map(Into::into).unwrap_or(output.format);

    RunConfig {
        // JSON on stdout must stay parseable
        prompts_enabled: prompts.enabled && !cli.no_prompt && format != OutputFormat::Json,
        count_prompt: prompts.count,
        elements_prompt: prompts.elements,
        format,
    }
}
