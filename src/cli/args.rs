use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "secondmax")]
#[command(
    about = "Read a count and that many integers, then print the second-largest distinct value",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Do not print input prompts
    #[arg(long = "no-prompt")]
    pub no_prompt: bool,

    /// Configuration file (defaults to ./.secondmax.toml when present)
    #[arg(short, long, env = "SECONDMAX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Single human-readable line
    Terminal,
    /// Pretty-printed JSON report
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Terminal => OutputFormat::Terminal,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}
