use anyhow::{Context, Result};
use secondmax::cli::{build_run_config, init_logging, parse_args};
use secondmax::commands::run;
use secondmax::config::load_config;

fn main() -> Result<()> {
    let cli = parse_args();
    init_logging(cli.verbosity);

    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let config = load_config(cli.config.as_deref(), &cwd)?;
    let run_config = build_run_config(&cli, config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(&run_config, stdin.lock(), stdout.lock())?;

    Ok(())
}
