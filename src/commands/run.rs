use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::config::{default_count_prompt, default_elements_prompt};
use crate::io::{create_writer, write_prompt, OutputFormat, Report, TokenScanner};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub prompts_enabled: bool,
    pub count_prompt: String,
    pub elements_prompt: String,
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            prompts_enabled: true,
            count_prompt: default_count_prompt(),
            elements_prompt: default_elements_prompt(),
            format: OutputFormat::Terminal,
        }
    }
}

/// Prompt for and read the sequence, then write its report to `output`.
pub fn run<R: BufRead, W: Write>(config: &RunConfig, input: R, mut output: W) -> Result<Report> {
    let mut scanner = TokenScanner::new(input);

    if config.prompts_enabled {
        write_prompt(&mut output, &config.count_prompt)?;
    }
    let count = scanner
        .read_count()
        .context("Failed to read the number of elements")?;
    log::debug!("Reading {} elements", count);

    if config.prompts_enabled {
        write_prompt(&mut output, &config.elements_prompt)?;
    }
    let elements = scanner
        .read_elements(count)
        .context("Failed to read the elements")?;

    let report = Report::from_elements(&elements);
    log::info!(
        "{} elements, {} distinct, second largest {:?}",
        report.count,
        report.distinct,
        report.second_largest
    );

    create_writer(config.format, &mut output).write_report(&report)?;
    Ok(report)
}
