pub mod output;
pub mod scanner;

pub use output::{create_writer, JsonWriter, OutputFormat, OutputWriter, Report, TerminalWriter};
pub use scanner::TokenScanner;

use anyhow::Result;
use std::io::Write;

/// Write a prompt and flush so it shows before the next blocking read.
pub fn write_prompt<W: Write>(writer: &mut W, prompt: &str) -> Result<()> {
    writer.write_all(prompt.as_bytes())?;
    writer.flush()?;
    Ok(())
}
