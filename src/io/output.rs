use crate::finder::{TopTwo, NOT_FOUND};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Terminal,
}

/// Outcome of one run over an input sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Number of elements read
    pub count: usize,
    /// Number of distinct elements
    pub distinct: usize,
    /// `None` when fewer than two distinct values exist
    pub second_largest: Option<i64>,
    /// `second_largest`, or the sentinel
    pub result: i64,
}

impl Report {
    pub fn from_elements(elements: &[i64]) -> Self {
        let top: TopTwo<i64> = elements.iter().copied().collect();
        let second_largest = top.second();

        Self {
            count: elements.len(),
            distinct: top.distinct_count(),
            second_largest,
            result: second_largest.unwrap_or(NOT_FOUND),
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        writeln!(self.writer, "Second largest unique number: {}", report.result)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
