//! Shared output rendering for listing commands.
//!
//! Every listing command supports the same four formats (table, JSON, CSV,
//! TSV). Commands describe their records through the [`Listing`] trait and
//! the writers here do the rendering, so column handling stays identical
//! across commands.

use crate::error::CliError;
use clap::ValueEnum;
use std::io::Write;

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl From<huddle::config::OutputFormat> for OutputFormat {
    fn from(format: huddle::config::OutputFormat) -> Self {
        match format {
            huddle::config::OutputFormat::Table => Self::Table,
            huddle::config::OutputFormat::Json => Self::Json,
            huddle::config::OutputFormat::Csv => Self::Csv,
            huddle::config::OutputFormat::Tsv => Self::Tsv,
        }
    }
}

/// Pick the effective output format.
///
/// Priority: command flag (or its environment variable) > configured
/// `output_format` > table.
pub fn resolve_format(flag: Option<OutputFormat>, config: &huddle::Config) -> OutputFormat {
    flag.or_else(|| config.output_format.map(OutputFormat::from))
        .unwrap_or(OutputFormat::Table)
}

/// A record that listing commands can render in any output format.
pub trait Listing {
    /// Column names, in render order.
    const COLUMNS: &'static [&'static str];

    /// One cell per column. Empty cells are shown as `-` in table output
    /// and stay empty in delimited output.
    fn row(&self) -> Vec<String>;

    /// JSON object for this record.
    fn json(&self) -> serde_json::Value;
}

/// Render records to stdout in the requested format.
pub fn print_listing<T: Listing>(format: OutputFormat, records: &[T]) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => print_table(records),
        OutputFormat::Json => print_json(records),
        OutputFormat::Csv => print_delimited(records, b','),
        OutputFormat::Tsv => print_delimited(records, b'\t'),
    }
}

/// Render records as a human-readable table.
fn print_table<T: Listing>(records: &[T]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    // Print header (uppercase for table display)
    let header_line = T::COLUMNS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for record in records {
        let line = record
            .row()
            .into_iter()
            .map(|cell| if cell.is_empty() { "-".to_string() } else { cell })
            .collect::<Vec<_>>()
            .join("\t");
        writeln!(handle, "{line}")?;
    }

    Ok(())
}

/// Render records as a JSON array.
fn print_json<T: Listing>(records: &[T]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = records.iter().map(Listing::json).collect();
    serde_json::to_writer_pretty(&mut handle, &json_data)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;

    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Render records as delimited output (CSV or TSV).
fn print_delimited<T: Listing>(records: &[T], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(T::COLUMNS).map_err(csv_error)?;

    for record in records {
        writer.write_record(record.row()).map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
