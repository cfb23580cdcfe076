//! Report rendering - turns a [`Table`] into text.
//!
//! # Module Organization
//!
//! - `latex` - LaTeX `tabular` output (the default)
//! - `delimited` - plain ` | `-separated lines
//! - `json` - column labels plus rows as JSON
//!
//! `TableWriter` writes rendered tables to any `std::io::Write` destination.

mod delimited;
mod json;
mod latex;

use crate::error::StatsError;
use crate::types::Table;
use clap::ValueEnum;
use std::io::Write;

pub use delimited::render_delimited;
pub use json::render_json;
pub use latex::render_typeset;

/// Output format for every table in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// LaTeX tabular environments
    #[default]
    Latex,
    /// Cells separated by " | "
    Delimited,
    /// One JSON document per table
    Json,
}

/// Render a table in the given format
pub fn render(table: &Table, format: OutputFormat) -> Result<String, StatsError> {
    Ok(match format {
        OutputFormat::Latex => render_typeset(table),
        OutputFormat::Delimited => render_delimited(table),
        OutputFormat::Json => render_json(table)?,
    })
}

/// Writer for rendered tables
pub struct TableWriter<W: Write> {
    writer: W,
    format: OutputFormat,
    tables_written: usize,
}

impl<W: Write> TableWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format, tables_written: 0 }
    }

    /// Render and write one table, flushing so earlier tables survive a later failure
    pub fn write_table(&mut self, table: &Table) -> Result<(), StatsError> {
        let text = render(table, self.format)?;
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        self.tables_written += 1;
        Ok(())
    }

    pub fn tables_written(&self) -> usize {
        self.tables_written
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}
