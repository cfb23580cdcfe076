//! JSON rendering: header labels and data rows, column order preserved.

use crate::types::{Cell, Table};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonTable<'a> {
    columns: Vec<String>,
    rows: &'a [Vec<Cell>],
}

/// Render a table as `{"columns": [...], "rows": [[...], ...]}`
pub fn render_json(table: &Table) -> Result<String, serde_json::Error> {
    let columns = table.header().map(|h| h.iter().map(|c| c.to_string()).collect()).unwrap_or_default();
    let doc = JsonTable { columns, rows: table.data_rows() };
    let mut output = serde_json::to_string_pretty(&doc)?;
    output.push('\n');
    Ok(output)
}
