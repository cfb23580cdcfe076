//! LaTeX `tabular` rendering.
//!
//! Every column is centered and ruled. Underscores are escaped; no other
//! LaTeX special characters are touched.

use crate::types::Table;

pub const COLUMN_SEPARATOR: &str = " & ";
pub const ROW_END: &str = " \\\\";

/// Escape characters LaTeX would otherwise interpret in cell text
pub fn escape(text: &str) -> String {
    text.replace('_', "\\_")
}

/// Render a ruled `tabular` sized to the header row's width.
///
/// Rows are assumed to match the header width.
pub fn render_typeset(table: &Table) -> String {
    let mut output = String::new();
    output.push_str(&format!("\\begin{{tabular}}{{{}|}}\n", "|c".repeat(table.width())));
    output.push_str("\\hline\n");
    for row in table.rows() {
        let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        output.push_str(&escape(&cells.join(COLUMN_SEPARATOR)));
        output.push_str(ROW_END);
        output.push('\n');
    }
    output.push_str("\\hline\n");
    output.push_str("\\end{tabular}\n");
    output
}
