//! Plain ` | `-separated rendering for reading tables in a terminal.

use crate::types::Table;

/// Cell separator for plain output
pub const SEPARATOR: &str = " | ";

/// Render one line per row, cells joined by [`SEPARATOR`].
pub fn render_delimited(table: &Table) -> String {
    let mut output = String::new();
    for row in table.rows() {
        let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        output.push_str(&cells.join(SEPARATOR));
        output.push('\n');
    }
    output
}
