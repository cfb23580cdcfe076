//! Column-level rewrites of a [`Table`].
//!
//! Both transforms return a new table and apply to every row, header
//! included.

use crate::error::StatsError;
use crate::types::{Cell, Table};
use regex::Regex;

/// Substitute `pattern` with `replacement` in the text cell at `column` of every row.
///
/// `replacement` uses regex expansion syntax (`${1}` for the first group).
/// Cells the pattern does not match, and non-text cells, are copied as-is.
pub fn rewrite_column(table: &Table, column: usize, pattern: &Regex, replacement: &str) -> Result<Table, StatsError> {
    let mut rows = Vec::with_capacity(table.len());
    for (row_idx, row) in table.rows().iter().enumerate() {
        let mut row_c = row.clone();
        let cell = row_c
            .get_mut(column)
            .ok_or(StatsError::ColumnOutOfRange { row: row_idx, column, width: row.len() })?;
        if let Some(text) = cell.as_text() {
            let replaced = pattern.replace_all(text, replacement).into_owned();
            *cell = Cell::Text(replaced);
        }
        rows.push(row_c);
    }
    Ok(Table::from_rows(rows))
}

/// Keep only the cells at `columns`, in that order, for every row.
///
/// Indices may repeat or reorder columns. An index past the end of any row
/// is an error.
pub fn project_columns(table: &Table, columns: &[usize]) -> Result<Table, StatsError> {
    let mut rows = Vec::with_capacity(table.len());
    for (row_idx, row) in table.rows().iter().enumerate() {
        let row_c = columns
            .iter()
            .map(|&column| {
                row.get(column)
                    .cloned()
                    .ok_or(StatsError::ColumnOutOfRange { row: row_idx, column, width: row.len() })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row_c);
    }
    Ok(Table::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::with_header(["id", "description", "count"]);
        table.push_row(vec![Cell::Integer(1), Cell::from("a; time=1.5; b"), Cell::Integer(8)]);
        table.push_row(vec![Cell::Integer(2), Cell::from("no timing"), Cell::Integer(12)]);
        table
    }

    #[test]
    fn test_rewrite_column_extracts_group() {
        let pattern = Regex::new(r".*time=([^;]*);.*").unwrap();
        let table = rewrite_column(&sample(), 1, &pattern, "${1}").unwrap();
        assert_eq!(table.rows()[1][1], Cell::from("1.5"));
    }

    #[test]
    fn test_rewrite_column_leaves_non_matching_cells() {
        let pattern = Regex::new(r".*time=([^;]*);.*").unwrap();
        let before = sample();
        let after = rewrite_column(&before, 1, &pattern, "${1}").unwrap();

        // Header and the unmatched row pass through
        assert_eq!(after.rows()[0], before.rows()[0]);
        assert_eq!(after.rows()[2], before.rows()[2]);
    }

    #[test]
    fn test_rewrite_column_touches_only_target_column() {
        let pattern = Regex::new(r"\d").unwrap();
        let before = sample();
        let after = rewrite_column(&before, 1, &pattern, "#").unwrap();

        for (old, new) in before.rows().iter().zip(after.rows()) {
            assert_eq!(old[0], new[0]);
            assert_eq!(old[2], new[2]);
        }
        assert_eq!(after.rows()[1][1], Cell::from("a; time=#.#; b"));
    }

    #[test]
    fn test_rewrite_column_applies_to_header() {
        let pattern = Regex::new(r"^desc(.*)$").unwrap();
        let after = rewrite_column(&sample(), 1, &pattern, "${1}").unwrap();
        assert_eq!(after.rows()[0][1], Cell::from("ription"));
    }

    #[test]
    fn test_rewrite_column_out_of_range() {
        let pattern = Regex::new("x").unwrap();
        let err = rewrite_column(&sample(), 3, &pattern, "y").unwrap_err();
        assert!(matches!(err, StatsError::ColumnOutOfRange { row: 0, column: 3, width: 3 }));
    }

    #[test]
    fn test_project_columns_reorders() {
        let table = project_columns(&sample(), &[2, 0]).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[0], vec![Cell::from("count"), Cell::from("id")]);
        assert_eq!(table.rows()[1], vec![Cell::Integer(8), Cell::Integer(1)]);
        assert_eq!(table.rows()[2], vec![Cell::Integer(12), Cell::Integer(2)]);
    }

    #[test]
    fn test_project_columns_allows_repeats() {
        let table = project_columns(&sample(), &[0, 0, 1]).unwrap();
        assert_eq!(table.width(), 3);
        assert_eq!(table.rows()[2][0], table.rows()[2][1]);
    }

    #[test]
    fn test_project_columns_out_of_range() {
        let err = project_columns(&sample(), &[0, 5]).unwrap_err();
        assert!(matches!(err, StatsError::ColumnOutOfRange { column: 5, .. }));
    }
}
