/// Error type shared by the query, transform and render stages
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    /// The database path does not name an existing file
    #[error("Database {} does not exist.", .0.display())]
    DatabaseMissing(PathBuf),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("column {column} out of range in row {row} ({width} cells)")]
    ColumnOutOfRange { row: usize, column: usize, width: usize },

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
