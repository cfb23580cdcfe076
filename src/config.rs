/// Report configuration
///
/// This module handles:
/// - Building a ReportPlan from CLI arguments
/// - Checking that the database file exists
/// - The fixed description rewrites and column projections of the report
use crate::cli::CliArgs;
use crate::error::StatsError;
use crate::report::OutputFormat;
use crate::transform;
use crate::types::Table;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::path::PathBuf;

/// Database read when no path is given
pub const DEFAULT_DATABASE: &str = "skeldata3d.db3";

/// `description` column of the polyhedron table
pub const SOLID_DESCRIPTION_COLUMN: usize = 1;

/// `description` column of the skeleton table
pub const SKELETON_DESCRIPTION_COLUMN: usize = 3;

/// PolyhedronID, Nodes, Arcs, Sheets, description (the timing)
pub const SKELETON_SUMMARY_COLUMNS: [usize; 5] = [1, 4, 5, 6, 3];

/// PolyhedronID followed by the 13 event counters
pub const SKELETON_EVENT_COLUMNS: [usize; 14] = [1, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19];

lazy_static! {
    /// Polyhedron descriptions record the file the solid was loaded from
    static ref SOLID_FILENAME: Regex =
        Regex::new(r".*filename='../res/polyhedrons/([^;]*)';.*").expect("valid filename pattern");

    /// Skeleton descriptions record the computation time
    static ref SKELETON_TIME: Regex = Regex::new(r".*time=([^;]*);.*").expect("valid time pattern");
}

/// A regex substitution applied to one column of a table
#[derive(Debug, Clone, Copy)]
pub struct ColumnRewrite {
    pub column: usize,
    pub pattern: &'static Regex,
    pub replacement: &'static str,
}

impl ColumnRewrite {
    pub fn apply(&self, table: &Table) -> Result<Table, StatsError> {
        transform::rewrite_column(table, self.column, self.pattern, self.replacement)
    }
}

/// Reduce a polyhedron description to the bare file name
pub fn solid_description_rewrite() -> ColumnRewrite {
    ColumnRewrite { column: SOLID_DESCRIPTION_COLUMN, pattern: &SOLID_FILENAME, replacement: "${1}" }
}

/// Reduce a skeleton description to its timing value
pub fn skeleton_description_rewrite() -> ColumnRewrite {
    ColumnRewrite { column: SKELETON_DESCRIPTION_COLUMN, pattern: &SKELETON_TIME, replacement: "${1}" }
}

/// Everything a run needs, resolved from the command line
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPlan {
    pub database: PathBuf,
    pub format: OutputFormat,
    pub full_skeletons: bool,
}

/// Build a ReportPlan from CLI arguments.
///
/// Fails with `DatabaseMissing` unless the path names an existing file.
pub fn build_report_plan(args: &CliArgs) -> Result<ReportPlan, StatsError> {
    debug!("Building report plan for {:?}", args.database);

    if !args.database.is_file() {
        return Err(StatsError::DatabaseMissing(args.database.clone()));
    }

    Ok(ReportPlan { database: args.database.clone(), format: args.format, full_skeletons: args.full_skeletons })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
