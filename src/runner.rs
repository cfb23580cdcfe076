use crate::config::{self, ReportPlan};
use crate::db;
use crate::error::StatsError;
use crate::report::TableWriter;
use crate::transform;
use log::debug;
use std::io::Write;

/// Produce every report table for the plan, in order:
///
/// 1. polyhedrons, description reduced to the file name
/// 2. skeleton summary (PolyhedronID, Nodes, Arcs, Sheets, timing)
/// 3. skeleton event counters
/// 4. the full skeleton table, only with `full_skeletons`
///
/// The polyhedron table is written before the skeletons are queried.
pub fn run_report<W: Write>(plan: &ReportPlan, writer: &mut TableWriter<W>) -> Result<(), StatsError> {
    debug!("Reading polyhedrons from {:?}", plan.database);
    let solids = db::read_solids(&plan.database)?;
    let solids = config::solid_description_rewrite().apply(&solids)?;
    writer.write_table(&solids)?;

    debug!("Reading straight skeletons from {:?}", plan.database);
    let skeletons = db::read_skeletons(&plan.database)?;
    let skeletons = config::skeleton_description_rewrite().apply(&skeletons)?;

    writer.write_table(&transform::project_columns(&skeletons, &config::SKELETON_SUMMARY_COLUMNS)?)?;
    writer.write_table(&transform::project_columns(&skeletons, &config::SKELETON_EVENT_COLUMNS)?)?;

    if plan.full_skeletons {
        writer.write_table(&skeletons)?;
    }

    debug!("Wrote {} tables", writer.tables_written());
    Ok(())
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;
