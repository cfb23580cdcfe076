/// Read-only queries against a skeleton database
///
/// Each top-level query opens its own connection, lists the owning records
/// in ascending id order and issues one count query per dependent table.
use crate::error::StatsError;
use crate::types::{Cell, EventHistogram, SkeletonRecord, SolidRecord, Table};
use log::{debug, warn};
use rusqlite::types::Value;
use rusqlite::{Connection, OpenFlags, params};
use std::path::Path;

const SELECT_POLYHEDRONS: &str = "SELECT PolyhedronID, description FROM Polyhedrons ORDER BY PolyhedronID ASC";
const COUNT_VERTICES: &str = "SELECT COUNT(VID) FROM Vertices WHERE PolyhedronID=?1";
const COUNT_EDGES: &str = "SELECT COUNT(EID) FROM Edges WHERE PolyhedronID=?1";
const COUNT_FACETS: &str = "SELECT COUNT(FID) FROM Facets WHERE PolyhedronID=?1";

const SELECT_SKELETONS: &str =
    "SELECT SkelID, PolyhedronID, config, description FROM StraightSkeletons ORDER BY SkelID ASC";
const COUNT_NODES: &str = "SELECT COUNT(NID) FROM Nodes WHERE SkelID=?1";
const COUNT_ARCS: &str = "SELECT COUNT(AID) FROM Arcs WHERE SkelID=?1";
const COUNT_SHEETS: &str = "SELECT COUNT(SID) FROM Sheets WHERE SkelID=?1";
const COUNT_EVENTS_BY_TYPE: &str = "SELECT etype, COUNT(etype) FROM Events WHERE SkelID=?1 \
     GROUP BY SkelID, etype ORDER BY SkelID, etype ASC";

/// Open a database without write access
fn open_read_only(database: &Path) -> Result<Connection, StatsError> {
    debug!("Opening {:?} read-only", database);
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    Ok(Connection::open_with_flags(database, flags)?)
}

/// Run a `SELECT COUNT(..) ... WHERE owner=?1` query
fn count_owned(conn: &Connection, sql: &str, owner: i64) -> Result<i64, StatsError> {
    let mut stmt = conn.prepare_cached(sql)?;
    Ok(stmt.query_row(params![owner], |row| row.get(0))?)
}

/// Fold grouped `(type code, count)` pairs into a histogram.
///
/// Codes that never occur keep a zero count; codes outside the histogram
/// are skipped.
pub fn fold_event_counts<I>(skel_id: i64, counts: I) -> EventHistogram
where
    I: IntoIterator<Item = (i64, i64)>,
{
    let mut events = EventHistogram::default();
    for (code, count) in counts {
        if !events.record(code, count) {
            warn!("Skeleton {}: ignoring {} events of unknown type {}", skel_id, count, code);
        }
    }
    events
}

/// Load every polyhedron with its vertex, edge and facet counts
pub fn fetch_solids(conn: &Connection) -> Result<Vec<SolidRecord>, StatsError> {
    let mut stmt = conn.prepare(SELECT_POLYHEDRONS)?;
    let owners = stmt
        .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, Value>(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    let mut solids = Vec::with_capacity(owners.len());
    for (id, description) in owners {
        solids.push(SolidRecord {
            id,
            description: Cell::from(description),
            vertices: count_owned(conn, COUNT_VERTICES, id)?,
            edges: count_owned(conn, COUNT_EDGES, id)?,
            facets: count_owned(conn, COUNT_FACETS, id)?,
        });
    }

    debug!("Loaded {} polyhedrons", solids.len());
    Ok(solids)
}

/// Load every straight skeleton with topology counts and event histogram
pub fn fetch_skeletons(conn: &Connection) -> Result<Vec<SkeletonRecord>, StatsError> {
    let mut stmt = conn.prepare(SELECT_SKELETONS)?;
    let owners = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, Value>(1)?,
                row.get::<_, Value>(2)?,
                row.get::<_, Value>(3)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut events_stmt = conn.prepare(COUNT_EVENTS_BY_TYPE)?;
    let mut skeletons = Vec::with_capacity(owners.len());
    for (id, polyhedron_id, config, description) in owners {
        // NULL etype rows form their own group and are not a type code
        let grouped = events_stmt
            .query_map(params![id], |row| Ok((row.get::<_, Option<i64>>(0)?, row.get::<_, i64>(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        let events = fold_event_counts(id, grouped.into_iter().filter_map(|(code, count)| code.map(|c| (c, count))));

        debug!("Skeleton {}: {} events", id, events.slots().iter().sum::<i64>());
        skeletons.push(SkeletonRecord {
            id,
            polyhedron_id: Cell::from(polyhedron_id),
            config: Cell::from(config),
            description: Cell::from(description),
            nodes: count_owned(conn, COUNT_NODES, id)?,
            arcs: count_owned(conn, COUNT_ARCS, id)?,
            sheets: count_owned(conn, COUNT_SHEETS, id)?,
            events,
        });
    }

    debug!("Loaded {} straight skeletons", skeletons.len());
    Ok(skeletons)
}

/// Table of polyhedrons: `[PolyhedronID, description, Vertices, Edges, Facets]`
pub fn read_solids(database: &Path) -> Result<Table, StatsError> {
    let conn = open_read_only(database)?;
    let mut table = Table::with_header(SolidRecord::HEADER);
    for solid in fetch_solids(&conn)? {
        table.push_row(solid.to_row());
    }
    Ok(table)
}

/// Table of straight skeletons with counts and relabeled event counters
pub fn read_skeletons(database: &Path) -> Result<Table, StatsError> {
    let conn = open_read_only(database)?;
    let mut table = Table::with_header(SkeletonRecord::header());
    for skeleton in fetch_skeletons(&conn)? {
        table.push_row(skeleton.to_row());
    }
    Ok(table)
}

#[cfg(test)]
#[path = "db_test.rs"]
mod db_test;
