/// Fixture databases for unit tests
///
/// Builds SQLite files with the skeleton database schema in a temporary
/// directory, plus helpers to populate them.
use rusqlite::{Connection, params};
use std::path::PathBuf;
use tempfile::TempDir;

pub const SCHEMA: &str = "
    CREATE TABLE Polyhedrons (PolyhedronID INTEGER PRIMARY KEY, description TEXT, created INTEGER);
    CREATE TABLE Vertices (PolyhedronID INTEGER NOT NULL, VID INTEGER NOT NULL, PointID INTEGER,
        PRIMARY KEY (PolyhedronID, VID));
    CREATE TABLE Edges (PolyhedronID INTEGER NOT NULL, EID INTEGER NOT NULL, VID_SRC INTEGER,
        VID_DST INTEGER, FID_L INTEGER, FID_R INTEGER, PRIMARY KEY (PolyhedronID, EID));
    CREATE TABLE Facets (PolyhedronID INTEGER NOT NULL, FID INTEGER NOT NULL, PlaneID INTEGER,
        PRIMARY KEY (PolyhedronID, FID));
    CREATE TABLE StraightSkeletons (SkelID INTEGER PRIMARY KEY, PolyhedronID INTEGER, config TEXT,
        description TEXT, created INTEGER);
    CREATE TABLE Nodes (SkelID INTEGER NOT NULL, NID INTEGER NOT NULL, PointID INTEGER, offset REAL,
        PRIMARY KEY (SkelID, NID));
    CREATE TABLE Arcs (SkelID INTEGER NOT NULL, AID INTEGER NOT NULL, NID_SRC INTEGER, NID_DST INTEGER,
        PRIMARY KEY (SkelID, AID));
    CREATE TABLE Sheets (SkelID INTEGER NOT NULL, SID INTEGER NOT NULL, PRIMARY KEY (SkelID, SID));
    CREATE TABLE Events (SkelID INTEGER NOT NULL, EventID INTEGER NOT NULL, etype INTEGER, NID INTEGER,
        PRIMARY KEY (SkelID, EventID));
";

/// Create an empty skeleton database and keep a writable connection to it
pub fn create_database(dir: &TempDir) -> (PathBuf, Connection) {
    let path = dir.path().join("skeldata3d.db3");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(SCHEMA).unwrap();
    (path, conn)
}

/// Insert `ids` into a dependent table owned by `owner`
pub fn insert_owned(conn: &Connection, table: &str, owner_col: &str, id_col: &str, owner: i64, ids: &[i64]) {
    let sql = format!("INSERT INTO {} ({}, {}) VALUES (?1, ?2)", table, owner_col, id_col);
    for id in ids {
        conn.execute(&sql, params![owner, id]).unwrap();
    }
}

/// Append one event per entry of `etypes` to a skeleton
pub fn insert_events(conn: &Connection, skel_id: i64, etypes: &[i64]) {
    let start: i64 = conn
        .query_row("SELECT COALESCE(MAX(EventID), 0) FROM Events WHERE SkelID=?1", params![skel_id], |r| r.get(0))
        .unwrap();
    for (i, etype) in etypes.iter().enumerate() {
        conn.execute(
            "INSERT INTO Events (SkelID, EventID, etype) VALUES (?1, ?2, ?3)",
            params![skel_id, start + i as i64 + 1, etype],
        )
        .unwrap();
    }
}

/// A cube: 8 vertices, 12 edges, 6 facets, loaded from cube.off
pub fn add_cube(conn: &Connection, id: i64) {
    conn.execute(
        "INSERT INTO Polyhedrons (PolyhedronID, description) VALUES (?1, ?2)",
        params![id, "OBJFile::load(filename='../res/polyhedrons/cube.off'; ) "],
    )
    .unwrap();
    insert_owned(conn, "Vertices", "PolyhedronID", "VID", id, &(1..=8).collect::<Vec<_>>());
    insert_owned(conn, "Edges", "PolyhedronID", "EID", id, &(1..=12).collect::<Vec<_>>());
    insert_owned(conn, "Facets", "PolyhedronID", "FID", id, &(1..=6).collect::<Vec<_>>());
}

/// A skeleton of `polyhedron_id` with the given topology counts
pub fn add_skeleton(conn: &Connection, skel_id: i64, polyhedron_id: i64, config: &str, description: &str, counts: [i64; 3]) {
    conn.execute(
        "INSERT INTO StraightSkeletons (SkelID, PolyhedronID, config, description) VALUES (?1, ?2, ?3, ?4)",
        params![skel_id, polyhedron_id, config, description],
    )
    .unwrap();
    let [nodes, arcs, sheets] = counts;
    insert_owned(conn, "Nodes", "SkelID", "NID", skel_id, &(1..=nodes).collect::<Vec<_>>());
    insert_owned(conn, "Arcs", "SkelID", "AID", skel_id, &(1..=arcs).collect::<Vec<_>>());
    insert_owned(conn, "Sheets", "SkelID", "SID", skel_id, &(1..=sheets).collect::<Vec<_>>());
}
