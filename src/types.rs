/// Core data structures for skeleton statistics
///
/// This module defines the tabular value passed between the query, transform
/// and render stages, plus the solid and skeleton records it is built from.
use std::fmt;

/// Number of histogram slots; event type codes index directly into it.
pub const EVENT_SLOTS: usize = 15;

/// Storage index of each event counter, in report column order.
///
/// Codes 2..=7 are reported in order, then the vertex-edge contact (10)
/// ahead of the two vertex-vertex contacts (8, 9), then 11..=14.
pub const REPORT_EVENT_ORDER: [usize; 13] = [2, 3, 4, 5, 6, 7, 10, 8, 9, 11, 12, 13, 14];

/// A single table cell, mirroring SQLite's dynamic value classes
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Cell {
    Integer(i64),
    Real(f64),
    Text(String),
    Null,
}

impl Cell {
    /// Borrow the text of a `Text` cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Integer(v) => write!(f, "{}", v),
            Cell::Real(v) => f.write_str(&format_real(*v)),
            Cell::Text(s) => f.write_str(s),
            Cell::Null => f.write_str("None"),
        }
    }
}

/// Shortest round-trip form of a real.
///
/// Scientific notation below 1e-4 and from 1e16 up, with a signed two-digit
/// exponent (`1e+16`, `1.5e-05`); integral values otherwise keep a `.0`.
fn format_real(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let magnitude = v.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{:e}", v);
        return match sci.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(d) => ('-', d),
                    None => ('+', exp),
                };
                format!("{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => sci,
        };
    }
    if v.fract() == 0.0 { format!("{:.1}", v) } else { format!("{}", v) }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Integer(v)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Real(v)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<rusqlite::types::Value> for Cell {
    fn from(value: rusqlite::types::Value) -> Self {
        use rusqlite::types::Value;
        match value {
            Value::Null => Cell::Null,
            Value::Integer(v) => Cell::Integer(v),
            Value::Real(v) => Cell::Real(v),
            Value::Text(s) => Cell::Text(s),
            Value::Blob(b) => Cell::Text(String::from_utf8_lossy(&b).into_owned()),
        }
    }
}

/// Header row plus data rows, all of the same width
///
/// Row 0 is the header. Transforms apply to every row, header included.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a table holding only a header row
    pub fn with_header<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let header = labels.into_iter().map(|l| Cell::Text(l.into())).collect();
        Self { rows: vec![header] }
    }

    /// Wrap already-built rows (row 0 is taken as the header)
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// All rows, header first
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn header(&self) -> Option<&[Cell]> {
        self.rows.first().map(|r| r.as_slice())
    }

    /// Rows after the header
    pub fn data_rows(&self) -> &[Vec<Cell>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Column count, taken from the header row
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    /// Number of rows including the header
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Event classes recorded while a straight skeleton is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    ConstOffset,
    /// 1 edge vanishes
    Edge,
    /// 2 edges vanish
    EdgeMerge,
    /// 3 edges vanish
    Triangle,
    /// 4 edges vanish
    DblEdgeMerge,
    /// 5 edges vanish
    DblTriangle,
    /// 6 edges vanish
    Tetrahedron,
    /// vertex-vertex contact I
    Vertex,
    /// vertex-vertex contact II
    FlipVertex,
    /// vertex-edge contact
    Surface,
    /// vertex-vertex-edge contact I
    PolyhedronSplit,
    /// vertex-vertex-edge contact II
    SplitMerge,
    /// edge-edge contact
    EdgeSplit,
    /// vertex-facet contact
    Pierce,
}

impl EventType {
    pub const ALL: [EventType; 14] = [
        EventType::ConstOffset,
        EventType::Edge,
        EventType::EdgeMerge,
        EventType::Triangle,
        EventType::DblEdgeMerge,
        EventType::DblTriangle,
        EventType::Tetrahedron,
        EventType::Vertex,
        EventType::FlipVertex,
        EventType::Surface,
        EventType::PolyhedronSplit,
        EventType::SplitMerge,
        EventType::EdgeSplit,
        EventType::Pierce,
    ];

    /// The `etype` value stored in the Events table
    pub fn code(&self) -> usize {
        match self {
            EventType::ConstOffset => 1,
            EventType::Edge => 2,
            EventType::EdgeMerge => 3,
            EventType::Triangle => 4,
            EventType::DblEdgeMerge => 5,
            EventType::DblTriangle => 6,
            EventType::Tetrahedron => 7,
            EventType::Vertex => 8,
            EventType::FlipVertex => 9,
            EventType::Surface => 10,
            EventType::PolyhedronSplit => 11,
            EventType::SplitMerge => 12,
            EventType::EdgeSplit => 13,
            EventType::Pierce => 14,
        }
    }

    pub fn from_code(code: usize) -> Option<EventType> {
        EventType::ALL.iter().copied().find(|t| t.code() == code)
    }

    /// Column label used in the skeleton report
    pub fn label(&self) -> &'static str {
        match self {
            EventType::ConstOffset => "C",
            EventType::Edge => "E1",
            EventType::EdgeMerge => "E2",
            EventType::Triangle => "E3",
            EventType::DblEdgeMerge => "E4",
            EventType::DblTriangle => "E5",
            EventType::Tetrahedron => "E6",
            EventType::Vertex => "V-V I",
            EventType::FlipVertex => "V-V II",
            EventType::Surface => "V-E",
            EventType::PolyhedronSplit => "V-V-E I",
            EventType::SplitMerge => "V-V-E II",
            EventType::EdgeSplit => "E-E",
            EventType::Pierce => "V-F",
        }
    }
}

/// Per-skeleton event counts, one slot per event type code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventHistogram {
    slots: [i64; EVENT_SLOTS],
}

impl EventHistogram {
    /// Store the count for one type code.
    ///
    /// Returns false (and stores nothing) for codes outside the histogram.
    pub fn record(&mut self, code: i64, count: i64) -> bool {
        match usize::try_from(code) {
            Ok(slot) if slot < EVENT_SLOTS => {
                self.slots[slot] = count;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, slot: usize) -> i64 {
        self.slots.get(slot).copied().unwrap_or(0)
    }

    pub fn slots(&self) -> &[i64; EVENT_SLOTS] {
        &self.slots
    }

    /// Counts in report column order (see `REPORT_EVENT_ORDER`)
    pub fn report_counts(&self) -> impl Iterator<Item = i64> + '_ {
        REPORT_EVENT_ORDER.iter().map(move |&slot| self.get(slot))
    }
}

/// A polyhedron with its topology counts
#[derive(Debug, Clone, PartialEq)]
pub struct SolidRecord {
    pub id: i64,
    pub description: Cell,
    pub vertices: i64,
    pub edges: i64,
    pub facets: i64,
}

impl SolidRecord {
    pub const HEADER: [&'static str; 5] = ["PolyhedronID", "description", "Vertices", "Edges", "Facets"];

    pub fn to_row(&self) -> Vec<Cell> {
        vec![
            Cell::Integer(self.id),
            self.description.clone(),
            Cell::Integer(self.vertices),
            Cell::Integer(self.edges),
            Cell::Integer(self.facets),
        ]
    }
}

/// A straight skeleton with its topology counts and event histogram
#[derive(Debug, Clone, PartialEq)]
pub struct SkeletonRecord {
    pub id: i64,
    /// Owning polyhedron; NULL for skeletons stored without one
    pub polyhedron_id: Cell,
    pub config: Cell,
    pub description: Cell,
    pub nodes: i64,
    pub arcs: i64,
    pub sheets: i64,
    pub events: EventHistogram,
}

impl SkeletonRecord {
    /// Header labels: seven record columns, then the event counters
    pub fn header() -> Vec<&'static str> {
        let mut labels = vec!["SkelID", "PolyhedronID", "config", "description", "Nodes", "Arcs", "Sheets"];
        labels.extend(REPORT_EVENT_ORDER.iter().filter_map(|&slot| EventType::from_code(slot)).map(|t| t.label()));
        labels
    }

    pub fn to_row(&self) -> Vec<Cell> {
        let mut row = vec![
            Cell::Integer(self.id),
            self.polyhedron_id.clone(),
            self.config.clone(),
            self.description.clone(),
            Cell::Integer(self.nodes),
            Cell::Integer(self.arcs),
            Cell::Integer(self.sheets),
        ];
        row.extend(self.events.report_counts().map(Cell::Integer));
        row
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
