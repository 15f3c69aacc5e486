//! Sparse record types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SparseError;

/// A `(row, col, value)` triple. The first record of a list reuses the same
/// shape for the header `(rows, cols, count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub row: u32,
    pub col: u32,
    pub value: u32,
}

impl Record {
    pub const fn new(row: u32, col: u32, value: u32) -> Self {
        Record { row, col, value }
    }
}

impl From<(u32, u32, u32)> for Record {
    fn from((row, col, value): (u32, u32, u32)) -> Self {
        Record::new(row, col, value)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.row, self.col, self.value)
    }
}

/// Header record followed by cell records.
///
/// The header's third field always equals the number of cell records; every
/// constructor maintains this, so a `RecordList` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Record>", into = "Vec<Record>")]
pub struct RecordList {
    records: Vec<Record>,
}

impl RecordList {
    /// Creates a list holding only the header for a `rows x cols` grid.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self::with_capacity(rows, cols, 0)
    }

    /// Like [`RecordList::new`], reserving room for `cells` cell records.
    pub fn with_capacity(rows: u32, cols: u32, cells: usize) -> Self {
        let mut records = Vec::with_capacity(cells + 1);
        records.push(Record::new(rows, cols, 0));
        RecordList { records }
    }

    /// Appends a cell record and bumps the header count.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
        self.records[0].value += 1;
    }

    pub fn header(&self) -> Record {
        self.records[0]
    }

    pub fn rows(&self) -> u32 {
        self.records[0].row
    }

    pub fn cols(&self) -> u32 {
        self.records[0].col
    }

    /// Number of cell records as declared by the header.
    pub fn count(&self) -> u32 {
        self.records[0].value
    }

    /// Cell records, excluding the header.
    pub fn cells(&self) -> &[Record] {
        &self.records[1..]
    }

    /// All records, header first.
    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    /// Total number of records including the header (never zero).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// A list always holds its header, so this is never true.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn into_vec(self) -> Vec<Record> {
        self.records
    }
}

impl TryFrom<Vec<Record>> for RecordList {
    type Error = SparseError;

    /// Validates a raw record vector: it needs a header, and the header count
    /// must match the number of records after it.
    fn try_from(records: Vec<Record>) -> Result<Self, Self::Error> {
        let header = records
            .first()
            .copied()
            .ok_or_else(|| SparseError::MalformedRecordList("missing header record".into()))?;
        let actual = records.len() - 1;
        if header.value as usize != actual {
            return Err(SparseError::MalformedRecordList(format!(
                "header declares {} records, found {}",
                header.value, actual
            )));
        }
        Ok(RecordList { records })
    }
}

impl From<RecordList> for Vec<Record> {
    fn from(list: RecordList) -> Self {
        list.records
    }
}

/// Same layout as the persisted file: one tab-separated record per line.
impl fmt::Display for RecordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}
