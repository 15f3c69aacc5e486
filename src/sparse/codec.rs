//! Dense grid <-> sparse record list conversion.

use std::collections::HashSet;

use crate::board::grid::{Grid, EMPTY};
use crate::error::SparseError;

use super::record::{Record, RecordList};

/// Largest grid, in cells, that `decode` will allocate from a header
/// (1 GiB of `u32` cells).
pub const MAX_DECODE_CELLS: u64 = 1 << 28;

/// Encodes a grid into a record list.
///
/// Cells are scanned row by row, left to right; each non-zero cell becomes
/// one record. The header carries the grid dimensions and the number of
/// cell records.
pub fn encode(grid: &Grid) -> RecordList {
    let mut list = RecordList::with_capacity(grid.rows(), grid.cols(), grid.count_non_zero());
    for (row, col, value) in grid.iter_non_zero() {
        list.push(Record::new(row, col, value));
    }
    list
}

/// Decodes a record list back into a dense grid.
///
/// Every cell record must lie inside the header dimensions, carry a non-zero
/// value and address a distinct cell. The result does not depend on record
/// order. Headers declaring more than [`MAX_DECODE_CELLS`] cells, or a grid
/// that cannot be allocated, are rejected as malformed.
pub fn decode(records: &RecordList) -> Result<Grid, SparseError> {
    let (rows, cols) = (records.rows(), records.cols());
    let cells = u64::from(rows) * u64::from(cols);
    if cells > MAX_DECODE_CELLS {
        return Err(SparseError::MalformedRecordList(format!(
            "header declares {}x{} grid, limit is {} cells",
            rows, cols, MAX_DECODE_CELLS
        )));
    }
    let mut grid = Grid::try_new(rows, cols)
        .map_err(|e| SparseError::MalformedRecordList(format!("header: {}", e)))?;
    let mut seen = HashSet::with_capacity(records.cells().len());

    for record in records.cells() {
        let Record { row, col, value } = *record;
        if value == EMPTY {
            return Err(SparseError::MalformedRecordList(format!(
                "record ({}, {}) stores an empty cell",
                row, col
            )));
        }
        if !seen.insert((row, col)) {
            return Err(SparseError::MalformedRecordList(format!(
                "duplicate record for cell ({}, {})",
                row, col
            )));
        }
        if !grid.set(row, col, value) {
            return Err(SparseError::OutOfBoundsRecord {
                row,
                col,
                rows,
                cols,
            });
        }
    }

    Ok(grid)
}

/// Decodes a raw record slice, header first.
///
/// Convenience for callers holding records from another source; validates
/// the header the same way [`RecordList::try_from`] does.
pub fn decode_records(records: &[Record]) -> Result<Grid, SparseError> {
    let list = RecordList::try_from(records.to_vec())?;
    decode(&list)
}
