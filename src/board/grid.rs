//! Dense grid storage.
//!
//! A `Grid` holds every cell of a `rows x cols` board, zeros included, in a
//! single row-major vector.

use std::fmt;

use crate::error::SparseError;

/// Value stored in a single cell. Zero means empty.
pub type Cell = u32;

/// An empty cell.
pub const EMPTY: Cell = 0;

/// A white stone.
pub const WHITE: Cell = 1;

/// A black stone.
pub const BLACK: Cell = 2;

/// Fixed-size two-dimensional board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-empty grid. Either dimension may be zero.
    pub fn new(rows: u32, cols: u32) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![EMPTY; rows as usize * cols as usize],
        }
    }

    /// Fallible [`Grid::new`] for dimensions that come from untrusted input.
    ///
    /// Fails with `GridTooLarge` when the cell count overflows `usize` or the
    /// allocation is refused, instead of panicking or aborting.
    pub fn try_new(rows: u32, cols: u32) -> Result<Self, SparseError> {
        let too_large = || SparseError::GridTooLarge {
            rows: rows.into(),
            cols: cols.into(),
        };
        let len = (rows as usize)
            .checked_mul(cols as usize)
            .ok_or_else(too_large)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large())?;
        cells.resize(len, EMPTY);
        Ok(Grid { rows, cols, cells })
    }

    /// Creates an all-empty square grid.
    pub fn square(size: u32) -> Self {
        Grid::new(size, size)
    }

    /// Builds a grid from nested rows. Every row must have the same length.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Result<Self, SparseError> {
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * width);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(SparseError::RaggedGrid {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        let too_large = || SparseError::GridTooLarge {
            rows: rows.len() as u64,
            cols: width as u64,
        };
        Ok(Grid {
            rows: u32::try_from(rows.len()).map_err(|_| too_large())?,
            cols: u32::try_from(width).map_err(|_| too_large())?,
            cells,
        })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Returns true if the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row as usize * self.cols as usize + col as usize)
        } else {
            None
        }
    }

    /// Returns the cell at `(row, col)`, or None when out of range.
    pub fn get(&self, row: u32, col: u32) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Writes a cell. Returns false (and leaves the grid untouched) when
    /// `(row, col)` is out of range.
    pub fn set(&mut self, row: u32, col: u32, value: Cell) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Number of cells holding a non-zero value.
    pub fn count_non_zero(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Iterates non-zero cells as `(row, col, value)` in row-major order.
    pub fn iter_non_zero(&self) -> impl Iterator<Item = (u32, u32, Cell)> + '_ {
        let cols = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != EMPTY)
            .map(move |(i, &v)| ((i / cols) as u32, (i % cols) as u32, v))
    }

    /// Iterates the grid one row slice at a time.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() panics on zero; a zero-width grid has no cells anyway.
        self.cells.chunks(self.cols.max(1) as usize)
    }
}

/// Tab-separated rows, one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "(empty {}x{} grid)", self.rows, self.cols);
        }
        for row in self.row_slices() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
