//! Error type shared by the codec, the record store and the pipeline.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while encoding, decoding, saving or loading a board.
#[derive(Debug, thiserror::Error)]
pub enum SparseError {
    #[error("malformed record list: {0}")]
    MalformedRecordList(String),

    #[error("record ({row}, {col}) outside {rows}x{cols} grid")]
    OutOfBoundsRecord {
        row: u32,
        col: u32,
        rows: u32,
        cols: u32,
    },

    #[error("i/o failure on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: {reason}")]
    ParseFailure { line: usize, reason: String },

    #[error("ragged grid: row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid of {rows}x{cols} cells cannot be allocated")]
    GridTooLarge { rows: u64, cols: u64 },
}

impl SparseError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SparseError::Io {
            path: path.into(),
            source,
        }
    }
}
