//! Sparseboard library.
//!
//! Stores a board-game grid as a sparse list of `(row, col, value)` records
//! in a tab-separated text file and restores it again. Exposes the board,
//! codec, store and pipeline modules for the binary and integration tests.

pub mod board;
pub mod error;
pub mod pipeline;
pub mod sparse;
pub mod store;

pub use board::{Cell, Grid};
pub use error::SparseError;
pub use pipeline::{run, run_with, PipelineConfig, PipelineError, Stage};
pub use sparse::{decode, encode, Record, RecordList};
pub use store::{load, load_expecting, save};
