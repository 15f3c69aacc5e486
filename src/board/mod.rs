//! Dense board representation.
//!
//! Contains the row-major grid type and helpers that build the positions
//! used by the command-line demo, tests and benches.

pub mod grid;
pub mod setup;

pub use grid::{Cell, Grid, BLACK, EMPTY, WHITE};
pub use setup::{demo_board, random_board, DEFAULT_SIZE};
