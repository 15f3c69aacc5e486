//! Sparse board representation.
//!
//! A board is stored as a header record `(rows, cols, count)` followed by one
//! `(row, col, value)` record per non-zero cell. `codec` converts between
//! this form and the dense [`Grid`](crate::board::Grid).

pub mod codec;
pub mod record;

pub use codec::{decode, encode};
pub use record::{Record, RecordList};
