//! Record list persistence.
//!
//! The file holds one record per line, header first, each line three
//! unsigned integers separated by tabs:
//!
//! ```text
//! <rows>\t<cols>\t<count>
//! <row>\t<col>\t<value>
//! ```
//!
//! Readers grow the list until end of input and then check the header count
//! against the records actually read, so no external length is needed.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::SparseError;
use crate::sparse::record::{Record, RecordList};

/// Default record file, relative to the working directory.
pub const DEFAULT_PATH: &str = "sparsearray.dat";

/// Field separator within a line.
const DELIMITER: char = '\t';

/// Writes every record as a tab-separated line, in list order.
pub fn write_records<W: Write>(records: &RecordList, out: &mut W) -> std::io::Result<()> {
    for record in records.as_slice() {
        writeln!(out, "{}", record)?;
    }
    out.flush()
}

/// Parses one field of a record line.
fn parse_field(field: &str, name: &str, line: usize) -> Result<u32, SparseError> {
    field.parse().map_err(|_| SparseError::ParseFailure {
        line,
        reason: format!("invalid {} '{}'", name, field),
    })
}

/// Parses a single line into a record. `line` is 1-based and only used for
/// error reporting.
fn parse_line(text: &str, line: usize) -> Result<Record, SparseError> {
    let text = text.strip_suffix('\r').unwrap_or(text);
    // Older writers terminated every field, including the last, with a tab.
    let text = text.strip_suffix(DELIMITER).unwrap_or(text);

    let fields: Vec<&str> = text.split(DELIMITER).collect();
    if fields.len() != 3 {
        return Err(SparseError::ParseFailure {
            line,
            reason: format!("expected 3 tab-separated fields, got {}", fields.len()),
        });
    }

    Ok(Record {
        row: parse_field(fields[0], "row", line)?,
        col: parse_field(fields[1], "column", line)?,
        value: parse_field(fields[2], "value", line)?,
    })
}

/// Reads records until end of input and validates the header count.
///
/// I/O faults are reported against `path`, which is only used for messages.
/// A line that is not valid UTF-8 is a parse failure, not an I/O fault.
pub fn read_records<R: BufRead>(input: R, path: &Path) -> Result<RecordList, SparseError> {
    let mut records = Vec::new();
    for (i, bytes) in input.split(b'\n').enumerate() {
        let bytes = bytes.map_err(|e| SparseError::io(path, e))?;
        let line = std::str::from_utf8(&bytes).map_err(|e| SparseError::ParseFailure {
            line: i + 1,
            reason: format!("invalid UTF-8: {}", e),
        })?;
        records.push(parse_line(line, i + 1)?);
    }
    RecordList::try_from(records)
}

/// Saves a record list to `path`, replacing any existing file.
///
/// Returns the path written so it can be handed straight to [`load`].
pub fn save(records: &RecordList, path: impl AsRef<Path>) -> Result<PathBuf, SparseError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| SparseError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_records(records, &mut writer).map_err(|e| SparseError::io(path, e))?;
    debug!("saved {} records to {}", records.len(), path.display());
    Ok(path.to_path_buf())
}

/// Loads a record list from `path`.
pub fn load(path: impl AsRef<Path>) -> Result<RecordList, SparseError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SparseError::io(path, e))?;
    let records = read_records(BufReader::new(file), path)?;
    debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Loads a record list and checks that it holds exactly `expected_len`
/// records, header included.
pub fn load_expecting(
    path: impl AsRef<Path>,
    expected_len: usize,
) -> Result<RecordList, SparseError> {
    let records = load(path)?;
    if records.len() != expected_len {
        return Err(SparseError::MalformedRecordList(format!(
            "expected {} records, file holds {}",
            expected_len,
            records.len()
        )));
    }
    Ok(records)
}
