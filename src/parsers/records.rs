use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use tracing::warn;

use crate::error::{Error, Result};
use crate::models::Record;

/// Lazy iterator over the parsed records of one session file.
///
/// Yields records in file append order. Empty or whitespace-only lines and
/// lines that fail to parse as JSON are skipped, never surfaced. The sequence
/// is finite and not restartable; a fresh read re-opens the source. Dropping
/// the iterator releases the underlying handle, so callers that stop early
/// (bounded scans, first-match searches) do not leak it.
#[derive(Debug)]
pub struct RecordIter {
    lines: Lines<BufReader<File>>,
}

impl Iterator for RecordIter {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    if let Some(record) = Record::parse_line(&line) {
                        return Some(record);
                    }
                }
                Err(err) => {
                    // A failing descriptor would keep failing; end the stream.
                    warn!(error = %err, "read error in session stream, stopping");
                    return None;
                }
            }
        }
    }
}

/// Open a session file as a record stream.
///
/// Only opening can fail - a missing file maps to
/// [`Error::SessionNotFound`], anything else to [`Error::Io`]. Per-line
/// errors after a successful open are swallowed.
pub fn read_records(path: &Path) -> Result<RecordIter> {
    let file = File::open(path).map_err(|err| Error::from_open(path, err))?;
    Ok(RecordIter { lines: BufReader::new(file).lines() })
}
