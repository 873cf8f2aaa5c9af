//! Error types for the session viewer core.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures surfaced to callers of the core.
///
/// Malformed records are never represented here: a line that fails to parse
/// is skipped where it is read. Directory-level scans degrade to empty
/// listings instead of erroring, so only single-file operations produce these.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested session id or path has no corresponding file.
    #[error("session not found: {}", .0.display())]
    SessionNotFound(PathBuf),

    /// The storage medium could not be read.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Classify a failed open: a missing file is an absent session, anything
    /// else is a storage failure.
    pub(crate) fn from_open(path: &Path, err: io::Error) -> Error {
        if err.kind() == io::ErrorKind::NotFound {
            Error::SessionNotFound(path.to_path_buf())
        } else {
            Error::Io(err)
        }
    }
}

/// Result type alias for the session viewer core.
pub type Result<T> = std::result::Result<T, Error>;
