//! Streaming parsers for session JSONL files.
//!
//! # Error Handling Strategy
//!
//! Malformed input is never fatal here:
//!
//! - **Line level**: empty lines and lines that fail to parse as JSON are
//!   skipped; reconstruction and metadata extraction only ever see the
//!   records that parsed. A single corrupt line cannot abort a scan.
//! - **File level**: only opening a file can fail, with a typed
//!   [`Error`](crate::error::Error) distinguishing a missing session from a
//!   storage failure. Read errors after a successful open end the stream
//!   with a logged warning.
//! - **Session level**: a file whose records never produce a session id
//!   reconstructs to a conversation with null identity - an incomplete
//!   session is data, not an error.

pub mod conversation;
pub mod deserializers;
pub mod metadata;
pub mod records;

pub use conversation::{read_session, reconstruct};
pub use metadata::extract_session_metadata;
pub use records::{RecordIter, read_records};
