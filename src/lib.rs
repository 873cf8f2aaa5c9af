//! Claude Session Viewer - read and reconstruct Claude Code session logs
//!
//! This library is the core of a local session-log viewer. It scans the
//! `~/.claude/projects` storage tree, where each project directory holds
//! append-only JSONL session files, and exposes read-only derived views over
//! them. It supports:
//!
//! - Streaming record parsing that tolerates malformed lines
//! - Bounded-prefix metadata extraction for cheap listings and search
//! - Conversation reconstruction with deduplication of streamed assistant
//!   re-emissions and aggregate statistics
//! - Project/session discovery with recency ordering and lookup by id
//! - Parent/child resolution between main sessions and sub-agent sessions
//!
//! The files are the sole source of truth: nothing is cached between calls,
//! and the storage root is always an explicit argument.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use claude_session_viewer::{list_projects, read_session};
//!
//! let root = Path::new("/Users/alice/.claude/projects");
//! for project in list_projects(root) {
//!     println!("{} ({} sessions)", project.name, project.session_count);
//! }
//!
//! let session = read_session(Path::new(
//!     "/Users/alice/.claude/projects/-Users-alice-app/0c8e4f52.jsonl",
//! ))?;
//! println!("{} messages", session.conversation.len());
//! # Ok::<(), claude_session_viewer::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod hierarchy;
pub mod index;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types and entry points
pub use error::{Error, Result};
pub use hierarchy::{agent_id_from_session, resolve_children, resolve_parent};
pub use index::projects::{find_session_by_id, list_projects};
pub use index::search::search_sessions;
pub use index::sessions::{list_all_sessions, list_sessions};
pub use models::{
    Conversation, Message, Project, ProjectSession, RelatedSession, SessionMetadata,
    SessionSummary, Stats,
};
pub use parsers::conversation::{read_session, reconstruct};
pub use parsers::metadata::extract_session_metadata;
pub use parsers::records::read_records;
pub use utils::paths::{decode_project_path, encode_project_path, project_name};
