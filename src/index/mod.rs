//! Project and session discovery over the storage tree.
//!
//! # Error Handling Strategy
//!
//! Directory-level scans degrade rather than fail: an unreadable root or
//! project directory produces an empty listing plus a logged warning,
//! because every caller renders "nothing found" the same way it renders an
//! actual empty tree. The precision loss is deliberate and confined to
//! listings - single-file operations in [`crate::parsers`] and
//! [`crate::hierarchy`] keep typed errors.
//!
//! Nothing here caches: every call re-reads the filesystem, which is the
//! sole source of truth.

pub mod projects;
pub mod search;
pub mod sessions;

pub use projects::{find_session_by_id, list_projects};
pub use search::search_sessions;
pub use sessions::{list_all_sessions, list_sessions};
