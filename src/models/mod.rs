//! Data models for session records and their derived views.
//!
//! This module defines the data structures used throughout the crate:
//!
//! - [`Record`] and its nested types - raw JSONL line shapes (input)
//! - [`Message`], [`Conversation`], [`Stats`] - the reconstructed conversation
//! - [`SessionMetadata`], [`SessionSummary`], [`ProjectSession`],
//!   [`RelatedSession`] - lightweight listing and lookup views
//! - [`Project`] - a project directory derived from its sessions
//!
//! Raw records use serde renames matching the camelCase on-disk JSONL;
//! derived views serialize camelCase to match the shapes renderers consume.
//! Every entity is a read-only view over the files - nothing is mutated
//! after construction, and every read re-derives from disk.

pub mod conversation;
pub mod project;
pub mod record;
pub mod session;

pub use conversation::{Conversation, ConversationMetadata, Message, Stats};
pub use project::Project;
pub use record::{
    ContentBlock, RawContent, RawMessage, Record, RecordType, ToolResultContent, Usage,
};
pub use session::{ProjectSession, RelatedSession, SessionMetadata, SessionSummary};
