use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Lightweight fields pulled from the prefix of a session file.
///
/// All-`None` is a valid value: it represents an empty or incomplete session,
/// not a failure. Fields serialize as explicit nulls so listings always carry
/// the full shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMetadata {
    pub slug: Option<String>,
    pub session_id: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub git_branch: Option<String>,
    pub version: Option<String>,
    pub first_message: Option<String>,
}

/// One session file as it appears in a listing: filesystem facts plus the
/// cheap metadata scan, without full reconstruction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub id: String,
    pub filename: String,
    pub path: PathBuf,
    pub size: u64,
    pub modified: DateTime<Utc>,
    pub is_agent_session: bool,
    #[serde(flatten)]
    pub metadata: SessionMetadata,
}

impl SessionSummary {
    /// Recency key: in-content timestamp, falling back to file mtime.
    pub fn activity_time(&self) -> DateTime<Utc> {
        self.metadata.timestamp.unwrap_or(self.modified)
    }
}

/// A session summary joined with its owning project, for cross-project
/// listings and search results.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSession {
    #[serde(flatten)]
    pub session: SessionSummary,
    pub project: String,
    pub project_id: String,
    pub project_path: PathBuf,
}

/// A parent or child session produced by hierarchy resolution.
///
/// `agent_id` is present on children (the id extracted from the tool result)
/// and absent on parents.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedSession {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    #[serde(flatten)]
    pub metadata: SessionMetadata,
    pub project: String,
    pub project_id: String,
}
