use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A project directory, derived entirely from its child sessions.
///
/// `id` is the raw (encoded) directory name; `name` and `path` come from the
/// lossy dash-decoding of that name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub path: PathBuf,
    pub session_count: usize,
    pub latest_session: Option<DateTime<Utc>>,
}
