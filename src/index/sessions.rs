use std::cmp::Reverse;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::index::projects::list_projects;
use crate::models::{ProjectSession, SessionSummary};
use crate::parsers::metadata::extract_session_metadata;

/// Session files use this extension.
pub const SESSION_FILE_EXT: &str = "jsonl";

/// Sub-agent session files carry this filename prefix.
pub const AGENT_SESSION_PREFIX: &str = "agent-";

/// The on-disk filename for a session id: `<id>.jsonl`.
pub fn session_file_name(session_id: &str) -> String {
    format!("{session_id}.{SESSION_FILE_EXT}")
}

/// Summarize every session file in one project directory, newest first.
///
/// Each summary combines filesystem facts (size, mtime) with the bounded
/// metadata scan; recency is the in-content timestamp, falling back to mtime
/// for sessions that never recorded one. An unreadable directory degrades to
/// an empty list with a logged warning.
pub fn list_sessions(project_dir: &Path) -> Vec<SessionSummary> {
    let entries = match fs::read_dir(project_dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(path = %project_dir.display(), error = %err, "cannot scan project directory");
            return Vec::new();
        }
    };

    let mut sessions = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(SESSION_FILE_EXT) {
            continue;
        }
        let (Some(id), Some(filename)) = (
            path.file_stem().and_then(|stem| stem.to_str()).map(str::to_owned),
            path.file_name().and_then(|name| name.to_str()).map(str::to_owned),
        ) else {
            continue;
        };

        let stat = match entry.metadata() {
            Ok(stat) if stat.is_file() => stat,
            Ok(_) => continue,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "cannot stat session file, skipping");
                continue;
            }
        };
        let modified =
            stat.modified().map(DateTime::<Utc>::from).unwrap_or(DateTime::UNIX_EPOCH);

        let metadata = extract_session_metadata(&path);
        sessions.push(SessionSummary {
            is_agent_session: filename.starts_with(AGENT_SESSION_PREFIX),
            id,
            filename,
            size: stat.len(),
            modified,
            metadata,
            path,
        });
    }

    sessions.sort_by_key(|session| Reverse(session.activity_time()));
    sessions
}

/// Every session across every project, with its owning project attached,
/// newest first.
pub fn list_all_sessions(projects_dir: &Path, exclude_agents: bool) -> Vec<ProjectSession> {
    let mut all = Vec::new();
    for project in list_projects(projects_dir) {
        let project_dir = projects_dir.join(&project.id);
        for session in list_sessions(&project_dir) {
            if exclude_agents && session.is_agent_session {
                continue;
            }
            all.push(ProjectSession {
                session,
                project: project.name.clone(),
                project_id: project.id.clone(),
                project_path: project.path.clone(),
            });
        }
    }
    all.sort_by_key(|entry| Reverse(entry.session.activity_time()));
    all
}
