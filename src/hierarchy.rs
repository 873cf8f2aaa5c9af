//! Parent/child resolution between main sessions and sub-agent sessions.
//!
//! A sub-agent session is stored as `agent-<agentId>.jsonl` next to the main
//! session that spawned it. The only link back is data inside the main
//! session: when the spawning tool call returns, its result record embeds
//! the agent's id. Resolution therefore cross-references sibling files
//! rather than following any explicit pointer.

use std::cmp::Reverse;
use std::fs;
use std::path::Path;

use chrono::DateTime;

use crate::error::{Error, Result};
use crate::index::projects::is_valid_session_id;
use crate::index::sessions::{AGENT_SESSION_PREFIX, SESSION_FILE_EXT, session_file_name};
use crate::models::RelatedSession;
use crate::parsers::metadata::extract_session_metadata;
use crate::parsers::records::read_records;
use crate::utils::paths::project_name;

/// The agent id embedded in a sub-agent session id, if it is one.
pub fn agent_id_from_session(session_id: &str) -> Option<&str> {
    session_id.strip_prefix(AGENT_SESSION_PREFIX).filter(|id| !id.is_empty())
}

/// Find the main session that spawned a sub-agent session.
///
/// Scans every non-agent session file in the project, record by record, for
/// a tool result referencing the embedded agent id; the first file with a
/// match is the parent, and scanning stops there. An id without the agent
/// prefix has no parent by definition, and a project with no referencing
/// file simply has none - both are `Ok(None)`, distinct from scan failures.
pub fn resolve_parent(
    projects_dir: &Path,
    session_id: &str,
    project_id: &str,
) -> Result<Option<RelatedSession>> {
    let Some(agent_id) = agent_id_from_session(session_id) else {
        return Ok(None);
    };

    let project_dir = projects_dir.join(project_id);
    for entry in fs::read_dir(&project_dir)? {
        let path = entry?.path();
        let Some(filename) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if path.extension().and_then(|ext| ext.to_str()) != Some(SESSION_FILE_EXT)
            || filename.starts_with(AGENT_SESSION_PREFIX)
        {
            continue;
        }

        let mut records = read_records(&path)?;
        if records.any(|record| record.referenced_agent_id() == Some(agent_id)) {
            drop(records);
            let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            return Ok(Some(RelatedSession {
                id: id.to_owned(),
                agent_id: None,
                metadata: extract_session_metadata(&path),
                project: project_name(project_id),
                project_id: project_id.to_owned(),
            }));
        }
    }

    Ok(None)
}

/// Find the sub-agent sessions spawned from a main session.
///
/// The session file itself must exist ([`Error::SessionNotFound`]
/// otherwise - a missing session is not the same as a session with no
/// children). Referenced agent ids whose `agent-<id>.jsonl` file is absent
/// are omitted. Children come back newest first; a child with no recorded
/// timestamp sorts last.
pub fn resolve_children(
    projects_dir: &Path,
    session_id: &str,
    project_id: &str,
) -> Result<Vec<RelatedSession>> {
    let project_dir = projects_dir.join(project_id);
    let session_path = project_dir.join(session_file_name(session_id));
    if !is_valid_session_id(session_id) {
        return Err(Error::SessionNotFound(session_path));
    }

    // Distinct agent ids in first-reference order.
    let mut agent_ids: Vec<String> = Vec::new();
    for record in read_records(&session_path)? {
        if let Some(agent_id) = record.referenced_agent_id()
            && !agent_ids.iter().any(|known| known == agent_id)
        {
            agent_ids.push(agent_id.to_owned());
        }
    }

    let mut children = Vec::new();
    for agent_id in agent_ids {
        let child_id = format!("{AGENT_SESSION_PREFIX}{agent_id}");
        if !is_valid_session_id(&child_id) {
            continue;
        }
        let agent_path = project_dir.join(session_file_name(&child_id));
        if !agent_path.is_file() {
            continue;
        }
        children.push(RelatedSession {
            id: child_id,
            metadata: extract_session_metadata(&agent_path),
            agent_id: Some(agent_id),
            project: project_name(project_id),
            project_id: project_id.to_owned(),
        });
    }

    children
        .sort_by_key(|child| Reverse(child.metadata.timestamp.unwrap_or(DateTime::UNIX_EPOCH)));
    Ok(children)
}
