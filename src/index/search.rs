use std::path::Path;

use crate::index::projects::list_projects;
use crate::index::sessions::list_sessions;
use crate::models::ProjectSession;

/// Queries shorter than this return nothing.
pub const MIN_QUERY_CHARS: usize = 2;

/// Scanning stops once a project pushes the result count to this.
pub const MAX_SEARCH_RESULTS: usize = 100;

/// Case-insensitive substring search over session slugs, first-message
/// previews, and project names.
///
/// Results keep project-then-session order (sessions are already newest
/// first within a project); there is no global re-sort. The cutoff is
/// checked at project boundaries, so the last scanned project may overshoot
/// the cap.
pub fn search_sessions(
    projects_dir: &Path,
    query: &str,
    exclude_agents: bool,
) -> Vec<ProjectSession> {
    let query = query.trim().to_lowercase();
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let mut results = Vec::new();
    for project in list_projects(projects_dir) {
        let project_name_matches = project.name.to_lowercase().contains(&query);
        let project_dir = projects_dir.join(&project.id);

        for session in list_sessions(&project_dir) {
            if exclude_agents && session.is_agent_session {
                continue;
            }

            let matches = project_name_matches
                || contains(session.metadata.slug.as_deref(), &query)
                || contains(session.metadata.first_message.as_deref(), &query);
            if matches {
                results.push(ProjectSession {
                    session,
                    project: project.name.clone(),
                    project_id: project.id.clone(),
                    project_path: project.path.clone(),
                });
            }
        }

        if results.len() >= MAX_SEARCH_RESULTS {
            break;
        }
    }
    results
}

fn contains(field: Option<&str>, query: &str) -> bool {
    field.is_some_and(|text| text.to_lowercase().contains(query))
}
