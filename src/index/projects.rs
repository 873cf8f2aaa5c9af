use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::DateTime;
use tracing::warn;

use crate::index::sessions::{list_sessions, session_file_name};
use crate::models::Project;
use crate::utils::paths::{decode_project_path, project_name};

/// Enumerate project directories under the storage root.
///
/// A directory counts as a project only when at least one of its session
/// files can be summarized; directories with no sessions are not listed.
/// Projects come back sorted by latest session activity, newest first
/// (projects whose sessions never recorded a timestamp sort last). An
/// unreadable root degrades to an empty list with a logged warning - callers
/// render "no projects" identically in both cases.
pub fn list_projects(projects_dir: &Path) -> Vec<Project> {
    let entries = match fs::read_dir(projects_dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(path = %projects_dir.display(), error = %err, "cannot scan projects directory");
            return Vec::new();
        }
    };

    let mut projects = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(id) = path.file_name().and_then(|name| name.to_str()).map(str::to_owned)
        else {
            continue;
        };

        let sessions = list_sessions(&path);
        if sessions.is_empty() {
            continue;
        }

        projects.push(Project {
            name: project_name(&id),
            path: decode_project_path(&id),
            session_count: sessions.len(),
            // Sessions are newest-first; the project's recency is its top
            // session's in-content timestamp, which may be absent.
            latest_session: sessions.first().and_then(|s| s.metadata.timestamp),
            id,
        });
    }

    projects.sort_by_key(|project| {
        Reverse(project.latest_session.unwrap_or(DateTime::UNIX_EPOCH))
    });
    projects
}

/// Locate a session file by id across every project.
///
/// Projects are scanned in listing order and the first one containing
/// `<id>.jsonl` wins; an id present in several projects resolves to that
/// first match. Absent is a valid result, not an error.
pub fn find_session_by_id(projects_dir: &Path, session_id: &str) -> Option<(PathBuf, Project)> {
    if !is_valid_session_id(session_id) {
        return None;
    }
    for project in list_projects(projects_dir) {
        let candidate = projects_dir.join(&project.id).join(session_file_name(session_id));
        if candidate.is_file() {
            return Some((candidate, project));
        }
    }
    None
}

/// Session ids name files directly, so an id that could escape its project
/// directory can never match a real session.
pub(crate) fn is_valid_session_id(session_id: &str) -> bool {
    !session_id.is_empty() && !session_id.contains(['/', '\\']) && !session_id.contains("..")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn add_project(root: &Path, encoded: &str, sessions: &[(&str, &str)]) {
        let dir = root.join(encoded);
        fs::create_dir(&dir).expect("Failed to create project dir");
        for (filename, content) in sessions {
            fs::write(dir.join(filename), content).expect("Failed to write session file");
        }
    }

    fn user_record(session_id: &str, timestamp: &str) -> String {
        format!(
            r#"{{"type":"user","sessionId":"{session_id}","timestamp":"{timestamp}","message":{{"role":"user","content":"hi"}}}}"#
        )
    }

    #[test]
    fn test_list_projects_decodes_names_and_counts_sessions() {
        let root = TempDir::new().unwrap();
        add_project(
            root.path(),
            "-Users-test-app",
            &[
                ("a.jsonl", &user_record("a", "2024-02-01T00:00:00Z")),
                ("b.jsonl", &user_record("b", "2024-01-01T00:00:00Z")),
            ],
        );

        let projects = list_projects(root.path());
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, "-Users-test-app");
        assert_eq!(projects[0].name, "app");
        assert_eq!(projects[0].path, PathBuf::from("/Users/test/app"));
        assert_eq!(projects[0].session_count, 2);
        assert_eq!(
            projects[0].latest_session,
            Some("2024-02-01T00:00:00Z".parse().unwrap())
        );
    }

    #[test]
    fn test_projects_without_sessions_are_excluded() {
        let root = TempDir::new().unwrap();
        add_project(root.path(), "-Users-test-empty", &[]);
        add_project(root.path(), "-Users-test-full", &[("a.jsonl", "")]);

        let projects = list_projects(root.path());
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, "-Users-test-full");
    }

    #[test]
    fn test_projects_sorted_by_latest_activity_desc() {
        let root = TempDir::new().unwrap();
        add_project(
            root.path(),
            "-old",
            &[("a.jsonl", &user_record("a", "2023-01-01T00:00:00Z"))],
        );
        add_project(
            root.path(),
            "-new",
            &[("b.jsonl", &user_record("b", "2025-01-01T00:00:00Z"))],
        );
        // No in-content timestamp at all: sorts last.
        add_project(root.path(), "-undated", &[("c.jsonl", "")]);

        let ids: Vec<_> = list_projects(root.path()).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["-new", "-old", "-undated"]);
    }

    #[test]
    fn test_plain_files_under_root_are_ignored() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("stray.jsonl"), "").unwrap();
        add_project(root.path(), "-real", &[("a.jsonl", "")]);

        let projects = list_projects(root.path());
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, "-real");
    }

    #[test]
    fn test_unreadable_root_degrades_to_empty() {
        assert!(list_projects(Path::new("/nonexistent/projects")).is_empty());
    }

    #[test]
    fn test_find_session_by_id_returns_owning_project() {
        let root = TempDir::new().unwrap();
        add_project(root.path(), "-alpha", &[("s1.jsonl", "")]);
        add_project(root.path(), "-beta", &[("s2.jsonl", "")]);

        let (path, project) = find_session_by_id(root.path(), "s2").expect("should find s2");
        assert!(path.ends_with("-beta/s2.jsonl"));
        assert_eq!(project.id, "-beta");

        assert!(find_session_by_id(root.path(), "missing").is_none());
    }

    #[test]
    fn test_find_session_by_id_rejects_traversal_ids() {
        let root = TempDir::new().unwrap();
        add_project(root.path(), "-alpha", &[("s1.jsonl", "")]);

        assert!(find_session_by_id(root.path(), "../-alpha/s1").is_none());
        assert!(find_session_by_id(root.path(), "").is_none());
    }
}
