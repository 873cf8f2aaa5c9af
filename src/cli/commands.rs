use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::error::Error;
use crate::hierarchy::{resolve_children, resolve_parent};
use crate::index::projects::{find_session_by_id, list_projects};
use crate::index::search::search_sessions;
use crate::index::sessions::{list_all_sessions, list_sessions, session_file_name};
use crate::models::{Conversation, Project};
use crate::parsers::conversation::read_session;
use crate::utils::environment::default_projects_dir;
use crate::utils::paths::{decode_project_path, project_name};

#[derive(Parser)]
#[command(name = "claude-session-viewer")]
#[command(version = "0.1.0")]
#[command(about = "Browse locally stored Claude Code session logs", long_about = None)]
pub struct Cli {
    /// Storage root holding one directory per project
    /// (default: ~/.claude/projects)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List projects, most recently active first
    Projects,
    /// List sessions in one project, or across all projects
    Sessions {
        /// Encoded project directory name; omit to list every project.
        /// Encoded names start with a dash, hence the hyphen allowance.
        #[arg(allow_hyphen_values = true)]
        project_id: Option<String>,
        /// Leave out sub-agent sessions
        #[arg(long)]
        exclude_agents: bool,
    },
    /// Reconstruct one session and print its conversation
    Show {
        session_id: String,
        /// Project to look in; every project is searched when omitted
        #[arg(long, value_name = "PROJECT_ID", allow_hyphen_values = true)]
        project: Option<String>,
    },
    /// Find the main session that spawned a sub-agent session
    Parent {
        session_id: String,
        #[arg(long, value_name = "PROJECT_ID", allow_hyphen_values = true)]
        project: String,
    },
    /// List the sub-agent sessions spawned from a session
    Children {
        session_id: String,
        #[arg(long, value_name = "PROJECT_ID", allow_hyphen_values = true)]
        project: String,
    },
    /// Search sessions by slug, first message, or project name
    Search {
        query: String,
        /// Leave out sub-agent sessions
        #[arg(long)]
        exclude_agents: bool,
    },
}

/// A reconstructed session plus the project it was found in, the shape the
/// session detail view consumes.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionView {
    #[serde(flatten)]
    conversation: Conversation,
    project: Option<ProjectRef>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectRef {
    id: String,
    name: String,
    path: PathBuf,
}

impl From<Project> for ProjectRef {
    fn from(project: Project) -> ProjectRef {
        ProjectRef { id: project.id, name: project.name, path: project.path }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let projects_dir = match cli.root {
        Some(root) => root,
        None => default_projects_dir()?,
    };

    match cli.command {
        Some(Commands::Projects) => print_json(&list_projects(&projects_dir)),
        Some(Commands::Sessions { project_id: Some(project_id), exclude_agents }) => {
            let mut sessions = list_sessions(&projects_dir.join(&project_id));
            if exclude_agents {
                sessions.retain(|session| !session.is_agent_session);
            }
            print_json(&sessions)
        }
        Some(Commands::Sessions { project_id: None, exclude_agents }) => {
            print_json(&list_all_sessions(&projects_dir, exclude_agents))
        }
        Some(Commands::Show { session_id, project }) => {
            show_session(&projects_dir, &session_id, project.as_deref())
        }
        Some(Commands::Parent { session_id, project }) => {
            let parent = resolve_parent(&projects_dir, &session_id, &project)
                .context("parent resolution failed")?;
            print_json(&parent)
        }
        Some(Commands::Children { session_id, project }) => {
            match resolve_children(&projects_dir, &session_id, &project) {
                Ok(children) => print_json(&children),
                Err(Error::SessionNotFound(_)) => bail!("session not found: {session_id}"),
                Err(err) => Err(err).context("child resolution failed"),
            }
        }
        Some(Commands::Search { query, exclude_agents }) => {
            print_json(&search_sessions(&projects_dir, &query, exclude_agents))
        }
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn show_session(projects_dir: &Path, session_id: &str, project_id: Option<&str>) -> Result<()> {
    let (path, project) = match project_id {
        Some(project_id) => (
            projects_dir.join(project_id).join(session_file_name(session_id)),
            ProjectRef {
                id: project_id.to_owned(),
                name: project_name(project_id),
                path: decode_project_path(project_id),
            },
        ),
        None => match find_session_by_id(projects_dir, session_id) {
            Some((path, project)) => (path, project.into()),
            None => bail!("session not found: {session_id}"),
        },
    };

    let mut conversation = match read_session(&path) {
        Ok(conversation) => conversation,
        Err(Error::SessionNotFound(_)) => bail!("session not found: {session_id}"),
        Err(err) => return Err(err).context("failed to read session"),
    };

    // Empty or truncated files never carry their own id; fall back to the
    // one the caller asked for.
    if conversation.id.is_none() {
        conversation.id = Some(session_id.to_owned());
    }

    print_json(&SessionView { conversation, project: Some(project) })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
