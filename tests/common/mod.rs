//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a projects storage root (the directory normally found at
/// `~/.claude/projects`).
pub struct ProjectsDirBuilder {
    temp_dir: TempDir,
}

impl ProjectsDirBuilder {
    /// Create a new builder with an empty projects root
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the projects root
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a project directory with the given encoded name and session files
    pub fn with_project(self, encoded_name: &str, sessions: &[SessionFileBuilder]) -> Self {
        let project_dir = self.temp_dir.path().join(encoded_name);
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        for session in sessions {
            session.create_in(&project_dir);
        }

        self
    }

    /// Path to one session file inside a project
    pub fn session_path(&self, encoded_name: &str, filename: &str) -> PathBuf {
        self.temp_dir.path().join(encoded_name).join(filename)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ProjectsDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one session JSONL file
pub struct SessionFileBuilder {
    filename: String,
    lines: Vec<String>,
}

impl SessionFileBuilder {
    /// Create a new session file with the given filename
    pub fn new(filename: &str) -> Self {
        Self { filename: filename.to_string(), lines: Vec::new() }
    }

    /// Append a record
    pub fn with_record(mut self, record: RecordBuilder) -> Self {
        self.lines.push(record.to_json());
        self
    }

    /// Append a raw line verbatim (for malformed-line scenarios)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Create the file in the given directory
    pub fn create_in(&self, dir: &Path) {
        let file_path = dir.join(&self.filename);
        fs::write(file_path, self.lines.join("\n")).expect("Failed to write session file");
    }
}

/// Builder for one JSONL record
pub struct RecordBuilder {
    record_type: String,
    session_id: Option<String>,
    uuid: Option<String>,
    timestamp: Option<String>,
    slug: Option<String>,
    git_branch: Option<String>,
    cwd: Option<String>,
    content: Option<Content>,
    usage: Option<(u64, u64)>,
    agent_ref: Option<String>,
}

enum Content {
    Text(String),
    Blocks(Vec<String>),
}

impl RecordBuilder {
    /// Create a new user record with common defaults
    pub fn user() -> Self {
        Self {
            record_type: "user".to_string(),
            session_id: None,
            uuid: None,
            timestamp: None,
            slug: None,
            git_branch: None,
            cwd: None,
            content: Some(Content::Text("Test message".to_string())),
            usage: None,
            agent_ref: None,
        }
    }

    /// Create a new assistant record with common defaults
    pub fn assistant() -> Self {
        let mut builder = Self::user();
        builder.record_type = "assistant".to_string();
        builder.content = Some(Content::Text("Test response".to_string()));
        builder
    }

    /// Create a file-history-snapshot record
    pub fn snapshot() -> Self {
        let mut builder = Self::user();
        builder.record_type = "file-history-snapshot".to_string();
        builder.content = None;
        builder
    }

    pub fn session_id(mut self, session_id: &str) -> Self {
        self.session_id = Some(session_id.to_string());
        self
    }

    pub fn uuid(mut self, uuid: &str) -> Self {
        self.uuid = Some(uuid.to_string());
        self
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = Some(timestamp.to_string());
        self
    }

    pub fn slug(mut self, slug: &str) -> Self {
        self.slug = Some(slug.to_string());
        self
    }

    pub fn git_branch(mut self, git_branch: &str) -> Self {
        self.git_branch = Some(git_branch.to_string());
        self
    }

    pub fn cwd(mut self, cwd: &str) -> Self {
        self.cwd = Some(cwd.to_string());
        self
    }

    /// Set simple string content
    pub fn text(mut self, text: &str) -> Self {
        self.content = Some(Content::Text(text.to_string()));
        self
    }

    /// Set content blocks (pre-rendered JSON fragments)
    pub fn content_blocks(mut self, blocks: Vec<String>) -> Self {
        self.content = Some(Content::Blocks(blocks));
        self
    }

    /// Set assistant token usage
    pub fn usage(mut self, input_tokens: u64, output_tokens: u64) -> Self {
        self.usage = Some((input_tokens, output_tokens));
        self
    }

    /// Attach a toolUseResult referencing a spawned agent
    pub fn agent_result(mut self, agent_id: &str) -> Self {
        self.agent_ref = Some(agent_id.to_string());
        self
    }

    /// A text block fragment
    pub fn text_block(text: &str) -> String {
        format!(r#"{{"type":"text","text":"{}"}}"#, text)
    }

    /// A thinking block fragment
    pub fn thinking_block(text: &str) -> String {
        format!(r#"{{"type":"thinking","thinking":"{}"}}"#, text)
    }

    /// A tool_use block fragment
    pub fn tool_use_block(id: &str, name: &str, input_json: &str) -> String {
        format!(r#"{{"type":"tool_use","id":"{}","name":"{}","input":{}}}"#, id, name, input_json)
    }

    /// A tool_result block fragment
    pub fn tool_result_block(tool_use_id: &str, content_json: &str) -> String {
        format!(r#"{{"type":"tool_result","tool_use_id":"{}","content":{}}}"#, tool_use_id, content_json)
    }

    /// Convert to a JSONL line
    pub fn to_json(&self) -> String {
        let mut fields = vec![format!(r#""type":"{}""#, self.record_type)];

        if let Some(session_id) = &self.session_id {
            fields.push(format!(r#""sessionId":"{}""#, session_id));
        }
        if let Some(uuid) = &self.uuid {
            fields.push(format!(r#""uuid":"{}""#, uuid));
        }
        if let Some(timestamp) = &self.timestamp {
            fields.push(format!(r#""timestamp":"{}""#, timestamp));
        }
        if let Some(slug) = &self.slug {
            fields.push(format!(r#""slug":"{}""#, slug));
        }
        if let Some(git_branch) = &self.git_branch {
            fields.push(format!(r#""gitBranch":"{}""#, git_branch));
        }
        if let Some(cwd) = &self.cwd {
            fields.push(format!(r#""cwd":"{}""#, cwd));
        }
        if let Some(agent_id) = &self.agent_ref {
            fields.push(format!(r#""toolUseResult":{{"agentId":"{}","status":"completed"}}"#, agent_id));
        }

        if let Some(content) = &self.content {
            let role = if self.record_type == "assistant" { "assistant" } else { "user" };
            let content_json = match content {
                Content::Text(text) => format!(r#""{}""#, text),
                Content::Blocks(blocks) => format!("[{}]", blocks.join(",")),
            };
            let usage_json = match self.usage {
                Some((input, output)) => {
                    format!(r#","usage":{{"input_tokens":{},"output_tokens":{}}}"#, input, output)
                }
                None => String::new(),
            };
            fields.push(format!(
                r#""message":{{"role":"{}","content":{}{}}}"#,
                role, content_json, usage_json
            ));
        }

        format!("{{{}}}", fields.join(","))
    }
}

/// A realistic main session: prompt, streamed assistant response, agent spawn
pub fn main_session_file(filename: &str, session_id: &str, agent_id: &str) -> SessionFileBuilder {
    SessionFileBuilder::new(filename)
        .with_record(
            RecordBuilder::user()
                .session_id(session_id)
                .uuid("u1")
                .timestamp("2024-05-01T10:00:00Z")
                .slug("main-session")
                .text("Start the work"),
        )
        .with_record(
            RecordBuilder::assistant()
                .session_id(session_id)
                .uuid("a1")
                .timestamp("2024-05-01T10:00:05Z")
                .content_blocks(vec![RecordBuilder::text_block("Spawning a sub-agent")])
                .usage(100, 20),
        )
        .with_record(
            RecordBuilder::user()
                .session_id(session_id)
                .uuid("u2")
                .timestamp("2024-05-01T10:01:00Z")
                .agent_result(agent_id)
                .content_blocks(vec![RecordBuilder::tool_result_block("t1", r#""agent done""#)]),
        )
}

/// A minimal agent session file for the given agent id
pub fn agent_session_file(agent_id: &str, timestamp: &str) -> SessionFileBuilder {
    SessionFileBuilder::new(&format!("agent-{agent_id}.jsonl")).with_record(
        RecordBuilder::user()
            .session_id(&format!("agent-session-{agent_id}"))
            .uuid("au1")
            .timestamp(timestamp)
            .text("Sub-agent task"),
    )
}
