use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Discriminant of a raw session record.
///
/// Only `user` and `assistant` records become conversation messages;
/// `file-history-snapshot` records are dropped entirely, and everything else
/// (`summary`, `system`, ...) folds into [`RecordType::Other`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordType {
    User,
    Assistant,
    FileHistorySnapshot,
    #[default]
    Other,
}

// Hand-written so unrecognized tags fold into `Other` instead of failing the
// record they appear on.
impl<'de> Deserialize<'de> for RecordType {
    fn deserialize<D>(deserializer: D) -> Result<RecordType, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "user" => RecordType::User,
            "assistant" => RecordType::Assistant,
            "file-history-snapshot" => RecordType::FileHistorySnapshot,
            _ => RecordType::Other,
        })
    }
}

/// One parsed line of a session file.
///
/// Every field is optional because session files are append-only streams of
/// heterogeneous records; a record only carries what its writer knew at the
/// time. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub session_id: Option<String>,
    pub uuid: Option<String>,
    pub parent_uuid: Option<String>,
    #[serde(deserialize_with = "crate::parsers::deserializers::lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    pub slug: Option<String>,
    pub git_branch: Option<String>,
    pub version: Option<String>,
    pub cwd: Option<String>,
    pub is_sidechain: Option<bool>,
    pub message: Option<RawMessage>,
    pub tool_use_result: Option<Value>,
    pub todos: Option<Value>,
}

impl Record {
    /// Parse a single JSONL line. Empty or whitespace-only lines and lines
    /// that are not valid JSON yield `None`.
    pub fn parse_line(line: &str) -> Option<Record> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        serde_json::from_str(line).ok()
    }

    /// The agent id referenced by this record's tool result, if any.
    ///
    /// This is the link a main session keeps to a sub-agent session it
    /// spawned: the Task-style tool result embeds the agent's id.
    pub fn referenced_agent_id(&self) -> Option<&str> {
        self.tool_use_result.as_ref()?.get("agentId")?.as_str()
    }
}

/// The nested `message` object of a `user`/`assistant` record.
///
/// Fields here keep their on-disk snake_case names (`stop_reason`,
/// `input_tokens`); only record-level fields are camelCase.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMessage {
    pub role: Option<String>,
    pub model: Option<String>,
    pub content: Option<RawContent>,
    pub usage: Option<Usage>,
    pub stop_reason: Option<String>,
}

/// Raw message content: either a bare string or a block sequence.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
    Other(Value),
}

impl RawContent {
    /// Normalize into the canonical block sequence: a string becomes a single
    /// `text` block, an array passes through, any other shape is empty.
    pub fn into_blocks(self) -> Vec<ContentBlock> {
        match self {
            RawContent::Text(text) => vec![ContentBlock::Text { text }],
            RawContent::Blocks(blocks) => blocks,
            RawContent::Other(_) => Vec::new(),
        }
    }
}

/// One tagged unit of a message's payload.
///
/// The known variants are closed; anything with an unrecognized tag lands in
/// [`ContentBlock::Other`] and round-trips opaquely so fallback renderers
/// still see it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        #[serde(default)]
        text: String,
    },
    Thinking {
        #[serde(default)]
        thinking: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        signature: Option<String>,
    },
    ToolUse {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default)]
        name: String,
        #[serde(default)]
        input: Value,
    },
    ToolResult {
        #[serde(skip_serializing_if = "Option::is_none")]
        tool_use_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        content: Option<ToolResultContent>,
        #[serde(skip_serializing_if = "Option::is_none")]
        is_error: Option<bool>,
    },
    #[serde(untagged)]
    Other(Value),
}

impl ContentBlock {
    pub fn is_tool_use(&self) -> bool {
        matches!(self, ContentBlock::ToolUse { .. })
    }

    pub fn is_thinking(&self) -> bool {
        matches!(self, ContentBlock::Thinking { .. })
    }

    /// The payload of a `text` block.
    pub fn text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text { text } => Some(text),
            _ => None,
        }
    }
}

/// A tool result's content: a bare string or nested sub-blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolResultContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
    Other(Value),
}

/// Token accounting attached to assistant messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_creation_input_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_read_input_tokens: Option<u64>,
}
