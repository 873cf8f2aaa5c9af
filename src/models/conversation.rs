use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::models::record::{ContentBlock, RawContent, Record, RecordType, Usage};

/// One reconstructed conversation message.
///
/// This is the flattened view renderers consume: record-level envelope fields
/// and the nested message fields side by side, with content normalized to a
/// block sequence. Absent fields are omitted from serialized output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub content: Vec<ContentBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_use_result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todos: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sidechain: Option<bool>,
}

impl Message {
    /// Flatten a raw record into the message shape.
    pub fn from_record(record: Record) -> Message {
        let message = record.message.unwrap_or_default();
        Message {
            record_type: record.record_type,
            uuid: record.uuid,
            parent_uuid: record.parent_uuid,
            timestamp: record.timestamp,
            role: message.role,
            model: message.model,
            content: message.content.map(RawContent::into_blocks).unwrap_or_default(),
            usage: message.usage,
            stop_reason: message.stop_reason,
            tool_use_result: record.tool_use_result,
            todos: record.todos,
            is_sidechain: record.is_sidechain,
        }
    }
}

/// Session-level metadata seeded from the first record carrying a session id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationMetadata {
    pub cwd: Option<String>,
    pub git_branch: Option<String>,
    pub version: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
}

/// A fully reconstructed session: identity, metadata, deduplicated messages,
/// and aggregate statistics.
///
/// `id` is `None` for incomplete sessions whose record stream never produced
/// a session id (truncated or empty files); callers substitute the
/// filename-derived id for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub metadata: ConversationMetadata,
    pub conversation: Vec<Message>,
    pub stats: Stats,
}

/// Aggregate statistics over a reconstructed conversation.
///
/// Derived on every reconstruction, never persisted. Token sums cover
/// assistant messages only, with missing usage counting as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub user_messages: usize,
    pub assistant_messages: usize,
    pub tool_calls: usize,
    pub thinking_blocks: usize,
    pub total_input_tokens: u64,
    pub total_output_tokens: u64,
}

impl Stats {
    /// Single pass over the deduplicated message sequence.
    pub fn collect(messages: &[Message]) -> Stats {
        let mut stats = Stats::default();
        for message in messages {
            match message.record_type {
                RecordType::User => stats.user_messages += 1,
                RecordType::Assistant => {
                    stats.assistant_messages += 1;
                    if let Some(usage) = &message.usage {
                        stats.total_input_tokens += usage.input_tokens.unwrap_or(0);
                        stats.total_output_tokens += usage.output_tokens.unwrap_or(0);
                    }
                    for block in &message.content {
                        if block.is_tool_use() {
                            stats.tool_calls += 1;
                        }
                        if block.is_thinking() {
                            stats.thinking_blocks += 1;
                        }
                    }
                }
                _ => {}
            }
        }
        stats
    }
}
