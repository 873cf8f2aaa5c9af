use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;
use crate::models::{Conversation, ConversationMetadata, Message, Record, RecordType, Stats};
use crate::parsers::records::read_records;

/// Read one session file and reconstruct its conversation.
///
/// Fails only if the file cannot be opened; malformed lines inside are
/// tolerated and never surface as errors.
pub fn read_session(path: &Path) -> Result<Conversation> {
    let records = read_records(path)?;
    Ok(reconstruct(records))
}

/// Turn an ordered record stream into a canonical conversation.
///
/// - `file-history-snapshot` records are dropped entirely.
/// - Identity and metadata come from the first record carrying a session id
///   (not necessarily the first record overall); later records never
///   override them.
/// - Only `user` and `assistant` records become messages.
/// - Assistant messages are re-emitted as a response streams in, each time
///   with the same `uuid` and a growing block sequence; exactly one is kept
///   per `uuid`, at its first position, and a later revision with strictly
///   more content blocks replaces the kept fields in place. User messages
///   and assistant messages without a `uuid` are never deduplicated.
/// - Output order is file order; the sequence is never re-sorted.
pub fn reconstruct(records: impl IntoIterator<Item = Record>) -> Conversation {
    let mut id = None;
    let mut slug = None;
    let mut metadata = ConversationMetadata::default();
    let mut messages: Vec<Message> = Vec::new();
    // uuid -> position of the kept message, held beside the ordered output so
    // a more complete revision can replace fields without moving anything.
    let mut kept_at: HashMap<String, usize> = HashMap::new();

    for record in records {
        if record.record_type == RecordType::FileHistorySnapshot {
            continue;
        }

        if id.is_none() && record.session_id.is_some() {
            id = record.session_id.clone();
            slug = record.slug.clone();
            metadata = ConversationMetadata {
                cwd: record.cwd.clone(),
                git_branch: record.git_branch.clone(),
                version: record.version.clone(),
                start_time: record.timestamp,
            };
        }

        if !matches!(record.record_type, RecordType::User | RecordType::Assistant) {
            continue;
        }

        let message = Message::from_record(record);

        if message.record_type == RecordType::Assistant
            && let Some(uuid) = message.uuid.clone()
        {
            if let Some(&at) = kept_at.get(&uuid) {
                if message.content.len() > messages[at].content.len() {
                    messages[at] = message;
                }
                continue;
            }
            kept_at.insert(uuid, messages.len());
        }

        messages.push(message);
    }

    let stats = Stats::collect(&messages);

    Conversation { id, slug, metadata, conversation: messages, stats }
}
