use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use crate::models::{RawContent, RawMessage, Record, RecordType, SessionMetadata};

/// Hard cap on lines inspected per file. Listing a directory full of huge
/// session files must stay cheap even when a file never qualifies, so the cap
/// counts raw lines, malformed ones included.
pub const METADATA_SCAN_LINES: usize = 20;

/// First-message previews are truncated to this many characters.
pub const FIRST_MESSAGE_PREVIEW_CHARS: usize = 300;

/// Pull summary fields from a session file without reading it fully.
///
/// Scans at most [`METADATA_SCAN_LINES`] lines and returns as soon as the
/// first `user` record carrying a session id is found; only that record's
/// fields are taken, and the early return drops the reader so the handle is
/// released immediately. A file with no qualifying record in the prefix
/// yields the all-`None` value - an empty or incomplete session, not an
/// error. Unreadable files degrade the same way, with a logged warning.
pub fn extract_session_metadata(path: &Path) -> SessionMetadata {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "cannot open session file for metadata scan");
            return SessionMetadata::default();
        }
    };

    let reader = BufReader::new(file);
    let mut metadata = SessionMetadata::default();

    for line in reader.lines().take(METADATA_SCAN_LINES) {
        let Ok(line) = line else { break };
        let Some(record) = Record::parse_line(&line) else { continue };

        if record.record_type == RecordType::User && record.session_id.is_some() {
            metadata.session_id = record.session_id;
            metadata.slug = record.slug;
            metadata.timestamp = record.timestamp;
            metadata.git_branch = record.git_branch;
            metadata.version = record.version;
            metadata.first_message = record.message.as_ref().and_then(first_message_preview);
            break;
        }
    }

    metadata
}

/// The preview text: string content directly, or the first `text` block of
/// array content.
fn first_message_preview(message: &RawMessage) -> Option<String> {
    match message.content.as_ref()? {
        RawContent::Text(text) => Some(preview(text)),
        RawContent::Blocks(blocks) => blocks.iter().find_map(|block| block.text()).map(preview),
        RawContent::Other(_) => None,
    }
}

fn preview(text: &str) -> String {
    text.chars().take(FIRST_MESSAGE_PREVIEW_CHARS).collect()
}
