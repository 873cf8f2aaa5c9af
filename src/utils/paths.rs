//! Project directory name encoding.
//!
//! A project directory encodes the absolute path of a working directory by
//! substituting every path separator with a dash: `/Users/foo/bar` is stored
//! as `-Users-foo-bar`, leading separator included.

use std::path::{Path, PathBuf};

/// Encode a filesystem path as a project directory name.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use claude_session_viewer::encode_project_path;
///
/// assert_eq!(encode_project_path(Path::new("/Users/foo/bar")), "-Users-foo-bar");
/// ```
pub fn encode_project_path(path: &Path) -> String {
    path.to_string_lossy().replace('/', "-")
}

/// Decode a project directory name back to a filesystem path.
///
/// Every dash becomes a separator, the leading one included. The scheme is
/// lossy: a dash that was part of a real path component cannot be told apart
/// from an encoded separator, so `/tmp/my-app` encodes to `-tmp-my-app` and
/// decodes to `/tmp/my/app`. This matches how the directories are written
/// and is a known limitation, not something to repair here.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use claude_session_viewer::decode_project_path;
///
/// assert_eq!(decode_project_path("-Users-foo-bar"), PathBuf::from("/Users/foo/bar"));
/// ```
pub fn decode_project_path(encoded: &str) -> PathBuf {
    PathBuf::from(encoded.replace('-', "/"))
}

/// Short display name for a project: the last component of its decoded path.
pub fn project_name(encoded: &str) -> String {
    decode_project_path(encoded)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
