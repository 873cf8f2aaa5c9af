use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default storage root: `~/.claude/projects`.
///
/// The core never reads this itself - callers resolve a root once and thread
/// it through every call, so tests and alternate layouts just pass a
/// different path.
pub fn default_projects_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".claude").join("projects"))
}
