//! Idempotent file writing.

use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;

use crate::dedup::same_content;

/// What happened when persisting bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file already held identical content; nothing was written.
    Unchanged,
    /// The file was created or overwritten.
    Written { bytes: u64 },
}

/// Write `bytes` to `path` unless the file already has the same content.
///
/// Parent directories are created as needed.
pub async fn write_if_changed(path: &Path, bytes: &[u8]) -> std::io::Result<WriteOutcome> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    match fs::read(path).await {
        Ok(existing) if same_content(&existing, bytes) => return Ok(WriteOutcome::Unchanged),
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    fs::write(path, bytes).await?;
    Ok(WriteOutcome::Written {
        bytes: bytes.len() as u64,
    })
}
