//! Per-item failure reasons.

use std::path::PathBuf;

use thiserror::Error;

/// Why a single manifest entry could not be stored.
///
/// These never abort a run; they are printed and counted.
#[derive(Error, Debug)]
pub enum FetchFailure {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("not an image (Content-Type={content_type}); starts: {snippet:?}")]
    NotAnImage {
        content_type: String,
        snippet: String,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Maximum number of characters of a rejected body shown in diagnostics.
pub const SNIPPET_CHARS: usize = 200;

/// Short single-line preview of a response body.
pub fn body_snippet(body: &[u8]) -> String {
    String::from_utf8_lossy(body)
        .chars()
        .take(SNIPPET_CHARS)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect()
}
