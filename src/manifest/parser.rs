//! Manifest parsing.
//!
//! One directive per line: `URL [FILENAME [REFERER]]`, whitespace separated.
//! Blank lines and lines starting with `#` are ignored.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::manifest::item::WorkItem;

/// Read and parse a manifest file.
///
/// Fails when the file is missing or contains no directives.
pub fn parse_manifest(path: &Path, default_out_dir: &Path) -> Result<Vec<WorkItem>> {
    if !path.exists() {
        return Err(Error::ManifestNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let items = parse_manifest_str(&content, default_out_dir);

    if items.is_empty() {
        return Err(Error::EmptyManifest(path.to_path_buf()));
    }

    tracing::debug!("Parsed {} item(s) from {}", items.len(), path.display());
    Ok(items)
}

/// Parse manifest text into work items, in file order.
pub fn parse_manifest_str(content: &str, default_out_dir: &Path) -> Vec<WorkItem> {
    content
        .lines()
        .filter_map(|line| parse_line(line, default_out_dir))
        .collect()
}

/// Parse a single manifest line. Returns `None` for blank and comment lines.
pub fn parse_line(line: &str, default_out_dir: &Path) -> Option<WorkItem> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut tokens = line.split_whitespace();
    let url = tokens.next()?;
    let filename = tokens.next();
    let referer = tokens.next();

    Some(WorkItem::new(url, filename, referer, default_out_dir))
}
