//! Filename generation and manipulation.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::dedup::short_hash;

/// Name used when sanitization leaves nothing usable.
pub const FALLBACK_FILENAME: &str = "image";

/// Extension used when the content type is not in the mapping table.
pub const FALLBACK_EXTENSION: &str = ".img";

fn unsafe_chars() -> &'static Regex {
    static UNSAFE: OnceLock<Regex> = OnceLock::new();
    UNSAFE.get_or_init(|| Regex::new(r"[^A-Za-z0-9._-]+").expect("valid filename regex"))
}

/// Reduce `name` to a safe single path component.
///
/// Every run of characters outside `[A-Za-z0-9._-]` (path separators
/// included) collapses to one `_`. Empty results and dot-only names such as
/// `..` fall back to [`FALLBACK_FILENAME`].
pub fn sanitize_filename(name: &str) -> String {
    let sanitized = unsafe_chars().replace_all(name.trim(), "_");

    if sanitized.is_empty() || sanitized.chars().all(|c| c == '.') {
        return FALLBACK_FILENAME.to_string();
    }

    sanitized.into_owned()
}

/// Path component of a URL, or the raw text for strings that do not parse.
fn url_path(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or_default().to_string(),
    }
}

/// Derive a local filename from the last segment of a URL's path.
///
/// The segment is percent-decoded and sanitized. Names without a `.` get a
/// short hash of the whole URL appended so distinct extensionless URLs do not
/// collide.
pub fn derive_filename_from_url(url: &str) -> String {
    let path = url_path(url);
    let segment = path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    let decoded = urlencoding::decode_binary(segment.as_bytes());
    let base = sanitize_filename(&String::from_utf8_lossy(&decoded));

    if base.contains('.') {
        base
    } else {
        format!("{}_{}", base, short_hash(url))
    }
}

/// Media type of a Content-Type header value: lowercased, parameters dropped.
pub fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Map an image Content-Type to a file extension (with leading dot).
pub fn extension_from_content_type(content_type: &str) -> Option<&'static str> {
    let ext = match media_type(content_type).as_str() {
        "image/jpeg" | "image/jpg" => ".jpg",
        "image/png" => ".png",
        "image/webp" => ".webp",
        "image/gif" => ".gif",
        "image/svg+xml" => ".svg",
        "image/avif" => ".avif",
        "image/heic" => ".heic",
        "image/heif" => ".heif",
        "image/bmp" => ".bmp",
        "image/tiff" => ".tiff",
        _ => return None,
    };
    Some(ext)
}

/// Whether the path has a non-empty extension.
pub fn has_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| !ext.is_empty())
}

/// Give an extensionless path the extension implied by `content_type`.
///
/// Paths that already carry an extension are returned unchanged.
pub fn with_content_type_extension(path: &Path, content_type: &str) -> PathBuf {
    if has_extension(path) {
        return path.to_path_buf();
    }

    let ext = extension_from_content_type(content_type).unwrap_or(FALLBACK_EXTENSION);
    path.with_extension(ext.trim_start_matches('.'))
}
