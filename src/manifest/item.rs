//! Work item representation.

use std::path::{Path, PathBuf};

use url::{Position, Url};

use crate::fs::derive_filename_from_url;

/// One requested download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    /// Source URL. Never empty.
    pub url: String,

    /// Destination file. Its extension may still be filled in after fetching.
    pub output_path: PathBuf,

    /// Referer header value, possibly empty.
    pub referer: String,
}

impl WorkItem {
    /// Build an item, deriving whatever the manifest left out.
    ///
    /// A missing filename becomes `default_out_dir/<name derived from the URL>`,
    /// a missing referer becomes the URL's origin.
    pub fn new(
        url: &str,
        filename: Option<&str>,
        referer: Option<&str>,
        default_out_dir: &Path,
    ) -> Self {
        let output_path = match filename {
            Some(filename) => PathBuf::from(filename),
            None => default_out_dir.join(derive_filename_from_url(url)),
        };

        let referer = match referer {
            Some(referer) if !referer.is_empty() => referer.to_string(),
            _ => derive_referer(url),
        };

        Self {
            url: url.to_string(),
            output_path,
            referer,
        }
    }
}

/// `scheme://[userinfo@]host[:port]/` of a URL, or an empty string when it
/// has no host.
///
/// A port equal to the scheme's default is dropped by URL parsing.
pub fn derive_referer(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return String::new();
    };

    let Some(host) = parsed.host_str() else {
        return String::new();
    };
    if host.is_empty() {
        return String::new();
    }

    format!("{}/", &parsed[..Position::BeforePath])
}
