//! Filesystem module.
//!
//! Provides:
//! - Filename derivation and sanitization
//! - Content-type based extensions
//! - Output directory layout and dataset checks

pub mod naming;
pub mod paths;

pub use naming::{
    derive_filename_from_url, extension_from_content_type, has_extension, media_type,
    sanitize_filename, with_content_type_extension,
};
pub use paths::Layout;
