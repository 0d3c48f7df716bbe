//! Manifest module for work item representation and parsing.

pub mod item;
pub mod parser;

pub use item::{derive_referer, WorkItem};
pub use parser::{parse_line, parse_manifest, parse_manifest_str};
