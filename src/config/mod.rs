//! Configuration module for image-ingest.
//!
//! This module handles:
//! - Loading fetch settings from an optional TOML file
//! - Environment overrides
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, FetchConfig, USER_AGENT_ENV};
pub use validation::{validate_config, validate_dataset_id, validate_fetch};
