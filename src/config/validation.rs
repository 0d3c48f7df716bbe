//! Configuration validation logic.

use std::path::{Component, Path};

use crate::config::loader::{Config, FetchConfig};
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_fetch(&config.fetch)
}

/// Validate fetch settings.
pub fn validate_fetch(fetch: &FetchConfig) -> Result<()> {
    if fetch.max_attempts == 0 {
        return Err(Error::ConfigValidation {
            field: "fetch.max_attempts".to_string(),
            message: "At least one attempt is required".to_string(),
        });
    }

    if fetch.head_timeout_secs == 0 || fetch.get_timeout_secs == 0 {
        return Err(Error::ConfigValidation {
            field: "fetch timeouts".to_string(),
            message: "Timeouts must be greater than zero".to_string(),
        });
    }

    if let Some(code) = fetch
        .retry_statuses
        .iter()
        .find(|code| !(100..=599).contains(*code))
    {
        return Err(Error::ConfigValidation {
            field: "fetch.retry_statuses".to_string(),
            message: format!("{} is not an HTTP status code", code),
        });
    }

    if fetch.pool_max_idle_per_host == 0 {
        return Err(Error::ConfigValidation {
            field: "fetch.pool_max_idle_per_host".to_string(),
            message: "Pool size must be at least 1".to_string(),
        });
    }

    Ok(())
}

/// Validate a dataset id before it is joined onto the datasets directory.
pub fn validate_dataset_id(dataset_id: &str) -> Result<()> {
    if dataset_id.trim().is_empty() {
        return Err(Error::InvalidDataset(dataset_id.to_string()));
    }

    let escapes = Path::new(dataset_id).components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes {
        return Err(Error::InvalidDataset(dataset_id.to_string()));
    }

    Ok(())
}
