//! Configuration structures and loading logic.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable that overrides the HTTP User-Agent.
pub const USER_AGENT_ENV: &str = "IMG_UA";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// HTTP fetching, retry and throttling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// User-Agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Accept header favoring common image formats.
    #[serde(default = "default_accept")]
    pub accept: String,

    /// Accept-Language header.
    #[serde(default = "default_accept_language")]
    pub accept_language: String,

    /// Maximum number of attempts per request, the first one included.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay before the first retry; doubles for each further retry.
    #[serde(default = "default_backoff_base_ms")]
    pub backoff_base_ms: u64,

    /// Upper bound for any single retry delay.
    #[serde(default = "default_max_backoff_secs")]
    pub max_backoff_secs: u64,

    /// Status codes that trigger a retry.
    #[serde(default = "default_retry_statuses")]
    pub retry_statuses: Vec<u16>,

    /// Timeout for the HEAD probe.
    #[serde(default = "default_head_timeout_secs")]
    pub head_timeout_secs: u64,

    /// Timeout for the GET request.
    #[serde(default = "default_get_timeout_secs")]
    pub get_timeout_secs: u64,

    /// Pause after every item, whatever its outcome.
    #[serde(default = "default_throttle_ms")]
    pub throttle_ms: u64,

    /// Idle connections kept per host in the client pool.
    #[serde(default = "default_pool_size")]
    pub pool_max_idle_per_host: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            accept: default_accept(),
            accept_language: default_accept_language(),
            max_attempts: default_max_attempts(),
            backoff_base_ms: default_backoff_base_ms(),
            max_backoff_secs: default_max_backoff_secs(),
            retry_statuses: default_retry_statuses(),
            head_timeout_secs: default_head_timeout_secs(),
            get_timeout_secs: default_get_timeout_secs(),
            throttle_ms: default_throttle_ms(),
            pool_max_idle_per_host: default_pool_size(),
        }
    }
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string()
}

fn default_accept() -> String {
    "image/avif,image/webp,image/apng,image/*,*/*;q=0.8".to_string()
}

fn default_accept_language() -> String {
    "en-US,en;q=0.9".to_string()
}

fn default_max_attempts() -> u32 {
    5
}

fn default_backoff_base_ms() -> u64 {
    600
}

fn default_max_backoff_secs() -> u64 {
    120
}

fn default_retry_statuses() -> Vec<u16> {
    vec![403, 408, 429, 500, 502, 503, 504]
}

fn default_head_timeout_secs() -> u64 {
    20
}

fn default_get_timeout_secs() -> u64 {
    40
}

fn default_throttle_ms() -> u64 {
    300
}

fn default_pool_size() -> usize {
    10
}

impl FetchConfig {
    pub fn backoff_base(&self) -> Duration {
        Duration::from_millis(self.backoff_base_ms)
    }

    pub fn max_backoff(&self) -> Duration {
        Duration::from_secs(self.max_backoff_secs)
    }

    pub fn head_timeout(&self) -> Duration {
        Duration::from_secs(self.head_timeout_secs)
    }

    pub fn get_timeout(&self) -> Duration {
        Duration::from_secs(self.get_timeout_secs)
    }

    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise start from defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply overrides taken from the process environment.
    pub fn with_env_overrides(self) -> Self {
        let user_agent = std::env::var(USER_AGENT_ENV).ok();
        self.with_user_agent_override(user_agent)
    }

    /// Replace the User-Agent when an override is present.
    pub fn with_user_agent_override(mut self, user_agent: Option<String>) -> Self {
        if let Some(user_agent) = user_agent {
            self.fetch.user_agent = user_agent;
        }
        self
    }
}
