//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use image_ingest::fs::Layout;
use image_ingest::{Error, FetchConfig, Git, ImageFetcher, Result, RunOptions};

/// Fetch settings without any sleeping.
pub fn fast_config() -> FetchConfig {
    FetchConfig {
        backoff_base_ms: 0,
        throttle_ms: 0,
        ..FetchConfig::default()
    }
}

pub fn fast_fetcher() -> ImageFetcher {
    ImageFetcher::new(&fast_config()).expect("failed to build fetcher")
}

/// Run options rooted in a scratch directory.
pub fn options_in(root: &Path) -> RunOptions {
    RunOptions {
        list: root.join("images.txt"),
        layout: Layout {
            datasets_dir: root.join("datasets"),
            default_assets_dir: root.join("assets/images"),
        },
        ..RunOptions::default()
    }
}

/// In-memory stand-in for git that records every call.
#[derive(Default)]
pub struct FakeGit {
    pub not_a_repo: bool,
    statuses: Mutex<VecDeque<String>>,
    calls: Mutex<Vec<String>>,
}

impl FakeGit {
    /// A repository whose successive `status --porcelain` calls return `statuses`.
    pub fn with_statuses(statuses: &[&str]) -> Self {
        Self {
            statuses: Mutex::new(statuses.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        }
    }

    pub fn outside_repo() -> Self {
        Self {
            not_a_repo: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

#[async_trait]
impl Git for FakeGit {
    async fn ensure_work_tree(&self) -> Result<()> {
        self.record("rev-parse");
        if self.not_a_repo {
            return Err(Error::NotARepository("fatal: not a git repository".into()));
        }
        Ok(())
    }

    async fn stage_all(&self) -> Result<()> {
        self.record("add");
        Ok(())
    }

    async fn status_porcelain(&self) -> Result<String> {
        self.record("status");
        Ok(self.statuses.lock().unwrap().pop_front().unwrap_or_default())
    }

    async fn commit(&self, message: &str) -> Result<()> {
        self.record(format!("commit {}", message));
        Ok(())
    }

    async fn push(&self) -> Result<()> {
        self.record("push");
        Ok(())
    }
}
