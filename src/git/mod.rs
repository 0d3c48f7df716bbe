//! Git integration.
//!
//! The pipeline only talks to git through the [`Git`] trait so tests can swap
//! in a fake instead of running the real binary.

pub mod cli;
pub mod commit;

use async_trait::async_trait;

use crate::error::Result;

pub use cli::CliGit;
pub use commit::{commit_changes, CommitOutcome};

/// The porcelain operations the pipeline needs.
#[async_trait]
pub trait Git: Send + Sync {
    /// Fail with [`crate::Error::NotARepository`] unless inside a work tree.
    async fn ensure_work_tree(&self) -> Result<()>;

    /// Stage every working tree change (`git add -A`).
    async fn stage_all(&self) -> Result<()>;

    /// Short status (`git status --porcelain`); empty when clean.
    async fn status_porcelain(&self) -> Result<String>;

    /// Commit staged changes.
    async fn commit(&self, message: &str) -> Result<()>;

    /// Push the current branch.
    async fn push(&self) -> Result<()>;
}
