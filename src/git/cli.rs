//! Git backed by the external `git` binary.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Error, Result};
use crate::git::Git;

/// Runs git commands as child processes.
///
/// Output of both streams is captured and attached to the error when a
/// command exits non-zero.
#[derive(Debug, Clone)]
pub struct CliGit {
    binary_path: PathBuf,
    work_dir: Option<PathBuf>,
}

impl CliGit {
    /// Create a handler with an explicit binary path.
    pub fn new(binary_path: PathBuf) -> Self {
        Self {
            binary_path,
            work_dir: None,
        }
    }

    /// Locate `git` on the PATH.
    pub fn from_path() -> Result<Self> {
        which::which("git")
            .map(Self::new)
            .map_err(|e| Error::NotARepository(format!("git executable not found: {}", e)))
    }

    /// Run commands in `dir` instead of the current directory.
    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }

    /// Run `git <args>` and return its trimmed combined output.
    async fn run(&self, args: &[&str]) -> Result<String> {
        let command = format!("git {}", args.join(" "));
        tracing::debug!("Running {}", command);

        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args);
        if let Some(dir) = &self.work_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().await.map_err(|e| Error::GitCommand {
            command: command.clone(),
            output: format!("failed to execute git: {}", e),
        })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        let combined = combined.trim().to_string();

        if !output.status.success() {
            return Err(Error::GitCommand {
                command,
                output: combined,
            });
        }

        Ok(combined)
    }
}

#[async_trait]
impl Git for CliGit {
    async fn ensure_work_tree(&self) -> Result<()> {
        self.run(&["rev-parse", "--is-inside-work-tree"])
            .await
            .map(|_| ())
            .map_err(|e| Error::NotARepository(e.to_string()))
    }

    async fn stage_all(&self) -> Result<()> {
        self.run(&["add", "-A"]).await.map(|_| ())
    }

    async fn status_porcelain(&self) -> Result<String> {
        self.run(&["status", "--porcelain"]).await
    }

    async fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).await.map(|_| ())
    }

    async fn push(&self) -> Result<()> {
        self.run(&["push"]).await.map(|_| ())
    }
}
