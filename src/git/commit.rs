//! Staging, committing and pushing downloaded files.

use crate::error::Result;
use crate::git::Git;
use crate::output::print_git;

/// What the commit step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Commit step disabled by `--no-commit`.
    Skipped,
    /// Staging left the tree clean.
    NothingToCommit,
    /// A commit was created, and pushed if requested.
    Committed { pushed: bool },
}

/// Stage everything, commit if anything changed, push if asked to.
///
/// Errors from commit or push abort the run: a half-finished git state needs
/// a human.
pub async fn commit_changes(git: &dyn Git, message: &str, push: bool) -> Result<CommitOutcome> {
    git.stage_all().await?;

    let status = git.status_porcelain().await?;
    if status.trim().is_empty() {
        print_git("no changes to commit");
        return Ok(CommitOutcome::NothingToCommit);
    }

    git.commit(message).await?;
    print_git("committed");

    if !push {
        print_git("push skipped (use --push to enable)");
        return Ok(CommitOutcome::Committed { pushed: false });
    }

    git.push().await?;
    print_git("pushed");
    Ok(CommitOutcome::Committed { pushed: true })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::Error;

    #[derive(Default)]
    struct RecordingGit {
        status: String,
        fail_push: bool,
        calls: Mutex<Vec<String>>,
    }

    impl RecordingGit {
        fn with_status(status: &str) -> Self {
            Self {
                status: status.to_string(),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: impl Into<String>) {
            self.calls.lock().unwrap().push(call.into());
        }
    }

    #[async_trait]
    impl Git for RecordingGit {
        async fn ensure_work_tree(&self) -> Result<()> {
            self.record("rev-parse");
            Ok(())
        }

        async fn stage_all(&self) -> Result<()> {
            self.record("add");
            Ok(())
        }

        async fn status_porcelain(&self) -> Result<String> {
            self.record("status");
            Ok(self.status.clone())
        }

        async fn commit(&self, message: &str) -> Result<()> {
            self.record(format!("commit {}", message));
            Ok(())
        }

        async fn push(&self) -> Result<()> {
            self.record("push");
            if self.fail_push {
                return Err(Error::GitCommand {
                    command: "git push".into(),
                    output: "rejected".into(),
                });
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_clean_tree_skips_commit_and_push() {
        let git = RecordingGit::with_status("  \n");
        let outcome = commit_changes(&git, "msg", true).await.unwrap();

        assert_eq!(outcome, CommitOutcome::NothingToCommit);
        assert_eq!(git.calls(), vec!["add", "status"]);
    }

    #[tokio::test]
    async fn test_commit_without_push() {
        let git = RecordingGit::with_status("A  assets/images/a.jpg");
        let outcome = commit_changes(&git, "Add downloaded images", false)
            .await
            .unwrap();

        assert_eq!(outcome, CommitOutcome::Committed { pushed: false });
        assert_eq!(
            git.calls(),
            vec!["add", "status", "commit Add downloaded images"]
        );
    }

    #[tokio::test]
    async fn test_commit_and_push() {
        let git = RecordingGit::with_status("A  a.jpg");
        let outcome = commit_changes(&git, "msg", true).await.unwrap();

        assert_eq!(outcome, CommitOutcome::Committed { pushed: true });
        assert_eq!(git.calls(), vec!["add", "status", "commit msg", "push"]);
    }

    #[tokio::test]
    async fn test_push_failure_is_fatal() {
        let git = RecordingGit {
            status: "A  a.jpg".into(),
            fail_push: true,
            ..Default::default()
        };

        let err = commit_changes(&git, "msg", true).await.unwrap_err();
        assert!(matches!(err, Error::GitCommand { .. }));
    }
}
