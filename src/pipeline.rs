//! One ingestion run: preconditions, downloads, commit.

use std::path::PathBuf;

use crate::download::{download_item, RunStats};
use crate::error::Result;
use crate::fetch::ImageFetcher;
use crate::fs::Layout;
use crate::git::{commit_changes, CommitOutcome, Git};
use crate::manifest::{parse_manifest, WorkItem};
use crate::output::{create_item_bar, print_git, print_outcome, print_summary};

/// Manifest read when `--list` is not given.
pub const DEFAULT_LIST_FILE: &str = "images.txt";

/// Commit message used when `--commit-message` is not given.
pub const DEFAULT_COMMIT_MESSAGE: &str = "Add downloaded images";

/// Everything a run needs besides its collaborators.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub list: PathBuf,
    pub dataset: Option<String>,
    pub out: Option<PathBuf>,
    pub commit_message: String,
    pub no_commit: bool,
    pub push: bool,
    pub layout: Layout,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            list: PathBuf::from(DEFAULT_LIST_FILE),
            dataset: None,
            out: None,
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
            no_commit: false,
            push: false,
            layout: Layout::default(),
        }
    }
}

impl RunOptions {
    /// The dataset id, if one was given. Blank ids count as absent.
    pub fn dataset_id(&self) -> Option<&str> {
        self.dataset
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }

    /// Default output directory for entries without a filename.
    pub fn output_dir(&self) -> PathBuf {
        self.layout.output_dir(self.dataset_id(), self.out.as_deref())
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub stats: RunStats,
    pub commit: CommitOutcome,
}

/// Run the whole pipeline.
///
/// Preconditions are checked before any request is made. Individual download
/// failures are counted in the report; only fatal problems return `Err`.
pub async fn run(options: &RunOptions, fetcher: &ImageFetcher, git: &dyn Git) -> Result<RunReport> {
    git.ensure_work_tree().await?;

    if let Some(dataset) = options.dataset_id() {
        options.layout.ensure_dataset(dataset)?;
    }

    let out_dir = options.output_dir();
    let items = parse_manifest(&options.list, &out_dir)?;

    let stats = download_all(fetcher, &items).await;
    print_summary(&stats);

    let commit = if options.no_commit {
        print_git("--no-commit set; skipping commit/push");
        CommitOutcome::Skipped
    } else {
        commit_changes(git, &options.commit_message, options.push).await?
    };

    Ok(RunReport { stats, commit })
}

/// Download every item in order, one at a time.
///
/// Each item is followed by the configured throttle pause, whatever its
/// outcome.
pub async fn download_all(fetcher: &ImageFetcher, items: &[WorkItem]) -> RunStats {
    let mut stats = RunStats::default();
    let throttle = fetcher.config().throttle();
    let bar = create_item_bar(items.len() as u64, "Downloading");

    for item in items {
        let outcome = download_item(fetcher, item).await;
        bar.suspend(|| print_outcome(&item.url, &outcome));
        stats.record(&outcome);
        bar.inc(1);

        tokio::time::sleep(throttle).await;
    }

    bar.finish_and_clear();
    stats
}
