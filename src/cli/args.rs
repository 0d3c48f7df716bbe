//! Command-line argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::fs::Layout;
use crate::pipeline::{RunOptions, DEFAULT_COMMIT_MESSAGE, DEFAULT_LIST_FILE};

/// Image manifest downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "image-ingest",
    version,
    about = "Download images listed in a manifest and commit them to git",
    long_about = "Reads a manifest of image URLs (one per line: URL [FILENAME [REFERER]]),\n\
                  downloads each image and commits the results to the current git repository.\n\n\
                  Set IMG_UA to override the User-Agent sent with every request."
)]
pub struct Args {
    /// Path to the images list file.
    #[arg(long, default_value = DEFAULT_LIST_FILE)]
    pub list: PathBuf,

    /// Dataset id under datasets/; sets the default output to
    /// datasets/<id>/assets/images.
    #[arg(long)]
    pub dataset: Option<String>,

    /// Default output directory; overrides --dataset.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Git commit message.
    #[arg(long, default_value = DEFAULT_COMMIT_MESSAGE)]
    pub commit_message: String,

    /// Download but do not commit changes.
    #[arg(long)]
    pub no_commit: bool,

    /// Push after committing changes.
    #[arg(long)]
    pub push: bool,

    /// Optional TOML file with a [fetch] section.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Turn parsed arguments into run options.
    pub fn to_run_options(&self) -> RunOptions {
        RunOptions {
            list: self.list.clone(),
            dataset: self
                .dataset
                .clone()
                .filter(|id| !id.trim().is_empty()),
            out: self.out.clone(),
            commit_message: self.commit_message.clone(),
            no_commit: self.no_commit,
            push: self.push,
            layout: Layout::default(),
        }
    }
}
