//! image-ingest - download images listed in a manifest and commit them to git.
//!
//! A run is a straight pipeline:
//!
//! 1. parse the manifest into [`WorkItem`]s
//! 2. fetch each URL (HEAD probe, GET with retries, image validation)
//! 3. write the bytes unless the file already holds the same content
//! 4. stage, commit and optionally push through [`git::Git`]
//!
//! # Example
//!
//! ```no_run
//! use image_ingest::{pipeline, CliGit, Config, ImageFetcher, RunOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default().with_env_overrides();
//!     let fetcher = ImageFetcher::new(&config.fetch)?;
//!     let git = CliGit::from_path()?;
//!
//!     let report = pipeline::run(&RunOptions::default(), &fetcher, &git).await?;
//!     println!("{} of {} stored", report.stats.ok(), report.stats.total);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod dedup;
pub mod download;
pub mod error;
pub mod fetch;
pub mod fs;
pub mod git;
pub mod manifest;
pub mod output;
pub mod pipeline;

// Re-exports for convenience
pub use config::{Config, FetchConfig};
pub use download::{download_item, ItemOutcome, RunStats};
pub use error::{Error, Result};
pub use fetch::{FetchFailure, ImageFetcher};
pub use git::{CliGit, CommitOutcome, Git};
pub use manifest::WorkItem;
pub use pipeline::{RunOptions, RunReport};
