//! Download module.
//!
//! Handles:
//! - Fetching and storing a single work item
//! - Skipping files whose content did not change
//! - Per-run statistics

pub mod single;
pub mod state;
pub mod writer;

pub use single::download_item;
pub use state::{ItemOutcome, RunStats};
pub use writer::{write_if_changed, WriteOutcome};
