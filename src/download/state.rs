//! Download outcomes and run statistics.

use std::path::PathBuf;

use crate::fetch::FetchFailure;

/// Result of processing one work item.
#[derive(Debug)]
pub enum ItemOutcome {
    /// New or changed content was written.
    Written { path: PathBuf, bytes: u64 },
    /// The file on disk already had this content.
    Unchanged { path: PathBuf },
    /// The item could not be downloaded or stored.
    Failed { failure: FetchFailure },
}

impl ItemOutcome {
    /// Written and unchanged items both count as downloaded.
    pub fn is_ok(&self) -> bool {
        !matches!(self, ItemOutcome::Failed { .. })
    }
}

/// Counters for a whole run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub total: u64,
    pub written: u64,
    pub unchanged: u64,
    pub failed: u64,
}

impl RunStats {
    /// Count one item outcome.
    pub fn record(&mut self, outcome: &ItemOutcome) {
        self.total += 1;
        match outcome {
            ItemOutcome::Written { .. } => self.written += 1,
            ItemOutcome::Unchanged { .. } => self.unchanged += 1,
            ItemOutcome::Failed { .. } => self.failed += 1,
        }
    }

    /// Items that ended up on disk, either freshly written or already present.
    pub fn ok(&self) -> u64 {
        self.written + self.unchanged
    }
}
