//! Statistics reporting.

use console::style;

use crate::download::RunStats;

/// Summary line, e.g. `1/3 downloaded`.
pub fn summary_line(stats: &RunStats) -> String {
    format!("{}/{} downloaded", stats.ok(), stats.total)
}

/// Print the end-of-run summary.
pub fn print_summary(stats: &RunStats) {
    println!("{} {}", style("[done]").bold(), summary_line(stats));
    if stats.unchanged > 0 || stats.failed > 0 {
        tracing::debug!(
            "written: {}, unchanged: {}, failed: {}",
            stats.written,
            stats.unchanged,
            stats.failed
        );
    }
}
