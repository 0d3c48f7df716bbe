//! Output module for console output and progress.
//!
//! Provides:
//! - Tagged console lines
//! - Item progress bar
//! - Run summary

pub mod console;
pub mod progress;
pub mod stats;

pub use self::console::{
    error_line, fail_line, git_line, ok_line, outcome_line, print_error, print_git, print_outcome,
    skip_unchanged_line,
};
pub use progress::create_item_bar;
pub use stats::{print_summary, summary_line};
