//! Console output utilities.
//!
//! Every line starts with a bracketed tag so a run leaves a readable audit
//! trail: `[ok]`, `[skip]`, `[fail]`, `[git]`, `[done]`, `[error]`.
//! The `*_line` functions build the plain text; the `print_*` functions color
//! the tag and write it out.

use std::path::Path;

use console::{style, Color};

use crate::download::ItemOutcome;

/// `[ok] <url> -> <path> (<n> bytes)`
pub fn ok_line(url: &str, path: &Path, bytes: u64) -> String {
    format!("[ok] {} -> {} ({} bytes)", url, path.display(), bytes)
}

/// `[skip] unchanged: <path>`
pub fn skip_unchanged_line(path: &Path) -> String {
    format!("[skip] unchanged: {}", path.display())
}

/// `[fail] <url> -> <reason>`
pub fn fail_line(url: &str, reason: &str) -> String {
    format!("[fail] {} -> {}", url, reason)
}

pub fn git_line(message: &str) -> String {
    format!("[git] {}", message)
}

pub fn error_line(message: &str) -> String {
    format!("[error] {}", message)
}

/// The tagged line for an item outcome.
pub fn outcome_line(url: &str, outcome: &ItemOutcome) -> String {
    match outcome {
        ItemOutcome::Written { path, bytes } => ok_line(url, path, *bytes),
        ItemOutcome::Unchanged { path } => skip_unchanged_line(path),
        ItemOutcome::Failed { failure } => fail_line(url, &failure.to_string()),
    }
}

/// Split off the leading tag and color it.
fn styled(line: &str, color: Color) -> String {
    match line.split_once(' ') {
        Some((tag, rest)) => format!("{} {}", style(tag).fg(color).bold(), rest),
        None => style(line).fg(color).bold().to_string(),
    }
}

/// Print a git step.
pub fn print_git(message: &str) {
    println!("{}", styled(&git_line(message), Color::Cyan));
}

/// Print a fatal error to stderr.
pub fn print_error(message: &str) {
    eprintln!("{}", styled(&error_line(message), Color::Red));
}

/// Print the tagged line for an item outcome.
pub fn print_outcome(url: &str, outcome: &ItemOutcome) {
    let color = match outcome {
        ItemOutcome::Written { .. } => Color::Green,
        ItemOutcome::Unchanged { .. } => Color::Yellow,
        ItemOutcome::Failed { .. } => Color::Red,
    };
    println!("{}", styled(&outcome_line(url, outcome), color));
}
