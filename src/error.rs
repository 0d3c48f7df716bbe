//! Error types for the image-ingest application.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that abort the whole run.
///
/// Per-item download problems are not represented here; see
/// [`crate::fetch::FetchFailure`].
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Manifest errors
    #[error("List file not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("No images found in list file {} (empty or only comments).", .0.display())]
    EmptyManifest(PathBuf),

    // Dataset errors
    #[error("Invalid dataset id '{0}'")]
    InvalidDataset(String),

    #[error("Dataset directory not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    #[error("Dataset path is not a directory: {}", .0.display())]
    DatasetNotDirectory(PathBuf),

    // Repository errors
    #[error("Not a git repository (or git not available). Details:\n{0}")]
    NotARepository(String),

    #[error("Command failed: {command}\n{output}")]
    GitCommand { command: String, output: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_)
            | Error::ConfigValidation { .. }
            | Error::TomlParse(_)
            | Error::ManifestNotFound(_)
            | Error::EmptyManifest(_)
            | Error::InvalidDataset(_)
            | Error::DatasetNotFound(_)
            | Error::DatasetNotDirectory(_) => exit_codes::INPUT_ERROR,
            Error::NotARepository(_) | Error::GitCommand { .. } => exit_codes::REPOSITORY_ERROR,
            Error::Io(_) | Error::Http(_) => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const UNEXPECTED_ERROR: i32 = 1;
    pub const INPUT_ERROR: i32 = 2;
    pub const REPOSITORY_ERROR: i32 = 3;
}
