//! Output directory layout and dataset checks.

use std::path::{Path, PathBuf};

use crate::config::validate_dataset_id;
use crate::error::{Error, Result};

/// Directory holding one sub-directory per dataset.
pub const DATASETS_DIR: &str = "datasets";

/// Default output directory when neither `--out` nor `--dataset` is given.
pub const DEFAULT_ASSETS_DIR: &str = "assets/images";

/// Images directory inside a dataset.
pub const DATASET_IMAGES_SUBDIR: &str = "assets/images";

/// Where datasets and default assets live, relative to the working directory.
#[derive(Debug, Clone)]
pub struct Layout {
    pub datasets_dir: PathBuf,
    pub default_assets_dir: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            datasets_dir: PathBuf::from(DATASETS_DIR),
            default_assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }
}

impl Layout {
    /// Root directory of a dataset.
    pub fn dataset_root(&self, dataset_id: &str) -> PathBuf {
        self.datasets_dir.join(dataset_id)
    }

    /// Default output directory for items without an explicit filename.
    ///
    /// `out` wins over `dataset`; without either the default assets directory
    /// is used.
    pub fn output_dir(&self, dataset: Option<&str>, out: Option<&Path>) -> PathBuf {
        if let Some(out) = out {
            return out.to_path_buf();
        }

        match dataset {
            Some(id) => self.dataset_root(id).join(DATASET_IMAGES_SUBDIR),
            None => self.default_assets_dir.clone(),
        }
    }

    /// Check that the dataset directory exists and is a directory.
    pub fn ensure_dataset(&self, dataset_id: &str) -> Result<PathBuf> {
        validate_dataset_id(dataset_id)?;

        let root = self.dataset_root(dataset_id);
        if !root.exists() {
            return Err(Error::DatasetNotFound(root));
        }
        if !root.is_dir() {
            return Err(Error::DatasetNotDirectory(root));
        }

        Ok(root)
    }
}
