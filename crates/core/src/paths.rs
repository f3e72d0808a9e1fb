//! Locating the dictionary files inside a data directory.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// File name of the CMU Pronouncing Dictionary inside the data directory.
pub const CMU_DICT_FILE: &str = "cmudict-0.7b.txt";

/// File name of the supplementary dictionary inside the data directory.
pub const FALLBACK_DICT_FILE: &str = "phonenems_en.txt";

/// Absolute locations of the primary and fallback dictionaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub cmu_dict: PathBuf,
    pub fallback_dict: PathBuf,
}

impl DataPaths {
    /// Join the fixed dictionary file names under `data_dir`.
    pub fn from_data_dir(data_dir: &Path) -> Self {
        Self {
            cmu_dict: data_dir.join(CMU_DICT_FILE),
            fallback_dict: data_dir.join(FALLBACK_DICT_FILE),
        }
    }
}

/// Check that `data_dir` exists and is a directory.
pub fn validate_data_dir(data_dir: &Path) -> Result<()> {
    if !data_dir.is_dir() {
        bail!("{} is not a valid directory", data_dir.display());
    }
    Ok(())
}
