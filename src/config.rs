//! Configuration loaded from `hoi.toml`
//!
//! # Example hoi.toml
//!
//! ```toml
//! [dataset]
//! path = "datasets/h2o"
//!
//! [analysis]
//! # "per-verb" reproduces the reference totals, "per-sample" appends
//! # each qualifying sample at most once per collection
//! append_policy = "per-sample"
//! ```
//!
//! Every key is optional. Command line flags take precedence over the file.

use crate::analysis::AppendPolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default dataset location, relative to the working directory
pub const DEFAULT_DATASET_PATH: &str = "datasets/h2o";

/// Root configuration for hoi.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HoiConfig {
    pub dataset: DatasetConfig,
    pub analysis: AnalysisConfig,
}

/// Where the dataset lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetConfig {
    pub path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATASET_PATH),
        }
    }
}

/// Settings of the co-occurrence analysis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub append_policy: AppendPolicy,
}

impl HoiConfig {
    /// Load configuration from a TOML file
    ///
    /// ```no_run
    /// use hoi::config::HoiConfig;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let config = HoiConfig::from_file("hoi.toml")?;
    /// println!("Dataset: {}", config.dataset.path.display());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML")
    }
}
