//! JSON configuration for the command-line tools.
use crate::dataset::{DatasetFiles, DatasetPaths, LoadOptions};
use crate::idx::DecodeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct LoaderConfig {
    #[serde(rename = "base_dir")]
    pub base_dir: PathBuf,
    #[serde(default)]
    pub files: DatasetFiles,
    #[serde(default)]
    pub mode: DecodeMode,
    #[serde(default)]
    pub parallel: bool,
    #[serde(default)]
    pub printout: PrintoutConfig,
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl LoaderConfig {
    pub fn paths(&self) -> DatasetPaths {
        self.files.resolve(&self.base_dir)
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            mode: self.mode,
            parallel: self.parallel,
        }
    }
}

/// Training items `start..end` to print as ASCII art.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PrintoutConfig {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(rename = "summary_json")]
    pub summary_json: PathBuf,
    #[serde(default)]
    pub png_dir: Option<PathBuf>,
    /// How many training items to export when `png_dir` is set.
    #[serde(default = "default_png_limit")]
    pub png_limit: usize,
}

fn default_png_limit() -> usize {
    16
}

pub fn parse_config(json: &str) -> Result<LoaderConfig, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {e}"))
}

pub fn load_config(path: &Path) -> Result<LoaderConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
