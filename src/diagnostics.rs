//! Load reports returned next to the decoded collections.
//!
//! A `SplitReport` records what one image/label pair declared, what was
//! actually materialised, and every degradation lenient decoding swallowed.
use crate::idx::{DecodeMode, ImageHeader, LabelHeader};
use crate::types::ImageSet;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitReport {
    pub images_path: PathBuf,
    pub labels_path: PathBuf,
    pub mode: DecodeMode,
    pub image_header: Option<ImageHeader>,
    pub label_header: Option<LabelHeader>,
    pub items: usize,
    pub rows: usize,
    pub cols: usize,
    pub labels_attached: bool,
    /// Conditions lenient decoding stepped over (always empty in strict mode).
    pub degradations: Vec<String>,
    pub elapsed_ms: f64,
}

impl SplitReport {
    pub fn new(images_path: &Path, labels_path: &Path, mode: DecodeMode) -> Self {
        Self {
            images_path: images_path.to_path_buf(),
            labels_path: labels_path.to_path_buf(),
            mode,
            image_header: None,
            label_header: None,
            items: 0,
            rows: 0,
            cols: 0,
            labels_attached: false,
            degradations: Vec::new(),
            elapsed_ms: 0.0,
        }
    }

    pub(crate) fn finish(&mut self, set: &ImageSet, elapsed_ms: f64) {
        self.items = set.len();
        self.rows = set.rows();
        self.cols = set.cols();
        self.labels_attached = set.is_labeled();
        self.elapsed_ms = elapsed_ms;
    }

    /// True when nothing was skipped or zero-filled.
    pub fn is_clean(&self) -> bool {
        self.degradations.is_empty()
    }
}

/// Reports for both splits of a dataset load.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadReport {
    pub training: SplitReport,
    pub test: SplitReport,
    pub parallel: bool,
    pub total_ms: f64,
}
