//! Training/test dataset built from two IDX file pairs under one directory.
use crate::diagnostics::LoadReport;
use crate::idx::{DatasetDecoder, DecodeError, DecodeMode};
use crate::render::{render_range, OutOfRange};
use crate::types::ImageSet;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub const TRAIN_IMAGES: &str = "train-images.idx3-ubyte";
pub const TRAIN_LABELS: &str = "train-labels.idx1-ubyte";
pub const TEST_IMAGES: &str = "t10k-images-idx3-ubyte";
pub const TEST_LABELS: &str = "t10k-labels-idx1-ubyte";

/// File names of one split, relative to the dataset directory.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SplitFiles {
    pub images: String,
    pub labels: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatasetFiles {
    pub training: SplitFiles,
    pub test: SplitFiles,
}

impl Default for DatasetFiles {
    fn default() -> Self {
        Self {
            training: SplitFiles {
                images: TRAIN_IMAGES.to_string(),
                labels: TRAIN_LABELS.to_string(),
            },
            test: SplitFiles {
                images: TEST_IMAGES.to_string(),
                labels: TEST_LABELS.to_string(),
            },
        }
    }
}

impl DatasetFiles {
    pub fn resolve(&self, base_dir: &Path) -> DatasetPaths {
        let split = |files: &SplitFiles| SplitPaths {
            images: base_dir.join(&files.images),
            labels: base_dir.join(&files.labels),
        };
        DatasetPaths {
            training: split(&self.training),
            test: split(&self.test),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitPaths {
    pub images: PathBuf,
    pub labels: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetPaths {
    pub training: SplitPaths,
    pub test: SplitPaths,
}

impl DatasetPaths {
    /// Conventional file names joined onto `base_dir`.
    pub fn from_base_dir(base_dir: impl AsRef<Path>) -> Self {
        DatasetFiles::default().resolve(base_dir.as_ref())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LoadOptions {
    pub mode: DecodeMode,
    /// Decode the two splits on separate rayon tasks.
    pub parallel: bool,
}

/// Decoded training and test collections. Populated once, read-only after.
#[derive(Clone, Debug)]
pub struct Dataset {
    training: ImageSet,
    test: ImageSet,
}

impl Dataset {
    /// Strict, sequential load of the conventional files under `base_dir`.
    pub fn open(base_dir: impl AsRef<Path>) -> Result<Self, DecodeError> {
        Self::load(&DatasetPaths::from_base_dir(base_dir), LoadOptions::default())
    }

    pub fn load(paths: &DatasetPaths, options: LoadOptions) -> Result<Self, DecodeError> {
        Self::load_with_report(paths, options).map(|(dataset, _)| dataset)
    }

    pub fn load_with_report(
        paths: &DatasetPaths,
        options: LoadOptions,
    ) -> Result<(Self, LoadReport), DecodeError> {
        let t0 = Instant::now();
        let decoder = DatasetDecoder::new(options.mode);
        let decode = |split: &SplitPaths| decoder.decode_with_report(&split.images, &split.labels);

        let (training, test) = if options.parallel {
            rayon::join(|| decode(&paths.training), || decode(&paths.test))
        } else {
            (decode(&paths.training), decode(&paths.test))
        };
        let (training, training_report) = training?;
        let (test, test_report) = test?;

        let report = LoadReport {
            training: training_report,
            test: test_report,
            parallel: options.parallel,
            total_ms: t0.elapsed().as_secs_f64() * 1000.0,
        };
        debug!(
            "Dataset::load training={} test={} parallel={} ms={:.3}",
            training.len(),
            test.len(),
            options.parallel,
            report.total_ms
        );
        Ok((Self { training, test }, report))
    }

    pub fn training(&self) -> &ImageSet {
        &self.training
    }

    pub fn test(&self) -> &ImageSet {
        &self.test
    }

    /// ASCII art of training items `start..end`.
    pub fn printout(&self, start: usize, end: usize) -> Result<String, OutOfRange> {
        render_range(&self.training, start, end)
    }
}
