#![doc = include_str!("../README.md")]

// Public modules
pub mod dataset;
pub mod diagnostics;
pub mod idx;
pub mod image;
pub mod render;
pub mod types;

// Tool support
pub mod config;

// --- High-level re-exports -------------------------------------------------

pub use crate::dataset::{Dataset, DatasetPaths, LoadOptions};
pub use crate::diagnostics::{LoadReport, SplitReport};
pub use crate::idx::{DatasetDecoder, DecodeError, DecodeMode};
pub use crate::types::{ImageSet, LabeledImage};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use mnist_idx::prelude::*;
///
/// # fn main() -> Result<(), DecodeError> {
/// let dataset = Dataset::open("data/")?;
/// let first = &dataset.training()[0];
/// println!("label={} size={}x{}", first.label(), first.rows(), first.cols());
/// print!("{}", dataset.printout(0, 1).unwrap_or_default());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageView, PixelGrid};
    pub use crate::{
        Dataset, DatasetDecoder, DatasetPaths, DecodeError, DecodeMode, ImageSet, LabeledImage,
        LoadOptions,
    };
}
