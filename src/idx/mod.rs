//! IDX image/label file decoding.
//!
//! An image file holds a 16-byte big-endian header (magic, items, rows, cols)
//! followed by `items * rows * cols` pixel bytes, item-major then row-major.
//! A label file holds an 8-byte header (magic, items) followed by one byte per
//! item. [`DatasetDecoder`] reads one such pair into an [`ImageSet`](crate::types::ImageSet).
pub mod decoder;
pub mod error;
pub mod header;
pub mod options;

#[cfg(test)]
mod tests;

pub use decoder::DatasetDecoder;
pub use error::{DecodeError, Section};
pub use header::{ImageHeader, LabelHeader, IMAGE_MAGIC, LABEL_MAGIC};
pub use options::DecodeMode;
