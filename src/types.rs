use crate::image::PixelGrid;
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::Index;

/// One decoded item: a fixed-size pixel grid and its label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LabeledImage {
    pub(crate) grid: PixelGrid,
    pub(crate) label: u8,
}

impl LabeledImage {
    pub fn new(grid: PixelGrid, label: u8) -> Self {
        Self { grid, label }
    }

    #[inline]
    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    #[inline]
    pub fn label(&self) -> u8 {
        self.label
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.grid.row_count()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.grid.col_count()
    }
}

/// Ordered collection decoded from one image/label file pair.
///
/// All images share the `rows × cols` read from the image-file header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageSet {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) images: Vec<LabeledImage>,
    pub(crate) labeled: bool,
}

impl ImageSet {
    /// Set with no items, as produced when the image file is unavailable.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Whether labels were read from the label file. `false` means every
    /// label is the default zero.
    #[inline]
    pub fn is_labeled(&self) -> bool {
        self.labeled
    }

    pub fn get(&self, index: usize) -> Option<&LabeledImage> {
        self.images.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LabeledImage> {
        self.images.iter()
    }

    pub fn as_slice(&self) -> &[LabeledImage] {
        &self.images
    }

    /// Number of items per label value, in ascending label order.
    pub fn label_counts(&self) -> BTreeMap<u8, usize> {
        let mut counts = BTreeMap::new();
        for img in &self.images {
            *counts.entry(img.label).or_insert(0) += 1;
        }
        counts
    }
}

impl Index<usize> for ImageSet {
    type Output = LabeledImage;

    fn index(&self, index: usize) -> &LabeledImage {
        &self.images[index]
    }
}

impl<'a> IntoIterator for &'a ImageSet {
    type Item = &'a LabeledImage;
    type IntoIter = std::slice::Iter<'a, LabeledImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}
