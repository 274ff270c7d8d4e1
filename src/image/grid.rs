//! Owned fixed-size 8-bit pixel grid in row-major layout (stride == cols).
//!
//! One grid holds a single image decoded from an IDX file. Storage is a flat
//! buffer of `rows * cols` intensities; rows are addressed through the stride
//! rather than kept as separate allocations.
use super::{ImageU8, ImageView};
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PixelGrid {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Zero-filled grid of `rows × cols`.
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Wrap an existing row-major buffer. Returns `None` when the buffer
    /// length does not match `rows * cols`.
    pub fn from_raw(rows: usize, cols: usize, data: Vec<u8>) -> Option<Self> {
        let expected = rows.checked_mul(cols)?;
        (data.len() == expected).then_some(Self { rows, cols, data })
    }

    /// Build a grid from nested rows. All rows must have the same length.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Option<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for r in rows {
            let r = r.as_ref();
            if r.len() != cols {
                return None;
            }
            data.extend_from_slice(r);
        }
        Some(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn col_count(&self) -> usize {
        self.cols
    }

    #[inline]
    /// Convert (row, col) to a linear index into the buffer.
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    /// Pixel at (row, col), or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        (row < self.rows && col < self.cols).then(|| self.data[self.idx(row, col)])
    }

    /// Raw row-major pixels.
    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows).map(|y| self.row(y).to_vec()).collect()
    }

    /// Borrow as a read-only `ImageU8` view.
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.cols,
            h: self.rows,
            stride: self.cols,
            data: &self.data,
        }
    }
}

impl ImageView for PixelGrid {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.cols
    }
    #[inline]
    fn height(&self) -> usize {
        self.rows
    }
    #[inline]
    fn stride(&self) -> usize {
        self.cols
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.cols;
        &self.data[start..start + self.cols]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        Some(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_rejects_wrong_length() {
        assert!(PixelGrid::from_raw(2, 3, vec![0; 5]).is_none());
        let grid = PixelGrid::from_raw(2, 3, (0..6).collect()).unwrap();
        assert_eq!(grid.get(1, 0), Some(3));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn rows_follow_stride() {
        let grid = PixelGrid::from_rows(&[[10u8, 60], [130, 255]]).unwrap();
        assert_eq!(grid.row(1), &[130, 255]);
        assert_eq!(grid.rows().count(), 2);
        assert_eq!(grid.to_rows(), vec![vec![10, 60], vec![130, 255]]);
        assert!(PixelGrid::from_rows(&[vec![1u8, 2], vec![3]]).is_none());
    }

    #[test]
    fn zero_width_grid_has_empty_rows() {
        let grid = PixelGrid::zeroed(3, 0);
        assert_eq!(grid.rows().filter(|r| r.is_empty()).count(), 3);
        assert_eq!(grid.to_rows(), vec![Vec::<u8>::new(); 3]);
    }
}
