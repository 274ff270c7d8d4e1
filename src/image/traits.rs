/// Read-only access to a row-major single-channel raster.
///
/// Implemented by owned grids and borrowed strided views alike, so rendering
/// and export code does not care where the pixels live.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Elements between the starts of consecutive rows (`>= width`).
    fn stride(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    /// Pixel at column `x`, row `y`, or `None` outside the raster.
    fn pixel(&self, x: usize, y: usize) -> Option<Self::Pixel> {
        (y < self.height() && x < self.width()).then(|| self.row(y)[x])
    }

    fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows {
            image: self,
            next: 0,
        }
    }

    /// The whole raster as one slice when rows are tightly packed.
    fn as_slice(&self) -> Option<&[Self::Pixel]> {
        None
    }
}

/// Top-to-bottom row iterator over an [`ImageView`].
pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    next: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        let image = self.image;
        let y = self.next;
        (y < image.height()).then(|| {
            self.next += 1;
            image.row(y)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.image.height().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl<'a, I: ImageView> ExactSizeIterator for Rows<'a, I> {}
