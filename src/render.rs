//! ASCII-art printout of decoded digits.
//!
//! Intensities fall into four buckets: `< 50` blank, `< 120` `-`, `< 200` `+`,
//! anything brighter `#`.
use crate::image::ImageView;
use crate::types::{ImageSet, LabeledImage};
use std::fmt;
use std::fmt::Write as _;

pub const SEPARATOR: &str = "------------------------------";

#[inline]
pub fn glyph(intensity: u8) -> char {
    match intensity {
        0..=49 => ' ',
        50..=119 => '-',
        120..=199 => '+',
        _ => '#',
    }
}

/// One line per row, one glyph per pixel.
pub fn render_view<V: ImageView<Pixel = u8>>(view: &V) -> String {
    let mut out = String::with_capacity((view.width() + 1) * view.height());
    for row in view.rows() {
        out.extend(row.iter().map(|&px| glyph(px)));
        out.push('\n');
    }
    out
}

/// Framed block for one item: separator, grid, label line, separator.
pub fn render_item(image: &LabeledImage) -> String {
    let mut out = String::new();
    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str(&render_view(image.grid()));
    let _ = writeln!(out, "\t\tThis is a: {}", image.label());
    out.push_str(SEPARATOR);
    out.push('\n');
    out
}

/// Requested printout range does not lie within the collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfRange {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "printout range {}..{} outside collection of {} items",
            self.start, self.end, self.len
        )
    }
}

impl std::error::Error for OutOfRange {}

/// Render items `start..end` of `set`.
pub fn render_range(set: &ImageSet, start: usize, end: usize) -> Result<String, OutOfRange> {
    let items = set.as_slice().get(start..end).ok_or(OutOfRange {
        start,
        end,
        len: set.len(),
    })?;
    Ok(items.iter().map(render_item).collect())
}
