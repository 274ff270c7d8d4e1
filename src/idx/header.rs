//! Fixed big-endian headers of IDX image and label files.
//!
//! Image files open with four `u32` fields (magic, items, rows, cols), label
//! files with two (magic, items). Every field is decoded from its own 4-byte
//! slice with `u32::from_be_bytes`.
use serde::Serialize;

/// Magic of an unsigned-byte, 3-dimensional IDX file (images).
pub const IMAGE_MAGIC: u32 = 0x0000_0803;
/// Magic of an unsigned-byte, 1-dimensional IDX file (labels).
pub const LABEL_MAGIC: u32 = 0x0000_0801;

pub const IMAGE_HEADER_LEN: usize = 16;
pub const LABEL_HEADER_LEN: usize = 8;

/// Decode the big-endian `u32` stored at `offset`.
#[inline]
pub fn be_u32_at(bytes: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&bytes[offset..offset + 4]);
    u32::from_be_bytes(word)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageHeader {
    pub magic: u32,
    pub items: u32,
    pub rows: u32,
    pub cols: u32,
}

impl ImageHeader {
    pub fn parse(bytes: &[u8; IMAGE_HEADER_LEN]) -> Self {
        Self {
            magic: be_u32_at(bytes, 0),
            items: be_u32_at(bytes, 4),
            rows: be_u32_at(bytes, 8),
            cols: be_u32_at(bytes, 12),
        }
    }

    pub fn to_bytes(&self) -> [u8; IMAGE_HEADER_LEN] {
        let mut out = [0u8; IMAGE_HEADER_LEN];
        out[0..4].copy_from_slice(&self.magic.to_be_bytes());
        out[4..8].copy_from_slice(&self.items.to_be_bytes());
        out[8..12].copy_from_slice(&self.rows.to_be_bytes());
        out[12..16].copy_from_slice(&self.cols.to_be_bytes());
        out
    }

    /// Pixel bytes per item and for the whole file, or `None` on overflow.
    pub fn pixel_layout(&self) -> Option<(usize, usize)> {
        let per_item = usize::try_from(self.rows)
            .ok()?
            .checked_mul(usize::try_from(self.cols).ok()?)?;
        let total = usize::try_from(self.items).ok()?.checked_mul(per_item)?;
        Some((per_item, total))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelHeader {
    pub magic: u32,
    pub items: u32,
}

impl LabelHeader {
    pub fn parse(bytes: &[u8; LABEL_HEADER_LEN]) -> Self {
        Self {
            magic: be_u32_at(bytes, 0),
            items: be_u32_at(bytes, 4),
        }
    }

    pub fn to_bytes(&self) -> [u8; LABEL_HEADER_LEN] {
        let mut out = [0u8; LABEL_HEADER_LEN];
        out[0..4].copy_from_slice(&self.magic.to_be_bytes());
        out[4..8].copy_from_slice(&self.items.to_be_bytes());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_is_read_most_significant_byte_first() {
        assert_eq!(be_u32_at(&[0x00, 0x00, 0x08, 0x03], 0), 2051);
        assert_eq!(be_u32_at(&[0xff, 0x00, 0x00, 0x08, 0x01], 1), 2049);
    }

    #[test]
    fn image_header_fields_in_order() {
        let bytes = [
            0, 0, 8, 3, //
            0, 0, 0xea, 0x60, //
            0, 0, 0, 28, //
            0, 0, 0, 28,
        ];
        let header = ImageHeader::parse(&bytes);
        assert_eq!(
            header,
            ImageHeader {
                magic: IMAGE_MAGIC,
                items: 60_000,
                rows: 28,
                cols: 28,
            }
        );
        assert_eq!(header.to_bytes(), bytes);
        assert_eq!(header.pixel_layout(), Some((784, 60_000 * 784)));
    }

    #[test]
    fn label_header_fields_in_order() {
        let header = LabelHeader::parse(&[0, 0, 8, 1, 0, 0, 0x27, 0x10]);
        assert_eq!(header.magic, LABEL_MAGIC);
        assert_eq!(header.items, 10_000);
    }

    #[test]
    fn layout_overflow_is_detected() {
        let header = ImageHeader {
            magic: IMAGE_MAGIC,
            items: u32::MAX,
            rows: u32::MAX,
            cols: u32::MAX,
        };
        assert_eq!(header.pixel_layout(), None);
    }
}
