use super::*;
use std::io::{self, Cursor, Read};

fn image_bytes(items: u32, rows: u32, cols: u32, pixels: &[u8]) -> Vec<u8> {
    let header = ImageHeader {
        magic: IMAGE_MAGIC,
        items,
        rows,
        cols,
    };
    let mut out = header.to_bytes().to_vec();
    out.extend_from_slice(pixels);
    out
}

fn label_bytes(items: u32, labels: &[u8]) -> Vec<u8> {
    let header = LabelHeader {
        magic: LABEL_MAGIC,
        items,
    };
    let mut out = header.to_bytes().to_vec();
    out.extend_from_slice(labels);
    out
}

/// Reader that fails after yielding `ok` bytes.
struct FailingReader {
    data: Cursor<Vec<u8>>,
    ok: usize,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let pos = self.data.position() as usize;
        if pos >= self.ok {
            return Err(io::Error::new(io::ErrorKind::Other, "device gone"));
        }
        let n = buf.len().min(self.ok - pos);
        self.data.read(&mut buf[..n])
    }
}

#[test]
fn two_by_two_scenario() {
    let images = image_bytes(2, 2, 2, &[10, 60, 130, 255, 0, 0, 0, 0]);
    let labels = label_bytes(2, &[7, 3]);
    let set = DatasetDecoder::strict()
        .decode_readers(&images[..], &labels[..])
        .expect("well-formed pair decodes");

    assert_eq!(set.len(), 2);
    assert!(set.is_labeled());
    assert_eq!(set[0].grid().to_rows(), vec![vec![10, 60], vec![130, 255]]);
    assert_eq!(set[0].label(), 7);
    assert_eq!(set[1].grid().to_rows(), vec![vec![0, 0], vec![0, 0]]);
    assert_eq!(set[1].label(), 3);
}

#[test]
fn every_item_has_header_dimensions() {
    let (n, r, c) = (5u32, 3u32, 4u32);
    let pixels: Vec<u8> = (0..n * r * c).map(|v| (v % 251) as u8).collect();
    let images = image_bytes(n, r, c, &pixels);
    let labels = label_bytes(n, &[0, 1, 2, 3, 4]);
    let set = DatasetDecoder::strict()
        .decode_readers(&images[..], &labels[..])
        .unwrap();

    assert_eq!(set.len(), 5);
    assert_eq!((set.rows(), set.cols()), (3, 4));
    for (i, img) in set.iter().enumerate() {
        assert_eq!((img.rows(), img.cols()), (3, 4));
        let start = i * 12;
        assert_eq!(img.grid().pixels(), &pixels[start..start + 12]);
        assert_eq!(img.label() as usize, i);
    }
}

#[test]
fn count_mismatch_strict_is_error() {
    let images = image_bytes(2, 1, 1, &[1, 2]);
    let labels = label_bytes(3, &[4, 5, 6]);
    let err = DatasetDecoder::strict()
        .decode_readers(&images[..], &labels[..])
        .unwrap_err();
    assert!(
        matches!(err, DecodeError::CountMismatch { images: 2, labels: 3 }),
        "unexpected error: {err}"
    );
}

#[test]
fn count_mismatch_lenient_keeps_zero_labels() {
    let images = image_bytes(2, 1, 1, &[1, 2]);
    let labels = label_bytes(1, &[9, 9]);
    let set = DatasetDecoder::lenient()
        .decode_readers(&images[..], &labels[..])
        .unwrap();
    assert_eq!(set.len(), 2);
    assert!(!set.is_labeled());
    assert!(set.iter().all(|img| img.label() == 0));
    assert_eq!(set[1].grid().pixels(), &[2]);
}

#[test]
fn truncated_pixels_strict_reports_progress() {
    let images = image_bytes(3, 2, 2, &[1, 2, 3, 4, 5]);
    let labels = label_bytes(3, &[1, 2, 3]);
    match DatasetDecoder::strict().decode_readers(&images[..], &labels[..]) {
        Err(DecodeError::Truncated {
            section,
            expected,
            found,
            ..
        }) => {
            assert_eq!(section, Section::Pixels);
            assert_eq!(expected, 12);
            assert_eq!(found, 5);
        }
        other => panic!("expected truncation error, got {other:?}"),
    }
}

#[test]
fn truncated_pixels_lenient_zero_fills() {
    let images = image_bytes(3, 2, 2, &[1, 2, 3, 4, 5]);
    let labels = label_bytes(3, &[1, 2, 3]);
    let set = DatasetDecoder::lenient()
        .decode_readers(&images[..], &labels[..])
        .unwrap();
    assert_eq!(set.len(), 3);
    assert_eq!(set[0].grid().pixels(), &[1, 2, 3, 4]);
    assert_eq!(set[1].grid().pixels(), &[5, 0, 0, 0]);
    assert_eq!(set[2].grid().pixels(), &[0, 0, 0, 0]);
    assert_eq!(
        set.iter().map(|i| i.label()).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn truncated_labels_lenient_zero_fills() {
    let images = image_bytes(3, 1, 1, &[1, 2, 3]);
    let labels = label_bytes(3, &[8]);
    let set = DatasetDecoder::lenient()
        .decode_readers(&images[..], &labels[..])
        .unwrap();
    assert_eq!(
        set.iter().map(|i| i.label()).collect::<Vec<_>>(),
        vec![8, 0, 0]
    );

    let err = DatasetDecoder::strict()
        .decode_readers(&images[..], &labels[..])
        .unwrap_err();
    assert!(matches!(
        err,
        DecodeError::Truncated {
            section: Section::Labels,
            expected: 3,
            found: 1,
            ..
        }
    ));
}

#[test]
fn short_header_is_truncation() {
    let err = DatasetDecoder::strict()
        .decode_readers(&[0u8, 0, 8][..], &label_bytes(0, &[])[..])
        .unwrap_err();
    assert!(matches!(
        err,
        DecodeError::Truncated {
            section: Section::ImageHeader,
            expected: 16,
            found: 3,
            ..
        }
    ));
}

#[test]
fn wrong_magic_rejected_only_in_strict_mode() {
    let mut images = image_bytes(1, 1, 1, &[42]);
    images[3] = 0x01;
    let labels = label_bytes(1, &[5]);

    let err = DatasetDecoder::strict()
        .decode_readers(&images[..], &labels[..])
        .unwrap_err();
    assert!(matches!(
        err,
        DecodeError::UnexpectedMagic {
            expected: 2051,
            found: 2049,
            ..
        }
    ));

    let set = DatasetDecoder::lenient()
        .decode_readers(&images[..], &labels[..])
        .unwrap();
    assert_eq!(set[0].grid().pixels(), &[42]);
    assert_eq!(set[0].label(), 5);
}

#[test]
fn read_error_is_surfaced_or_zero_filled() {
    let images = image_bytes(2, 1, 2, &[1, 2, 3, 4]);
    let labels = label_bytes(2, &[6, 7]);
    let failing = || FailingReader {
        data: Cursor::new(images.clone()),
        ok: 16 + 2, // header plus the first item
    };

    let err = DatasetDecoder::strict()
        .decode_readers(failing(), &labels[..])
        .unwrap_err();
    assert!(matches!(err, DecodeError::Read { .. }));
    assert!(std::error::Error::source(&err).is_some());

    let set = DatasetDecoder::lenient()
        .decode_readers(failing(), &labels[..])
        .unwrap();
    assert_eq!(set[0].grid().pixels(), &[1, 2]);
    assert_eq!(set[1].grid().pixels(), &[0, 0]);
    assert_eq!(set[1].label(), 7);
}

#[test]
fn empty_file_pair_decodes_to_empty_set() {
    let set = DatasetDecoder::strict()
        .decode_readers(&image_bytes(0, 28, 28, &[])[..], &label_bytes(0, &[])[..])
        .unwrap();
    assert!(set.is_empty());
    assert_eq!((set.rows(), set.cols()), (28, 28));
    assert!(set.is_labeled());
}

#[test]
fn error_messages_name_the_condition() {
    let err = DecodeError::CountMismatch {
        images: 60_000,
        labels: 10_000,
    };
    assert_eq!(
        err.to_string(),
        "item count mismatch (images=60000, labels=10000)"
    );
    let err = DecodeError::UnexpectedMagic {
        path: "a.idx".into(),
        expected: IMAGE_MAGIC,
        found: 0,
    };
    assert_eq!(
        err.to_string(),
        "a.idx has magic 0x00000000, expected 0x00000803"
    );
}
