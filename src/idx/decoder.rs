use super::error::{DecodeError, Section};
use super::header::{
    ImageHeader, LabelHeader, IMAGE_HEADER_LEN, IMAGE_MAGIC, LABEL_HEADER_LEN, LABEL_MAGIC,
};
use super::options::DecodeMode;
use crate::diagnostics::SplitReport;
use crate::image::PixelGrid;
use crate::types::{ImageSet, LabeledImage};
use log::{debug, warn};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use std::time::Instant;

/// Upper bound on the up-front `Vec` reservation; the header item count is
/// untrusted until the pixel data has actually been read.
const PREALLOC_ITEMS: usize = 1 << 16;

const IMAGES_ORIGIN: &str = "<images>";
const LABELS_ORIGIN: &str = "<labels>";

/// Decodes one IDX image/label file pair into an [`ImageSet`].
///
/// Phases run strictly in order: image header, pixel block, label header,
/// label block. The image file is closed before the label file is opened.
#[derive(Clone, Copy, Debug, Default)]
pub struct DatasetDecoder {
    mode: DecodeMode,
}

impl DatasetDecoder {
    pub fn new(mode: DecodeMode) -> Self {
        Self { mode }
    }

    pub fn strict() -> Self {
        Self::new(DecodeMode::Strict)
    }

    pub fn lenient() -> Self {
        Self::new(DecodeMode::Lenient)
    }

    pub fn mode(&self) -> DecodeMode {
        self.mode
    }

    pub fn decode(&self, images: &Path, labels: &Path) -> Result<ImageSet, DecodeError> {
        self.decode_with_report(images, labels).map(|(set, _)| set)
    }

    pub fn decode_with_report(
        &self,
        images: &Path,
        labels: &Path,
    ) -> Result<(ImageSet, SplitReport), DecodeError> {
        let t0 = Instant::now();
        let mut report = SplitReport::new(images, labels, self.mode);

        let mut set = match File::open(images) {
            Ok(file) => self.read_images(BufReader::new(file), images, &mut report)?,
            Err(source) => {
                self.open_failed(images, source, &mut report)?;
                ImageSet::empty()
            }
        };

        match File::open(labels) {
            Ok(file) => self.read_labels(BufReader::new(file), labels, &mut set, &mut report)?,
            Err(source) => self.open_failed(labels, source, &mut report)?,
        }

        report.finish(&set, t0.elapsed().as_secs_f64() * 1000.0);
        debug!(
            "DatasetDecoder::decode {} -> items={} {}x{} labeled={} ms={:.3}",
            images.display(),
            report.items,
            report.rows,
            report.cols,
            report.labels_attached,
            report.elapsed_ms
        );
        Ok((set, report))
    }

    /// Decode from already-open sources, e.g. in-memory buffers.
    pub fn decode_readers<I: Read, L: Read>(
        &self,
        images: I,
        labels: L,
    ) -> Result<ImageSet, DecodeError> {
        let (images_origin, labels_origin) = (Path::new(IMAGES_ORIGIN), Path::new(LABELS_ORIGIN));
        let mut report = SplitReport::new(images_origin, labels_origin, self.mode);
        let mut set = self.read_images(images, images_origin, &mut report)?;
        self.read_labels(labels, labels_origin, &mut set, &mut report)?;
        Ok(set)
    }

    fn read_images<R: Read>(
        &self,
        mut reader: R,
        path: &Path,
        report: &mut SplitReport,
    ) -> Result<ImageSet, DecodeError> {
        let mut raw = [0u8; IMAGE_HEADER_LEN];
        let got = self.fill(&mut reader, &mut raw, path, report)?;
        self.ensure_read(Section::ImageHeader, path, IMAGE_HEADER_LEN, got, report)?;
        let header = ImageHeader::parse(&raw);
        debug!(
            "image header {}: magic={} items={} rows={} cols={}",
            path.display(),
            header.magic,
            header.items,
            header.rows,
            header.cols
        );
        report.image_header = Some(header);
        self.check_magic(path, IMAGE_MAGIC, header.magic, report)?;

        let Some((per_item, total)) = header.pixel_layout() else {
            let err = DecodeError::DimensionsOverflow {
                items: header.items,
                rows: header.rows,
                cols: header.cols,
            };
            self.degrade(err, report)?;
            return Ok(ImageSet::empty());
        };

        let items = header.items as usize;
        let (rows, cols) = (header.rows as usize, header.cols as usize);
        let mut images = Vec::with_capacity(items.min(PREALLOC_ITEMS));
        let mut consumed = 0usize;
        let mut exhausted = false;
        for _ in 0..items {
            let mut grid = PixelGrid::zeroed(rows, cols);
            if !exhausted {
                let got = self.fill(&mut reader, grid.pixels_mut(), path, report)?;
                consumed += got;
                if got < per_item {
                    self.ensure_read(Section::Pixels, path, total, consumed, report)?;
                    exhausted = true;
                }
            }
            images.push(LabeledImage::new(grid, 0));
        }

        Ok(ImageSet {
            rows,
            cols,
            images,
            labeled: false,
        })
    }

    fn read_labels<R: Read>(
        &self,
        mut reader: R,
        path: &Path,
        set: &mut ImageSet,
        report: &mut SplitReport,
    ) -> Result<(), DecodeError> {
        let mut raw = [0u8; LABEL_HEADER_LEN];
        let got = self.fill(&mut reader, &mut raw, path, report)?;
        self.ensure_read(Section::LabelHeader, path, LABEL_HEADER_LEN, got, report)?;
        let header = LabelHeader::parse(&raw);
        debug!(
            "label header {}: magic={} items={}",
            path.display(),
            header.magic,
            header.items
        );
        report.label_header = Some(header);
        self.check_magic(path, LABEL_MAGIC, header.magic, report)?;

        // No label byte is read unless both files declare the same count.
        if usize::try_from(header.items).ok() != Some(set.len()) {
            let err = DecodeError::CountMismatch {
                images: set.len(),
                labels: header.items as usize,
            };
            return self.degrade(err, report);
        }

        let mut labels = vec![0u8; set.len()];
        let got = self.fill(&mut reader, &mut labels, path, report)?;
        self.ensure_read(Section::Labels, path, labels.len(), got, report)?;
        for (img, label) in set.images.iter_mut().zip(labels) {
            img.label = label;
        }
        set.labeled = true;
        Ok(())
    }

    /// Read until `buf` is full or the source ends. Bytes not read keep
    /// their previous (zero) value.
    fn fill<R: Read>(
        &self,
        reader: &mut R,
        buf: &mut [u8],
        path: &Path,
        report: &mut SplitReport,
    ) -> Result<usize, DecodeError> {
        let mut filled = 0;
        while filled < buf.len() {
            match reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(source) => {
                    let err = DecodeError::Read {
                        path: path.to_path_buf(),
                        source,
                    };
                    self.degrade(err, report)?;
                    break;
                }
            }
        }
        Ok(filled)
    }

    fn ensure_read(
        &self,
        section: Section,
        path: &Path,
        expected: usize,
        found: usize,
        report: &mut SplitReport,
    ) -> Result<(), DecodeError> {
        if found >= expected {
            return Ok(());
        }
        let err = DecodeError::Truncated {
            path: path.to_path_buf(),
            section,
            expected,
            found,
        };
        self.degrade(err, report)
    }

    fn check_magic(
        &self,
        path: &Path,
        expected: u32,
        found: u32,
        report: &mut SplitReport,
    ) -> Result<(), DecodeError> {
        if found == expected {
            return Ok(());
        }
        let err = DecodeError::UnexpectedMagic {
            path: path.to_path_buf(),
            expected,
            found,
        };
        self.degrade(err, report)
    }

    fn open_failed(
        &self,
        path: &Path,
        source: io::Error,
        report: &mut SplitReport,
    ) -> Result<(), DecodeError> {
        let err = DecodeError::Open {
            path: path.to_path_buf(),
            source,
        };
        self.degrade(err, report)
    }

    /// Strict mode returns `err`; lenient mode logs and records it.
    fn degrade(&self, err: DecodeError, report: &mut SplitReport) -> Result<(), DecodeError> {
        if !self.mode.is_lenient() {
            return Err(err);
        }
        warn!("{err}; continuing");
        report.degradations.push(err.to_string());
        Ok(())
    }
}
