use mnist_idx::idx::{ImageHeader, LabelHeader, IMAGE_MAGIC, LABEL_MAGIC};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Scratch directory removed on drop.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new(tag: &str) -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "mnist-idx-{tag}-{}-{n}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).expect("create scratch dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Deterministic per-item pixel pattern covering the whole 0..=255 range.
pub fn pattern(index: usize, rows: usize, cols: usize) -> Vec<u8> {
    (0..rows * cols)
        .map(|i| ((i * 37 + index * 101) % 256) as u8)
        .collect()
}

pub fn image_file_bytes(rows: u32, cols: u32, items: &[Vec<u8>]) -> Vec<u8> {
    let header = ImageHeader {
        magic: IMAGE_MAGIC,
        items: items.len() as u32,
        rows,
        cols,
    };
    let mut out = header.to_bytes().to_vec();
    for item in items {
        assert_eq!(item.len(), (rows * cols) as usize, "item size mismatch");
        out.extend_from_slice(item);
    }
    out
}

pub fn label_file_bytes(declared_items: u32, labels: &[u8]) -> Vec<u8> {
    let header = LabelHeader {
        magic: LABEL_MAGIC,
        items: declared_items,
    };
    let mut out = header.to_bytes().to_vec();
    out.extend_from_slice(labels);
    out
}

/// Write a consistent image/label pair of `n` items and return what was written.
pub fn write_split(
    images: &Path,
    labels: &Path,
    n: usize,
    rows: usize,
    cols: usize,
) -> (Vec<Vec<u8>>, Vec<u8>) {
    let pixels: Vec<Vec<u8>> = (0..n).map(|i| pattern(i, rows, cols)).collect();
    let label_values: Vec<u8> = (0..n).map(|i| (i % 10) as u8).collect();
    fs::write(images, image_file_bytes(rows as u32, cols as u32, &pixels))
        .expect("write image file");
    fs::write(labels, label_file_bytes(n as u32, &label_values)).expect("write label file");
    (pixels, label_values)
}
