use std::fmt;
use std::io;
use std::path::PathBuf;

/// Part of an IDX file being read when input ran out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    ImageHeader,
    Pixels,
    LabelHeader,
    Labels,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::ImageHeader => "image header",
            Section::Pixels => "pixel data",
            Section::LabelHeader => "label header",
            Section::Labels => "label data",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub enum DecodeError {
    Open {
        path: PathBuf,
        source: io::Error,
    },
    Read {
        path: PathBuf,
        source: io::Error,
    },
    Truncated {
        path: PathBuf,
        section: Section,
        expected: usize,
        found: usize,
    },
    UnexpectedMagic {
        path: PathBuf,
        expected: u32,
        found: u32,
    },
    CountMismatch {
        images: usize,
        labels: usize,
    },
    DimensionsOverflow {
        items: u32,
        rows: u32,
        cols: u32,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Open { path, source } => {
                write!(f, "cannot open {}: {source}", path.display())
            }
            DecodeError::Read { path, source } => {
                write!(f, "read error in {}: {source}", path.display())
            }
            DecodeError::Truncated {
                path,
                section,
                expected,
                found,
            } => write!(
                f,
                "{} truncated in {section} ({found} of {expected} bytes)",
                path.display()
            ),
            DecodeError::UnexpectedMagic {
                path,
                expected,
                found,
            } => write!(
                f,
                "{} has magic {found:#010x}, expected {expected:#010x}",
                path.display()
            ),
            DecodeError::CountMismatch { images, labels } => {
                write!(f, "item count mismatch (images={images}, labels={labels})")
            }
            DecodeError::DimensionsOverflow { items, rows, cols } => write!(
                f,
                "header dimensions overflow ({items} items of {rows}x{cols})"
            ),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Open { source, .. } | DecodeError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}
