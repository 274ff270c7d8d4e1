use serde::{Deserialize, Serialize};

/// How the decoder reacts to missing, truncated or inconsistent input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Every failure is returned as a [`DecodeError`](super::DecodeError).
    #[default]
    Strict,
    /// Failures degrade silently: a missing image file yields an empty set,
    /// a missing label file or a count mismatch leaves labels at zero, and
    /// bytes past end-of-file read as zero. Degradations are logged at `warn`
    /// level and collected in the split report.
    Lenient,
}

impl DecodeMode {
    #[inline]
    pub fn is_lenient(self) -> bool {
        matches!(self, DecodeMode::Lenient)
    }
}
