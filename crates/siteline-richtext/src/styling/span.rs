use serde::{Deserialize, Serialize};

use crate::styling::SpanStyle;

/// A style override applied to a contiguous character range of a string.
///
/// Offsets and lengths are in characters, matching how the editor addresses
/// selections in the hero title/subtitle fields. Spans are stored with the
/// landing-page document; the style fields are flattened so the persisted
/// shape is `{offset, length, color, ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    /// Zero-based start index (inclusive).
    pub offset: usize,
    /// Number of characters covered. A span only makes sense with
    /// `length > 0`; zero-length spans are filtered wherever they arise.
    pub length: usize,
    /// The properties this span overrides.
    #[serde(flatten)]
    pub style: SpanStyle,
}

impl TextSpan {
    pub fn new(offset: usize, length: usize, style: SpanStyle) -> Self {
        Self {
            offset,
            length,
            style,
        }
    }

    /// Exclusive end index.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    /// Returns true if this span intersects the half-open range `[start, end)`.
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.offset < end && self.end() > start
    }
}
