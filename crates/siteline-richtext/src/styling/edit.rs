use crate::styling::TextSpan;

/// A text replacement: `old_len` characters at `at` replaced by `new_len`
/// characters. Models typing, pasting, and deleting inside an editable
/// title/subtitle field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEdit {
    pub at: usize,
    pub old_len: usize,
    pub new_len: usize,
}

impl TextEdit {
    pub fn insertion(at: usize, len: usize) -> Self {
        Self {
            at,
            old_len: 0,
            new_len: len,
        }
    }

    pub fn deletion(at: usize, len: usize) -> Self {
        Self {
            at,
            old_len: len,
            new_len: 0,
        }
    }

    /// Exclusive end of the replaced region, in pre-edit coordinates.
    pub fn end(&self) -> usize {
        self.at + self.old_len
    }

    /// Net length change.
    pub fn delta(&self) -> isize {
        self.new_len as isize - self.old_len as isize
    }
}

/// Reposition spans after a text replacement.
///
/// Per span:
/// - entirely before the edit: unchanged
/// - entirely after: shifted by the edit's delta
/// - starting before the edit but overlapping it: truncated to the portion
///   before the edit, extended to absorb the replacement text as if it
///   inherited the span's style
/// - starting inside the replaced region: relocated to just after the
///   inserted text, keeping whatever tail survives
///
/// Spans whose resulting length is zero are dropped.
///
/// The absorb-on-truncate rule is a continuity heuristic, not a precise
/// diff remap: text typed inside a styled run stays styled. Behaviour
/// change here is a product decision, not a defect.
pub fn adjust_spans(spans: &[TextSpan], edit: &TextEdit) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let span_end = span.end();
        let adjusted = if span_end <= edit.at {
            span.clone()
        } else if span.offset >= edit.end() {
            let offset = (span.offset as isize + edit.delta()) as usize;
            TextSpan::new(offset, span.length, span.style.clone())
        } else if span.offset < edit.at {
            let length = edit.at - span.offset + edit.new_len;
            TextSpan::new(span.offset, length, span.style.clone())
        } else {
            let length = span_end.saturating_sub(edit.end());
            TextSpan::new(edit.at + edit.new_len, length, span.style.clone())
        };
        if adjusted.length > 0 {
            out.push(adjusted);
        }
    }
    out
}
