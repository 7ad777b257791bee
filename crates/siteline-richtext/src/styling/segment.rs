use serde::Serialize;

use crate::styling::{SpanStyle, TextSpan};

/// A contiguous run of text sharing one resolved style.
///
/// Derived by [`segments`], never stored: the span list stays the model and
/// segments are recomputed whenever text or spans change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSegment {
    pub text: String,
    pub style: SpanStyle,
    /// Character index of the segment start in the source text.
    pub start: usize,
}

/// Split `text` plus its style spans into ordered, disjoint segments that
/// cover the whole string exactly once.
///
/// Spans are sorted by offset and swept left to right with a cursor. Each
/// span is clipped to `[max(offset, cursor), min(end, len))`; gaps between
/// spans render with `global` alone, span regions render with `global`
/// overridden field-by-field by the span's style. Zero-length spans and
/// spans starting at or past the end of the text are ignored.
///
/// Guarantee: concatenating the returned segment texts reproduces `text`
/// exactly. Empty text yields no segments.
pub fn segments(text: &str, spans: &[TextSpan], global: &SpanStyle) -> Vec<TextSegment> {
    let len = text.chars().count();

    let mut sorted: Vec<&TextSpan> = spans
        .iter()
        .filter(|s| s.length > 0 && s.offset < len)
        .collect();
    sorted.sort_by_key(|s| s.offset);

    let mut out = Vec::new();
    let mut cursor = 0;
    for span in sorted {
        let start = span.offset.max(cursor);
        let end = span.end().min(len);
        if end <= start {
            continue;
        }
        if start > cursor {
            out.push(TextSegment {
                text: slice_chars(text, cursor, start),
                style: global.clone(),
                start: cursor,
            });
        }
        out.push(TextSegment {
            text: slice_chars(text, start, end),
            style: global.overridden_by(&span.style),
            start,
        });
        cursor = end;
    }
    if cursor < len {
        out.push(TextSegment {
            text: slice_chars(text, cursor, len),
            style: global.clone(),
            start: cursor,
        });
    }
    out
}

/// Slice by character indices. Hero text is short, so a linear scan is fine.
fn slice_chars(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end - start).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn color_span(offset: usize, length: usize, color: &str) -> TextSpan {
        TextSpan::new(
            offset,
            length,
            SpanStyle {
                color: Some(color.to_string()),
                ..Default::default()
            },
        )
    }

    fn concat(segs: &[TextSegment]) -> String {
        segs.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn no_spans_yields_single_global_segment() {
        let global = SpanStyle {
            font_size: Some(32.0),
            ..Default::default()
        };
        let segs = segments("Book a visit", &[], &global);
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].text, "Book a visit");
        assert_eq!(segs[0].start, 0);
        assert_eq!(segs[0].style, global);
    }

    #[test]
    fn empty_text_yields_no_segments() {
        assert!(segments("", &[], &SpanStyle::default()).is_empty());
        let spans = [color_span(0, 3, "red")];
        assert!(segments("", &spans, &SpanStyle::default()).is_empty());
    }

    #[test]
    fn span_in_the_middle_produces_three_segments() {
        let spans = [color_span(5, 2, "red")];
        let segs = segments("Hello there", &spans, &SpanStyle::default());

        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0].text, "Hello");
        assert_eq!(segs[1].text, " t");
        assert_eq!(segs[1].style.color.as_deref(), Some("red"));
        assert_eq!(segs[2].text, "here");
        assert_eq!(concat(&segs), "Hello there");
    }

    #[test]
    fn span_style_overrides_global_per_field() {
        let global = SpanStyle {
            font_size: Some(32.0),
            color: Some("black".to_string()),
            ..Default::default()
        };
        let spans = [color_span(0, 5, "red")];
        let segs = segments("Hello", &spans, &global);

        assert_eq!(segs.len(), 1);
        // Color overridden, size inherited from the global style.
        assert_eq!(segs[0].style.color.as_deref(), Some("red"));
        assert_eq!(segs[0].style.font_size, Some(32.0));
    }

    #[test]
    fn out_of_range_and_zero_length_spans_are_ignored() {
        let spans = [color_span(20, 3, "red"), color_span(2, 0, "blue")];
        let segs = segments("short", &spans, &SpanStyle::default());
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].text, "short");
    }

    #[test]
    fn span_past_text_end_is_clipped() {
        let spans = [color_span(3, 50, "red")];
        let segs = segments("abcdef", &spans, &SpanStyle::default());
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[1].text, "def");
        assert_eq!(segs[1].start, 3);
        assert_eq!(concat(&segs), "abcdef");
    }

    #[test]
    fn overlapping_spans_clip_to_cursor() {
        // The earlier span keeps the overlap; the later one renders only its
        // remainder past the cursor.
        let spans = [color_span(0, 4, "red"), color_span(2, 4, "blue")];
        let segs = segments("abcdef", &spans, &SpanStyle::default());

        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].text, "abcd");
        assert_eq!(segs[0].style.color.as_deref(), Some("red"));
        assert_eq!(segs[1].text, "ef");
        assert_eq!(segs[1].style.color.as_deref(), Some("blue"));
        assert_eq!(concat(&segs), "abcdef");
    }

    #[test]
    fn multibyte_text_is_addressed_by_characters() {
        let spans = [color_span(2, 3, "red")];
        let segs = segments("héllö wörld", &spans, &SpanStyle::default());
        assert_eq!(segs[0].text, "hé");
        assert_eq!(segs[1].text, "llö");
        assert_eq!(concat(&segs), "héllö wörld");
    }

    #[test]
    fn unsorted_input_spans_render_in_offset_order() {
        let spans = [color_span(6, 2, "blue"), color_span(1, 2, "red")];
        let segs = segments("abcdefgh", &spans, &SpanStyle::default());
        let starts: Vec<usize> = segs.iter().map(|s| s.start).collect();
        assert_eq!(starts, vec![0, 1, 3, 6]);
        assert_eq!(concat(&segs), "abcdefgh");
    }
}
