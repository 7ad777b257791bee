use crate::styling::{SpanStyle, TextSpan};

/// Apply `new_span`'s style over its range, combining with whatever was
/// already there.
///
/// Properties not set by `new_span` survive from the spans it overlaps;
/// properties it does set win. Overlapped spans are split into left/right
/// remainders that keep their full style, and the covered range is rebuilt:
/// sub-regions that had a prior span get that span's style overridden by the
/// new one, untouched sub-regions get the new style alone.
///
/// A `new_span` with no style fields (or zero length) is a no-op. Where
/// prior spans overlapped *each other* inside the range, the earlier span
/// wins, matching how rendering resolves overlaps.
pub fn merge_span(spans: &[TextSpan], new_span: &TextSpan) -> Vec<TextSpan> {
    if new_span.style.is_empty() || new_span.length == 0 {
        return spans.to_vec();
    }

    let new_start = new_span.offset;
    let new_end = new_span.end();

    let mut result = Vec::with_capacity(spans.len() + 2);
    // Sub-ranges of the new range that were covered by an existing span,
    // remembered with that span's style for combination below.
    let mut covered: Vec<(usize, usize, &SpanStyle)> = Vec::new();

    for span in spans {
        let end = span.end();
        if end <= new_start || span.offset >= new_end {
            result.push(span.clone());
            continue;
        }
        if span.offset < new_start {
            result.push(TextSpan::new(
                span.offset,
                new_start - span.offset,
                span.style.clone(),
            ));
        }
        if end > new_end {
            result.push(TextSpan::new(new_end, end - new_end, span.style.clone()));
        }
        let overlap_start = span.offset.max(new_start);
        let overlap_end = end.min(new_end);
        if overlap_end > overlap_start {
            covered.push((overlap_start, overlap_end, &span.style));
        }
    }

    covered.sort_by_key(|&(start, _, _)| start);

    // Sweep the new range: combined spans where something was covered, the
    // bare new style in the gaps.
    let mut cursor = new_start;
    for (start, end, old_style) in covered {
        let start = start.max(cursor);
        if end <= start {
            continue;
        }
        if start > cursor {
            result.push(TextSpan::new(cursor, start - cursor, new_span.style.clone()));
        }
        result.push(TextSpan::new(
            start,
            end - start,
            old_style.overridden_by(&new_span.style),
        ));
        cursor = end;
    }
    if cursor < new_end {
        result.push(TextSpan::new(
            cursor,
            new_end - cursor,
            new_span.style.clone(),
        ));
    }

    result.sort_by_key(|s| s.offset);
    result
}
