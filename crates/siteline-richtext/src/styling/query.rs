use crate::styling::{SpanStyle, StyleProperty, TextSpan};

/// The style shared by every span overlapping `[offset, offset + length)`.
///
/// A property is set in the result only when all overlapping spans define
/// it with the same value; disagreement, or no overlapping span at all,
/// leaves it unset. Backs the "current formatting" state of the editor
/// toolbar (is the whole selection bold?).
pub fn style_at_range(spans: &[TextSpan], offset: usize, length: usize) -> SpanStyle {
    let end = offset + length;
    let mut shared = SpanStyle::default();

    let overlapping: Vec<&TextSpan> = spans.iter().filter(|s| s.overlaps(offset, end)).collect();
    let Some((first, rest)) = overlapping.split_first() else {
        return shared;
    };

    for property in StyleProperty::ALL {
        let Some(value) = first.style.value_of(property) else {
            continue;
        };
        if rest
            .iter()
            .all(|s| s.style.value_of(property).as_ref() == Some(&value))
        {
            shared.set_value(value);
        }
    }
    shared
}

/// Remove one style property from every span overlapping the range.
///
/// Spans left with no style fields at all are dropped entirely; spans
/// outside the range are untouched.
pub fn remove_span_style(
    spans: &[TextSpan],
    offset: usize,
    length: usize,
    property: StyleProperty,
) -> Vec<TextSpan> {
    let end = offset + length;
    spans
        .iter()
        .filter_map(|span| {
            if !span.overlaps(offset, end) {
                return Some(span.clone());
            }
            let mut style = span.style.clone();
            style.clear(property);
            if style.is_empty() {
                None
            } else {
                Some(TextSpan::new(span.offset, span.length, style))
            }
        })
        .collect()
}
