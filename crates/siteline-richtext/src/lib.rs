pub mod styling;

// Re-export key types for easier usage
pub use styling::{
    FontStyle, FontWeight, SpanStyle, StyleProperty, StyleValue, TextEdit, TextSegment, TextSpan,
    adjust_spans, merge_span, remove_span_style, segments, style_at_range,
};
