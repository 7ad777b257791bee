/*!
 * # Span Styling Core
 *
 * This module implements the style-override model used by the landing-page
 * editor for hero title/subtitle text.
 *
 * ## Architecture Overview
 *
 * ### 1. Flat span list as the stored model
 * - Formatting is a `Vec<TextSpan>`: character ranges carrying partial
 *   [`SpanStyle`] overrides, persisted alongside the text they annotate
 * - Every operation is a pure function returning a new list; nothing here
 *   performs I/O or holds shared state
 *
 * ### 2. Rendering via a left-to-right sweep
 * - [`segments`] sorts spans by offset and walks a cursor across the text,
 *   clipping spans and filling gaps with the global style
 * - Output segments are ordered, disjoint, and concatenate back to the
 *   exact input text
 *
 * ### 3. Merge with property survival
 * - [`merge_span`] applies a new override over a range without losing
 *   orthogonal properties already present: overlapped spans are split into
 *   remainders and the covered range is rebuilt with combined styles
 * - This is the only operation that resolves overlapping-property conflicts
 *
 * ### 4. Edit tracking
 * - [`adjust_spans`] repositions spans after a text replacement described
 *   by a [`TextEdit`], favouring style continuity: replacement text typed
 *   inside a styled run inherits that run's style
 *
 * ## Module Structure
 *
 * - **`style`**: partial style type, property/value enums, override rules
 * - **`span`**: the stored `TextSpan` range type
 * - **`segment`**: rendering into disjoint `TextSegment`s
 * - **`merge`**: range override with property survival
 * - **`edit`**: span adjustment across text replacements
 * - **`query`**: shared-formatting queries and property removal
 */

pub mod edit;
pub mod merge;
pub mod query;
pub mod segment;
pub mod span;
pub mod style;

// Public API re-exports
pub use edit::{TextEdit, adjust_spans};
pub use merge::merge_span;
pub use query::{remove_span_style, style_at_range};
pub use segment::{TextSegment, segments};
pub use span::TextSpan;
pub use style::{FontStyle, FontWeight, SpanStyle, StyleProperty, StyleValue};
