use serde::{Deserialize, Serialize};

/// Font weight override for a styled range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Font slant override for a styled range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
}

/// The set of properties a span may override.
///
/// Used to address a single property when querying shared formatting for
/// the toolbar or removing one kind of formatting from a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleProperty {
    FontSize,
    FontFamily,
    FontWeight,
    FontStyle,
    Color,
}

impl StyleProperty {
    /// All properties, in the order they appear on [`SpanStyle`].
    pub const ALL: [Self; 5] = [
        Self::FontSize,
        Self::FontFamily,
        Self::FontWeight,
        Self::FontStyle,
        Self::Color,
    ];
}

/// A single property together with its value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    FontSize(f32),
    FontFamily(String),
    FontWeight(FontWeight),
    FontStyle(FontStyle),
    Color(String),
}

/// A partial style: each field overrides the inherited value when `Some`.
///
/// A `SpanStyle` with no fields set is meaningless as a stored override;
/// operations that can empty a style drop the owning span entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpanStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl SpanStyle {
    /// Returns true if no property is set.
    pub fn is_empty(&self) -> bool {
        self.font_size.is_none()
            && self.font_family.is_none()
            && self.font_weight.is_none()
            && self.font_style.is_none()
            && self.color.is_none()
    }

    /// Field-by-field override: properties set on `over` win, everything
    /// else is taken from `self`.
    pub fn overridden_by(&self, over: &Self) -> Self {
        Self {
            font_size: over.font_size.or(self.font_size),
            font_family: over
                .font_family
                .clone()
                .or_else(|| self.font_family.clone()),
            font_weight: over.font_weight.or(self.font_weight),
            font_style: over.font_style.or(self.font_style),
            color: over.color.clone().or_else(|| self.color.clone()),
        }
    }

    /// The value of a single property, if set.
    pub fn value_of(&self, property: StyleProperty) -> Option<StyleValue> {
        match property {
            StyleProperty::FontSize => self.font_size.map(StyleValue::FontSize),
            StyleProperty::FontFamily => self.font_family.clone().map(StyleValue::FontFamily),
            StyleProperty::FontWeight => self.font_weight.map(StyleValue::FontWeight),
            StyleProperty::FontStyle => self.font_style.map(StyleValue::FontStyle),
            StyleProperty::Color => self.color.clone().map(StyleValue::Color),
        }
    }

    /// Set a single property from a [`StyleValue`].
    pub fn set_value(&mut self, value: StyleValue) {
        match value {
            StyleValue::FontSize(v) => self.font_size = Some(v),
            StyleValue::FontFamily(v) => self.font_family = Some(v),
            StyleValue::FontWeight(v) => self.font_weight = Some(v),
            StyleValue::FontStyle(v) => self.font_style = Some(v),
            StyleValue::Color(v) => self.color = Some(v),
        }
    }

    /// Unset a single property.
    pub fn clear(&mut self, property: StyleProperty) {
        match property {
            StyleProperty::FontSize => self.font_size = None,
            StyleProperty::FontFamily => self.font_family = None,
            StyleProperty::FontWeight => self.font_weight = None,
            StyleProperty::FontStyle => self.font_style = None,
            StyleProperty::Color => self.color = None,
        }
    }
}
