//! Style configuration for a single render call.
//!
//! [`StyleConfig`] is the attribute bag the renderer reads. Every field has a
//! fixed default, and theme merging treats "equal to the default" as "not set
//! by the caller" (see [`IconTheme::apply`](crate::IconTheme::apply)).
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "width": 24,
//!   "height": 24,
//!   "size": 24,
//!   "stroke": "currentColor",
//!   "strokeWidth": 2,
//!   "strokeLinecap": "round",
//!   "strokeLinejoin": "round",
//!   "fill": "none",
//!   "color": "currentColor",
//!   "className": "",
//!   "style": ""
//! }
//! ```
//!
//! Missing keys take their defaults, so `{"stroke": "#ff0000"}` is a complete
//! document.

use serde::{Deserialize, Serialize};

/// Default width, height, and size in pixels.
pub const DEFAULT_SIZE: i32 = 24;
/// Default stroke paint.
pub const DEFAULT_STROKE: &str = "currentColor";
/// Default stroke width.
pub const DEFAULT_STROKE_WIDTH: i32 = 2;
/// Default `stroke-linecap` and `stroke-linejoin` value.
pub const DEFAULT_LINE_STYLE: &str = "round";
/// Default fill paint.
pub const DEFAULT_FILL: &str = "none";
/// Default color alias value.
pub const DEFAULT_COLOR: &str = "currentColor";

/// Attributes applied to the `<svg>` wrapper of a rendered icon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    pub width: i32,
    pub height: i32,

    /// Last value passed to [`set_size`](Self::set_size). Not rendered.
    pub size: i32,

    pub stroke: String,
    pub stroke_width: i32,
    pub stroke_linecap: String,
    pub stroke_linejoin: String,
    pub fill: String,

    /// Convenience color. Setting it through [`set_color`](Self::set_color)
    /// also overwrites `stroke`. Not rendered on its own.
    pub color: String,

    /// Emitted as `class="..."` only when non-empty.
    pub class_name: String,

    /// Emitted as `style="..."` only when non-empty.
    pub style: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            size: DEFAULT_SIZE,
            stroke: DEFAULT_STROKE.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_linecap: DEFAULT_LINE_STYLE.to_string(),
            stroke_linejoin: DEFAULT_LINE_STYLE.to_string(),
            fill: DEFAULT_FILL.to_string(),
            color: DEFAULT_COLOR.to_string(),
            class_name: String::new(),
            style: String::new(),
        }
    }
}

impl StyleConfig {
    /// Creates a config with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets width and height to the same value, recording it in `size`.
    pub fn set_size(&mut self, size: i32) {
        self.size = size;
        self.width = size;
        self.height = size;
    }

    /// Sets `color` and `stroke` together. `fill` is left alone.
    pub fn set_color(&mut self, color: impl Into<String>) {
        let color = color.into();
        self.stroke = color.clone();
        self.color = color;
    }

    /// Builder-style [`set_size`](Self::set_size).
    pub fn with_size(mut self, size: i32) -> Self {
        self.set_size(size);
        self
    }

    /// Builder-style [`set_color`](Self::set_color).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.set_color(color);
        self
    }

    /// Sets the stroke paint.
    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self
    }

    /// Sets the stroke width.
    pub fn with_stroke_width(mut self, width: i32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the CSS class.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Sets the inline style.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Serializes the config to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the config to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a config from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
