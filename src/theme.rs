//! Reusable style presets.
//!
//! An [`IconTheme`] carries a partial [`StyleConfig`] of defaults and merges
//! them into caller configs with [`IconTheme::apply`].
//!
//! # Merge rule
//!
//! For each of `stroke`, `fill`, `stroke_width`, `width`, and `height`: if the
//! caller's value equals the global default (`"currentColor"`, `"none"`, `2`,
//! `24`, `24`), the theme's value wins. Otherwise the caller's value is kept.
//! All other fields pass through from the caller untouched.
//!
//! Equality with the global default is the only signal of "not set". A caller
//! who explicitly chooses `stroke = "currentColor"` is indistinguishable from
//! one who never touched it, so a theme will override both. Callers who need a
//! default value to survive a theme should apply the theme first and set the
//! field afterwards.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "name": "dark",
//!   "defaults": { "stroke": "#ffffff" }
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_FILL, DEFAULT_SIZE, DEFAULT_STROKE, DEFAULT_STROKE_WIDTH, StyleConfig};

// ============================================================================
// ThemePreset
// ============================================================================

/// Built-in themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum ThemePreset {
    /// Black stroke, no fill.
    #[default]
    Light,
    /// White stroke, no fill.
    Dark,
    /// Blue stroke over a light blue fill.
    Colorful,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 3] = [Self::Light, Self::Dark, Self::Colorful];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Colorful => "colorful",
        }
    }
}

impl fmt::Display for ThemePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown preset name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme preset: {0}")]
pub struct UnknownPreset(pub String);

impl FromStr for ThemePreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

// ============================================================================
// IconTheme
// ============================================================================

/// A named set of style defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct IconTheme {
    name: String,
    defaults: StyleConfig,
}

impl IconTheme {
    /// Creates a theme whose defaults equal [`StyleConfig::default`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            defaults: StyleConfig::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the theme's defaults.
    pub fn defaults(&self) -> &StyleConfig {
        &self.defaults
    }

    pub fn set_default_stroke(&mut self, color: impl Into<String>) -> &mut Self {
        self.defaults.stroke = color.into();
        self
    }

    pub fn set_default_fill(&mut self, color: impl Into<String>) -> &mut Self {
        self.defaults.fill = color.into();
        self
    }

    pub fn set_default_stroke_width(&mut self, width: i32) -> &mut Self {
        self.defaults.stroke_width = width;
        self
    }

    /// Sets default width and height together.
    pub fn set_default_size(&mut self, size: i32) -> &mut Self {
        self.defaults.set_size(size);
        self
    }

    /// Sets default `color` and `stroke` together.
    pub fn set_default_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.defaults.set_color(color);
        self
    }

    /// Merges the theme's defaults into `base`, returning a new config.
    ///
    /// See the [module docs](self) for the merge rule and its limitation.
    pub fn apply(&self, base: &StyleConfig) -> StyleConfig {
        let mut result = base.clone();
        let theme = &self.defaults;

        if base.stroke == DEFAULT_STROKE {
            result.stroke = non_empty_or(&theme.stroke, DEFAULT_STROKE);
        }
        if base.fill == DEFAULT_FILL {
            result.fill = non_empty_or(&theme.fill, DEFAULT_FILL);
        }
        if base.stroke_width == DEFAULT_STROKE_WIDTH {
            result.stroke_width = theme.stroke_width;
        }
        if base.width == DEFAULT_SIZE {
            result.width = theme.width;
        }
        if base.height == DEFAULT_SIZE {
            result.height = theme.height;
        }

        result
    }

    /// Merges the theme's defaults into [`StyleConfig::default`].
    pub fn apply_default(&self) -> StyleConfig {
        self.apply(&StyleConfig::default())
    }

    /// Returns a built-in theme.
    pub fn preset(preset: ThemePreset) -> Self {
        match preset {
            ThemePreset::Light => Self::light(),
            ThemePreset::Dark => Self::dark(),
            ThemePreset::Colorful => Self::colorful(),
        }
    }

    pub fn light() -> Self {
        Self::fixed("light", "#000000", "none")
    }

    pub fn dark() -> Self {
        Self::fixed("dark", "#ffffff", "none")
    }

    pub fn colorful() -> Self {
        Self::fixed("colorful", "#3b82f6", "#dbeafe")
    }

    fn fixed(name: &str, stroke: &str, fill: &str) -> Self {
        let mut theme = Self::new(name);
        theme
            .set_default_stroke(stroke)
            .set_default_fill(fill)
            .set_default_stroke_width(DEFAULT_STROKE_WIDTH)
            .set_default_size(DEFAULT_SIZE);
        theme
    }

    /// Serializes the theme to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the theme to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a theme from JSON. Missing default fields keep their
    /// global defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<ThemePreset> for IconTheme {
    fn from(preset: ThemePreset) -> Self {
        Self::preset(preset)
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
