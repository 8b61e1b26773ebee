//! Icon records.
//!
//! An [`IconRecord`] pairs a symbolic name with the drawable markup that
//! goes inside the `<svg>` wrapper. Records are immutable once created and are
//! shared out of the registry behind an `Arc`.

/// A named icon and its inner SVG markup.
///
/// The markup is opaque: typically a run of `<path>`, `<circle>`, or `<rect>`
/// elements extracted from a source SVG, without the outer `<svg>` element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconRecord {
    name: String,
    markup: String,
}

impl IconRecord {
    /// Creates a new record.
    pub fn new(name: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markup: markup.into(),
        }
    }

    /// Returns the icon name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw inner markup.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Returns true if the record carries no drawable markup.
    pub fn is_empty(&self) -> bool {
        self.markup.is_empty()
    }
}
