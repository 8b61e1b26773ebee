//! Named groups of icons.

use crate::config::StyleConfig;
use crate::registry::IconRegistry;
use crate::wrapper::IconWrapper;

/// An ordered, named list of icon names.
///
/// Names are checked against the registry when added; unknown names are
/// dropped without error. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IconCollection {
    name: String,
    icon_names: Vec<String>,
}

impl IconCollection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon_names: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the member names in insertion order.
    pub fn icon_names(&self) -> &[String] {
        &self.icon_names
    }

    pub fn len(&self) -> usize {
        self.icon_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icon_names.is_empty()
    }

    /// Appends `name` if the registry knows it.
    pub fn add_icon(&mut self, registry: &IconRegistry, name: &str) {
        if registry.has(name) {
            self.icon_names.push(name.to_string());
        } else {
            tracing::trace!("Collection {}: skipping unknown icon {}", self.name, name);
        }
    }

    /// Appends every known name, preserving order.
    pub fn add_icons<S: AsRef<str>>(&mut self, registry: &IconRegistry, names: &[S]) {
        for name in names {
            self.add_icon(registry, name.as_ref());
        }
    }

    /// Removes every occurrence of `name`.
    pub fn remove_icon(&mut self, name: &str) {
        self.icon_names.retain(|n| n != name);
    }

    pub fn clear(&mut self) {
        self.icon_names.clear();
    }

    /// Renders every member in order with one shared config.
    ///
    /// Members missing from `registry` render as empty strings.
    pub fn render_all(&self, registry: &IconRegistry, config: &StyleConfig) -> Vec<String> {
        IconWrapper::render_multiple(registry, &self.icon_names, config)
    }
}
