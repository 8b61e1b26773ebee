//! Name-keyed icon storage.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::StyleConfig;
use crate::icon::IconRecord;
use crate::render::render_svg;

/// Registry of icons keyed by name.
///
/// Populate it once at startup (through [`register`](Self::register) or
/// [`load_icons_from_directory`](crate::loader::load_icons_from_directory)),
/// then share it read-only. The registry is `Send + Sync`, so wrapping it in an
/// `Arc` lets any number of threads read it concurrently.
///
/// Lookups of unknown names never fail: [`get`](Self::get) returns `None` and
/// [`generate`](Self::generate) returns an empty string.
#[derive(Debug, Clone, Default)]
pub struct IconRegistry {
    icons: HashMap<String, Arc<IconRecord>>,
}

impl IconRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an icon, replacing any existing icon of the same name.
    ///
    /// The name is not validated here; see
    /// [`is_valid_icon_name`](crate::loader::is_valid_icon_name).
    pub fn register(&mut self, name: impl Into<String>, markup: impl Into<String>) {
        let name = name.into();
        let record = Arc::new(IconRecord::new(name.clone(), markup));
        if self.icons.contains_key(&name) {
            tracing::debug!("Replacing icon: {}", name);
        }
        self.icons.insert(name, record);
    }

    /// Returns the icon registered under `name`.
    pub fn get(&self, name: &str) -> Option<Arc<IconRecord>> {
        self.icons.get(name).cloned()
    }

    /// Returns true if an icon is registered under `name`.
    pub fn has(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// Returns all icon names in ascending lexicographic order.
    pub fn list_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.icons.keys().cloned().collect();
        names.sort();
        names
    }

    /// Alias for [`list_names`](Self::list_names).
    pub fn available_icons(&self) -> Vec<String> {
        self.list_names()
    }

    /// Returns the number of registered icons.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Returns true if no icons are registered.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Renders the named icon, or returns an empty string if it is unknown.
    pub fn generate(&self, name: &str, config: &StyleConfig) -> String {
        match self.icons.get(name) {
            Some(record) => render_svg(record.markup(), config),
            None => {
                tracing::trace!("generate: unknown icon {}", name);
                String::new()
            }
        }
    }

    /// Renders the named icon with the default config.
    pub fn generate_default(&self, name: &str) -> String {
        self.generate(name, &StyleConfig::default())
    }
}
