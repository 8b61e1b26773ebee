//! Fluent configuration of a single icon.

use std::sync::Arc;

use crate::config::StyleConfig;
use crate::error::IconError;
use crate::icon::IconRecord;
use crate::registry::IconRegistry;
use crate::render::render_svg;

/// A chainable builder bound to one icon.
///
/// Construction by name fails with [`IconError::NotFound`] when the icon is
/// not registered. Once built, the wrapper holds its own reference to the
/// record, so it outlives later changes to the registry.
///
/// Cloning produces an independent wrapper: mutating the clone never affects
/// the original.
///
/// # Example
///
/// ```
/// use stroke_icons::{IconRegistry, IconWrapper};
///
/// let mut registry = IconRegistry::new();
/// registry.register("heart", r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5"/>"#);
///
/// let svg = IconWrapper::new(&registry, "heart")?
///     .size(32)
///     .color("#ef4444")
///     .class_name("icon")
///     .render();
/// assert!(svg.contains(r#"width="32""#));
/// # Ok::<(), stroke_icons::IconError>(())
/// ```
#[derive(Debug, Clone)]
pub struct IconWrapper {
    icon: Arc<IconRecord>,
    config: StyleConfig,
}

impl IconWrapper {
    /// Looks up `name` in the registry and binds a wrapper to it.
    pub fn new(registry: &IconRegistry, name: &str) -> Result<Self, IconError> {
        let icon = registry.get(name).ok_or_else(|| IconError::NotFound {
            name: name.to_string(),
        })?;
        Ok(Self::from_record(icon))
    }

    /// Binds a wrapper to an existing record with the default config.
    pub fn from_record(icon: Arc<IconRecord>) -> Self {
        Self {
            icon,
            config: StyleConfig::default(),
        }
    }

    /// Returns the bound icon.
    pub fn icon(&self) -> &IconRecord {
        &self.icon
    }

    /// Returns the accumulated configuration.
    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// Sets width and height independently.
    pub fn dimensions(&mut self, width: i32, height: i32) -> &mut Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    /// Sets a square size.
    pub fn size(&mut self, size: i32) -> &mut Self {
        self.config.set_size(size);
        self
    }

    pub fn stroke(&mut self, color: impl Into<String>) -> &mut Self {
        self.config.stroke = color.into();
        self
    }

    /// Sets `color`, `stroke`, and `fill` to the same value.
    pub fn color(&mut self, color: impl Into<String>) -> &mut Self {
        let color = color.into();
        self.config.stroke = color.clone();
        self.config.fill = color.clone();
        self.config.color = color;
        self
    }

    pub fn stroke_width(&mut self, width: i32) -> &mut Self {
        self.config.stroke_width = width;
        self
    }

    pub fn fill(&mut self, color: impl Into<String>) -> &mut Self {
        self.config.fill = color.into();
        self
    }

    pub fn class_name(&mut self, class_name: impl Into<String>) -> &mut Self {
        self.config.class_name = class_name.into();
        self
    }

    pub fn style(&mut self, style: impl Into<String>) -> &mut Self {
        self.config.style = style.into();
        self
    }

    /// Replaces the whole configuration, e.g. with a theme-merged one.
    pub fn apply_config(&mut self, config: StyleConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Discards all configuration, returning to [`StyleConfig::default`].
    pub fn reset(&mut self) -> &mut Self {
        self.config = StyleConfig::default();
        self
    }

    /// Renders the icon with the accumulated configuration.
    pub fn render(&self) -> String {
        render_svg(self.icon.markup(), &self.config)
    }

    /// Renders each name with one shared config, in input order.
    ///
    /// Unknown names yield an empty string in their slot.
    pub fn render_multiple<S: AsRef<str>>(
        registry: &IconRegistry,
        names: &[S],
        config: &StyleConfig,
    ) -> Vec<String> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                match registry.get(name) {
                    Some(icon) => render_svg(icon.markup(), config),
                    None => {
                        tracing::trace!("render_multiple: unknown icon {}", name);
                        String::new()
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> IconRegistry {
        let mut registry = IconRegistry::new();
        registry.register("heart", r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5"/>"#);
        registry.register("a", r#"<path d="M0 0"/>"#);
        registry
    }

    #[test]
    fn new_unknown_name_fails() {
        let err = IconWrapper::new(&registry(), "missing").unwrap_err();
        assert_eq!(
            err,
            IconError::NotFound {
                name: "missing".into()
            }
        );
        assert_eq!(err.to_string(), "icon not found: missing");
    }

    #[test]
    fn chained_configuration() {
        let registry = registry();
        let mut wrapper = IconWrapper::new(&registry, "heart").unwrap();
        wrapper
            .size(32)
            .stroke("#111")
            .stroke_width(3)
            .fill("#eee")
            .class_name("icon")
            .style("display: block");

        let config = wrapper.config();
        assert_eq!((config.width, config.height, config.size), (32, 32, 32));
        assert_eq!(config.stroke, "#111");
        assert_eq!(config.stroke_width, 3);
        assert_eq!(config.fill, "#eee");

        let svg = wrapper.render();
        assert!(svg.contains(r#"class="icon" style="display: block">"#));
        assert!(svg.contains(r#"stroke-width="3""#));
    }

    #[test]
    fn dimensions_are_independent() {
        let registry = registry();
        let mut wrapper = IconWrapper::new(&registry, "heart").unwrap();
        wrapper.dimensions(40, 20);
        assert_eq!(wrapper.config().width, 40);
        assert_eq!(wrapper.config().height, 20);
        assert_eq!(wrapper.config().size, 24);
    }

    #[test]
    fn color_sets_stroke_fill_and_color() {
        let registry = registry();
        let mut wrapper = IconWrapper::new(&registry, "heart").unwrap();
        wrapper.color("#00ff00");
        let config = wrapper.config();
        assert_eq!(config.color, "#00ff00");
        assert_eq!(config.stroke, "#00ff00");
        assert_eq!(config.fill, "#00ff00");
    }

    #[test]
    fn reset_restores_defaults() {
        let registry = registry();
        let mut wrapper = IconWrapper::new(&registry, "heart").unwrap();
        wrapper.size(64).color("red").reset();
        assert_eq!(wrapper.config(), &StyleConfig::default());
    }

    #[test]
    fn clone_is_independent() {
        let registry = registry();
        let mut original = IconWrapper::new(&registry, "heart").unwrap();
        original.size(32);
        let before = original.render();

        let mut cloned = original.clone();
        cloned.color("#00ff00");

        assert_ne!(cloned.render(), original.render());
        assert_eq!(original.render(), before);
        assert_eq!(cloned.config().width, 32);
        assert_eq!(cloned.icon().name(), "heart");
    }

    #[test]
    fn wrapper_outlives_registry_changes() {
        let mut registry = registry();
        let wrapper = IconWrapper::new(&registry, "a").unwrap();
        registry.register("a", "<rect/>");
        assert!(wrapper.render().contains(r#"<path d="M0 0"/>"#));
    }

    #[test]
    fn from_record_uses_defaults() {
        let wrapper = IconWrapper::from_record(Arc::new(IconRecord::new("dot", "<circle/>")));
        assert_eq!(wrapper.render(), render_svg("<circle/>", &StyleConfig::default()));
    }

    #[test]
    fn render_multiple_substitutes_empty() {
        let registry = registry();
        let config = StyleConfig::new().with_size(16);
        let out = IconWrapper::render_multiple(&registry, &["a", "missing", "heart"], &config);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], registry.generate("a", &config));
        assert_eq!(out[1], "");
        assert_eq!(out[2], registry.generate("heart", &config));
    }

    #[test]
    fn render_multiple_empty_input() {
        let names: Vec<String> = Vec::new();
        assert!(IconWrapper::render_multiple(&registry(), &names, &StyleConfig::default()).is_empty());
    }
}
