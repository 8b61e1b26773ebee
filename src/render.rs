//! SVG synthesis.
//!
//! Wraps an icon's inner markup in a single `<svg>` element. The output is
//! byte-for-byte deterministic: attributes are always emitted in this order:
//!
//! ```text
//! xmlns, width, height, viewBox, fill, stroke, stroke-width,
//! stroke-linecap, stroke-linejoin, [class], [style]
//! ```
//!
//! `class` and `style` appear only when non-empty. The `viewBox` is always
//! `0 0 24 24`: every icon is drawn in the same 24-unit coordinate space and
//! `width`/`height` only scale it.
//!
//! Attribute values and markup are inserted verbatim, without escaping.

use crate::config::StyleConfig;
use crate::icon::IconRecord;

/// XML namespace emitted on every rendered icon.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Logical coordinate space shared by all icons.
pub const VIEW_BOX: &str = "0 0 24 24";

/// Renders `markup` inside an `<svg>` wrapper styled by `config`.
///
/// Never fails. Empty markup yields an empty-bodied `<svg ...></svg>`.
pub fn render_svg(markup: &str, config: &StyleConfig) -> String {
    let mut svg = String::with_capacity(256 + markup.len());

    svg.push_str(&format!(
        "<svg xmlns=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"{}\"",
        SVG_NAMESPACE, config.width, config.height, VIEW_BOX
    ));
    svg.push_str(&format!(
        " fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"{}\" stroke-linejoin=\"{}\"",
        config.fill,
        config.stroke,
        config.stroke_width,
        config.stroke_linecap,
        config.stroke_linejoin
    ));

    if !config.class_name.is_empty() {
        svg.push_str(&format!(" class=\"{}\"", config.class_name));
    }
    if !config.style.is_empty() {
        svg.push_str(&format!(" style=\"{}\"", config.style));
    }

    svg.push('>');
    svg.push_str(markup);
    svg.push_str("</svg>");
    svg
}

impl IconRecord {
    /// Renders this icon with the default [`StyleConfig`].
    pub fn to_svg(&self) -> String {
        render_svg(self.markup(), &StyleConfig::default())
    }

    /// Renders this icon with a custom [`StyleConfig`].
    pub fn to_svg_with(&self, config: &StyleConfig) -> String {
        render_svg(self.markup(), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PATH: &str = r#"<path d="M12 2v20"/>"#;

    #[test]
    fn render_default_config() {
        let svg = render_svg(PATH, &StyleConfig::default());
        assert_eq!(
            svg,
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24""#,
                r#" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<path d="M12 2v20"/></svg>"#
            )
        );
    }

    #[test]
    fn class_and_style_follow_linejoin() {
        let config = StyleConfig::new()
            .with_class_name("icon icon-lg")
            .with_style("opacity: 0.5");
        let svg = render_svg(PATH, &config);
        assert!(svg.contains(
            r#"stroke-linejoin="round" class="icon icon-lg" style="opacity: 0.5">"#
        ));
    }

    #[test]
    fn empty_class_and_style_are_omitted() {
        let svg = render_svg(PATH, &StyleConfig::default());
        assert!(!svg.contains("class="));
        assert!(!svg.contains("style="));
    }

    #[test]
    fn style_without_class() {
        let svg = render_svg(PATH, &StyleConfig::new().with_style("color: red"));
        assert!(!svg.contains("class="));
        assert!(svg.contains(r#"stroke-linejoin="round" style="color: red">"#));
    }

    #[test]
    fn view_box_ignores_dimensions() {
        let mut config = StyleConfig::new();
        config.width = 64;
        config.height = 32;
        let svg = render_svg(PATH, &config);
        assert!(svg.contains(r#"width="64" height="32" viewBox="0 0 24 24""#));
    }

    #[test]
    fn empty_markup_is_valid_svg() {
        let svg = render_svg("", &StyleConfig::default());
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("round\"></svg>"));
    }

    #[test]
    fn negative_numbers_render_as_integers() {
        let config = StyleConfig::new().with_stroke_width(-1);
        assert!(render_svg(PATH, &config).contains(r#"stroke-width="-1""#));
    }

    #[test]
    fn render_is_deterministic() {
        let config = StyleConfig::new().with_size(48).with_color("#ff0000");
        assert_eq!(render_svg(PATH, &config), render_svg(PATH, &config));
    }

    #[test]
    fn record_to_svg() {
        let record = IconRecord::new("line", PATH);
        assert_eq!(record.to_svg(), render_svg(PATH, &StyleConfig::default()));

        let config = StyleConfig::new().with_fill("#000");
        assert!(record.to_svg_with(&config).contains(r##"fill="#000""##));
    }
}
