//! stroke-icons: SVG icon rendering from named path markup
//!
//! This crate turns a symbolic icon name plus a [`StyleConfig`] into a small,
//! deterministic SVG document. Icons live in an [`IconRegistry`] that is
//! populated once (by hand or from a directory of `.svg` files) and then shared
//! read-only.
//!
//! # Example
//!
//! ```
//! use stroke_icons::{IconRegistry, IconWrapper, StyleConfig};
//!
//! let mut registry = IconRegistry::new();
//! registry.register("circle", r#"<circle cx="12" cy="12" r="10"/>"#);
//!
//! // Render directly through the registry
//! let svg = registry.generate("circle", &StyleConfig::new().with_size(32));
//! assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="32""#));
//!
//! // Unknown names render as an empty string
//! assert_eq!(registry.generate("missing", &StyleConfig::default()), "");
//!
//! // Or configure fluently
//! let svg = IconWrapper::new(&registry, "circle")?
//!     .color("#3b82f6")
//!     .stroke_width(1)
//!     .render();
//! assert!(svg.contains(r##"stroke="#3b82f6""##));
//! # Ok::<(), stroke_icons::IconError>(())
//! ```
//!
//! # Themes and Collections
//!
//! ```
//! use stroke_icons::{IconCollection, IconRegistry, IconTheme, StyleConfig};
//!
//! let mut registry = IconRegistry::new();
//! registry.register("home", r#"<path d="M3 9l9-7 9 7"/>"#);
//! registry.register("user", r#"<circle cx="12" cy="7" r="4"/>"#);
//!
//! let mut nav = IconCollection::new("nav");
//! nav.add_icons(&registry, &["home", "user", "not-registered"]);
//! assert_eq!(nav.len(), 2);
//!
//! // Theme defaults only replace fields the caller left at their defaults
//! let config = IconTheme::dark().apply(&StyleConfig::default());
//! assert_eq!(config.stroke, "#ffffff");
//!
//! let rendered = nav.render_all(&registry, &config);
//! assert_eq!(rendered.len(), 2);
//! ```

mod collection;
mod config;
mod error;
mod icon;
mod registry;
mod render;
mod theme;
mod wrapper;

pub mod inspect;
pub mod loader;

pub use collection::IconCollection;
pub use config::{
    DEFAULT_COLOR, DEFAULT_FILL, DEFAULT_LINE_STYLE, DEFAULT_SIZE, DEFAULT_STROKE,
    DEFAULT_STROKE_WIDTH, StyleConfig,
};
pub use error::{IconError, InspectError, LoadError};
pub use icon::IconRecord;
pub use registry::IconRegistry;
pub use render::{SVG_NAMESPACE, VIEW_BOX, render_svg};
pub use theme::{IconTheme, ThemePreset, UnknownPreset};
pub use wrapper::IconWrapper;
