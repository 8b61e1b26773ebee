//! Importing icons from SVG files on disk.
//!
//! Loading is best-effort: a file that cannot be read, has an invalid name, or
//! contains no drawable elements is skipped and counted in the returned
//! [`LoadReport`]. Only failing to list the directory itself is an error.

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::LoadError;
use crate::registry::IconRegistry;

lazy_static! {
    static ref RE_DRAWABLE: Regex =
        Regex::new(r"<(path|circle|rect|line|polygon|polyline)(\s[^>]*?)?(/?)>").unwrap();
    static ref RE_SVG_BODY: Regex = Regex::new(r"<svg[^>]*>([\s\S]*?)</svg>").unwrap();
    static ref RE_ICON_NAME: Regex = Regex::new(r"^[a-zA-Z][a-zA-Z0-9_-]*$").unwrap();
}

/// Returns every drawable element tag in `svg`, concatenated in document order.
///
/// Recognized elements are `path`, `circle`, `rect`, `line`, `polygon`, and
/// `polyline`; the name must end at whitespace, `/`, or `>`, so elements such
/// as `linearGradient` are not mistaken for `line`. Self-closing tags are kept
/// as-is. Other tags are closed immediately and their children dropped, so the
/// result is always well-formed. Returns an empty string when nothing matches.
pub fn extract_drawable_markup(svg: &str) -> String {
    let mut markup = String::new();
    for caps in RE_DRAWABLE.captures_iter(svg) {
        markup.push_str(&caps[0]);
        if caps[3].is_empty() {
            markup.push_str(&format!("</{}>", &caps[1]));
        }
    }
    markup
}

/// Returns the trimmed content between the first `<svg ...>` and `</svg>`.
///
/// Unlike [`extract_drawable_markup`] this keeps groups, comments, and any
/// other child elements.
pub fn extract_inner_markup(svg: &str) -> String {
    RE_SVG_BODY
        .captures(svg)
        .and_then(|caps| caps.get(1))
        .map(|body| body.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Returns true if `name` is a letter followed by letters, digits, `_`, or `-`.
pub fn is_valid_icon_name(name: &str) -> bool {
    RE_ICON_NAME.is_match(name)
}

/// Outcome of a directory import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Names registered, in the order they were read.
    pub loaded: Vec<String>,
    /// Directory entries or files that could not be read.
    pub unreadable: usize,
    /// Files whose stem is not a valid icon name.
    pub invalid_names: usize,
    /// Files with no drawable elements.
    pub empty: usize,
}

impl LoadReport {
    /// Number of icons registered.
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    /// Number of `.svg` files that were skipped.
    pub fn skipped_count(&self) -> usize {
        self.unreadable + self.invalid_names + self.empty
    }
}

/// Registers every `*.svg` file in `dir` (non-recursively) under its file stem.
pub fn load_icons_from_directory(
    registry: &mut IconRegistry,
    dir: impl AsRef<Path>,
) -> Result<LoadReport, LoadError> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|source| LoadError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut report = LoadReport::default();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Failed to read entry in {}: {}", dir.display(), e);
                report.unreadable += 1;
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("svg") {
            continue;
        }

        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            report.invalid_names += 1;
            continue;
        };
        if !is_valid_icon_name(name) {
            tracing::debug!("Skipping {}: invalid icon name", path.display());
            report.invalid_names += 1;
            continue;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                report.unreadable += 1;
                continue;
            }
        };

        let markup = extract_drawable_markup(&content);
        if markup.is_empty() {
            tracing::debug!("Skipping {}: no drawable elements", path.display());
            report.empty += 1;
            continue;
        }

        registry.register(name, markup);
        report.loaded.push(name.to_string());
    }

    tracing::debug!(
        "Loaded {} icons from {} ({} skipped)",
        report.loaded_count(),
        dir.display(),
        report.skipped_count()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LUCIDE_HEART: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor">
  <path d="M19 14c1.49-1.46 3-3.21 3-5.5" />
  <circle cx="12" cy="12" r="2" />
</svg>"#;

    #[test]
    fn extract_drawable_elements_in_order() {
        let svg = r#"<svg><g><rect x="1" y="1"/></g><title>t</title><path d="M0 0"/><polyline points="1 2"/></svg>"#;
        assert_eq!(
            extract_drawable_markup(svg),
            r#"<rect x="1" y="1"/><path d="M0 0"/><polyline points="1 2"/>"#
        );
    }

    #[test]
    fn extract_drawable_keeps_all_kinds() {
        let svg = r#"<line x1="0"/><polygon points="0"/><circle r="1"/>"#;
        assert_eq!(extract_drawable_markup(svg), svg);
    }

    #[test]
    fn extract_drawable_requires_exact_element_name() {
        let svg = r#"<svg><defs><linearGradient id="g"><stop/></linearGradient></defs><rectangle/><path d="M0 0"></path></svg>"#;
        let markup = extract_drawable_markup(svg);
        assert_eq!(markup, r#"<path d="M0 0"></path>"#);
        assert!(crate::inspect::validate_svg(&crate::render::render_svg(
            &markup,
            &crate::config::StyleConfig::default()
        )));
    }

    #[test]
    fn extract_drawable_closes_open_tags() {
        let svg = r#"<circle cx="1"><title>dot</title></circle><line x1="0"/><path>"#;
        assert_eq!(
            extract_drawable_markup(svg),
            r#"<circle cx="1"></circle><line x1="0"/><path></path>"#
        );
    }

    #[test]
    fn extract_drawable_none_found() {
        assert_eq!(extract_drawable_markup("<svg><g/></svg>"), "");
        assert_eq!(extract_drawable_markup(""), "");
    }

    #[test]
    fn extract_inner_markup_trims() {
        assert_eq!(
            extract_inner_markup(LUCIDE_HEART),
            "<path d=\"M19 14c1.49-1.46 3-3.21 3-5.5\" />\n  <circle cx=\"12\" cy=\"12\" r=\"2\" />"
        );
        assert_eq!(extract_inner_markup("<path/>"), "");
    }

    #[test]
    fn icon_name_validation() {
        assert!(is_valid_icon_name("arrow-up"));
        assert!(is_valid_icon_name("a"));
        assert!(is_valid_icon_name("Icon_2"));
        assert!(!is_valid_icon_name(""));
        assert!(!is_valid_icon_name("2fa"));
        assert!(!is_valid_icon_name("-dash"));
        assert!(!is_valid_icon_name("has space"));
        assert!(!is_valid_icon_name("dot.name"));
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("heart.svg"), LUCIDE_HEART).unwrap();
        fs::write(dir.path().join("blank.svg"), "<svg><g/></svg>").unwrap();
        fs::write(dir.path().join("9lives.svg"), LUCIDE_HEART).unwrap();
        fs::write(dir.path().join("notes.txt"), "<path d=\"M0 0\"/>").unwrap();
        fs::create_dir(dir.path().join("nested.svg")).unwrap();

        let mut registry = IconRegistry::new();
        let report = load_icons_from_directory(&mut registry, dir.path()).unwrap();

        assert_eq!(report.loaded, vec!["heart".to_string()]);
        assert_eq!(report.empty, 1);
        assert_eq!(report.invalid_names, 1);
        assert_eq!(report.unreadable, 0);
        assert_eq!(report.skipped_count(), 2);

        assert_eq!(registry.list_names(), vec!["heart"]);
        assert_eq!(
            registry.get("heart").unwrap().markup(),
            r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5" /><circle cx="12" cy="12" r="2" />"#
        );
    }

    #[test]
    fn load_directory_counts_unreadable_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("heart.svg"), LUCIDE_HEART).unwrap();
        fs::write(dir.path().join("broken.svg"), [0x3c, 0xff, 0xfe, 0x3e]).unwrap();

        let mut registry = IconRegistry::new();
        let report = load_icons_from_directory(&mut registry, dir.path()).unwrap();

        assert_eq!(report.loaded, vec!["heart".to_string()]);
        assert_eq!(report.unreadable, 1);
        assert_eq!(report.skipped_count(), 1);
        assert!(!registry.has("broken"));
    }

    #[test]
    fn load_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let mut registry = IconRegistry::new();
        let err = load_icons_from_directory(&mut registry, &missing).unwrap_err();
        assert!(matches!(err, LoadError::ReadDir { .. }));
        assert!(registry.is_empty());
    }
}
