//! SVG validation and normalization using resvg/usvg.
//!
//! Optional utilities for checking source assets or rendered output. Nothing
//! on the rendering path depends on this module.
//!
//! [`parse_svg`] also flattens every shape in the document into plain
//! `<path>` elements, so any SVG can be turned into markup suitable for
//! [`IconRegistry::register`](crate::IconRegistry::register).

use resvg::usvg::tiny_skia_path::PathSegment;
use resvg::usvg::{Color, Group, Node, Options, Paint, Path, Tree};

use crate::error::InspectError;

/// Basic facts about a parsed SVG document.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgInfo {
    /// Rendered width in user units.
    pub width: f32,
    /// Rendered height in user units.
    pub height: f32,
    /// Every shape as a `<path d="..."/>` element in document order, in
    /// absolute coordinates, with its resolved stroke and fill colors.
    pub path_data: String,
}

impl SvgInfo {
    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        (self.width - self.height).abs() < f32::EPSILON
    }
}

/// Parses a complete SVG document.
pub fn parse_svg(svg_data: &str) -> Result<SvgInfo, InspectError> {
    let opts = Options::default();
    let tree = Tree::from_str(svg_data, &opts)?;
    let size = tree.size();

    let mut path_data = String::new();
    write_group(tree.root(), &mut path_data);

    Ok(SvgInfo {
        width: size.width(),
        height: size.height(),
        path_data,
    })
}

fn write_group(group: &Group, out: &mut String) {
    for node in group.children() {
        match node {
            Node::Group(group) => write_group(group, out),
            Node::Path(path) => write_path(path, out),
            _ => {}
        }
    }
}

/// Writes one path as `<path d="..." [stroke=".." stroke-width=".."] fill=".."/>`.
fn write_path(path: &Path, out: &mut String) {
    let Some(data) = path.data().clone().transform(path.abs_transform()) else {
        return;
    };

    let mut d = String::new();
    for segment in data.segments() {
        match segment {
            PathSegment::MoveTo(p) => d.push_str(&format!("M{},{}", p.x, p.y)),
            PathSegment::LineTo(p) => d.push_str(&format!("L{},{}", p.x, p.y)),
            PathSegment::QuadTo(p1, p) => {
                d.push_str(&format!("Q{},{} {},{}", p1.x, p1.y, p.x, p.y))
            }
            PathSegment::CubicTo(p1, p2, p) => d.push_str(&format!(
                "C{},{} {},{} {},{}",
                p1.x, p1.y, p2.x, p2.y, p.x, p.y
            )),
            PathSegment::Close => d.push('Z'),
        }
    }

    out.push_str(&format!("<path d=\"{}\"", d));

    if let Some(stroke) = path.stroke() {
        if let Paint::Color(color) = stroke.paint() {
            out.push_str(&format!(
                " stroke=\"{}\" stroke-width=\"{}\"",
                hex_color(*color),
                stroke.width().get()
            ));
        }
    }

    match path.fill().map(|fill| fill.paint()) {
        Some(Paint::Color(color)) => {
            out.push_str(&format!(" fill=\"{}\"", hex_color(*color)))
        }
        _ => out.push_str(" fill=\"none\""),
    }

    out.push_str("/>");
}

fn hex_color(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Returns true if `svg_data` parses as an SVG document.
pub fn validate_svg(svg_data: &str) -> bool {
    match parse_svg(svg_data) {
        Ok(_) => true,
        Err(e) => {
            tracing::debug!("SVG validation failed: {}", e);
            false
        }
    }
}

/// Returns the document's `(width, height)`, or `None` if it does not parse.
pub fn svg_dimensions(svg_data: &str) -> Option<(f32, f32)> {
    parse_svg(svg_data).ok().map(|info| (info.width, info.height))
}
