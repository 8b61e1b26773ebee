//! Error types.
//!
//! Only builder construction raises in the rendering core. Registry lookups,
//! batch renders, and collection edits treat unknown names as silent misses.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the rendering core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    /// No icon is registered under the requested name.
    #[error("icon not found: {name}")]
    NotFound { name: String },
}

/// Errors raised while importing SVG assets from disk.
///
/// Per-file problems are skipped and counted in a
/// [`LoadReport`](crate::loader::LoadReport) instead.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read icon directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised when parsing a full SVG document.
#[derive(Error, Debug)]
pub enum InspectError {
    #[error("failed to parse SVG: {0}")]
    Parse(#[from] resvg::usvg::Error),
}
