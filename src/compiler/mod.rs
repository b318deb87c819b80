//! Page rendering and output writing.
//!
//! - **markdown**: Markdown body to HTML fragment
//! - **pages**: One output file per discovered page
//!
//! ```text
//! Page.body ──► markdown::to_html() ──► Template::render() ──► write_html()
//! ```

pub mod markdown;
pub mod pages;

pub use pages::write_pages;

use crate::{config::SiteConfig, utils::minify::minify_html};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Write a rendered page, minified if `[build.minify]` is set.
///
/// Parent directories are expected to exist already.
pub fn write_html(path: &Path, html: &str, config: &SiteConfig) -> Result<()> {
    let html = minify_html(html.as_bytes(), config);
    fs::write(path, &*html).with_context(|| format!("Failed to write {}", path.display()))
}
