//! `[build]` section configuration.
//!
//! Input locations, the output root, and HTML post-processing.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in site.toml - build pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// content = "content"      # Post sources
/// projects = "projects"    # Project sources
/// output = "dist"          # Wiped and rebuilt every run
/// resume = "resume.pdf"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Blog post sources (`*.md`).
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Project sources (`*.md`), rendered under `projects/`.
    #[serde(default = "defaults::build::projects")]
    #[educe(Default = defaults::build::projects())]
    pub projects: PathBuf,

    /// Build output directory. Removed and recreated on every build.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Shared HTML template with content and navigation placeholders.
    #[serde(default = "defaults::build::template")]
    #[educe(Default = defaults::build::template())]
    pub template: PathBuf,

    /// Front-matter-only file listing external links.
    #[serde(default = "defaults::build::links")]
    #[educe(Default = defaults::build::links())]
    pub links: PathBuf,

    /// Resume file name, looked up in the root and copied into the output.
    #[serde(default = "defaults::build::resume")]
    #[educe(Default = defaults::build::resume())]
    pub resume: String,

    /// Minify HTML output.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub minify: bool,
}
