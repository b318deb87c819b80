//! Shared page template and placeholder substitution.
//!
//! # Token contract
//!
//! | Token                | Replaced with                         | Occurrences |
//! |----------------------|---------------------------------------|-------------|
//! | `{{ content }}`      | page body HTML                        | first only  |
//! | `{{pathToHome}}`     | link to `index.html`                  | all         |
//! | `{{pathToProjects}}` | link to `projects.html`               | all         |
//! | `{{pathToLinks}}`    | link to `links.html`                  | all         |
//! | `{{pathToResume}}`   | link to `resume.html`                 | all         |
//!
//! Navigation links are relative to the directory of the page being rendered.

use crate::config::{
    OutputPaths,
    paths::{INDEX_HTML, LINKS_HTML, PROJECTS_HTML, RESUME_HTML},
};
use crate::utils::path::relative_href;
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const CONTENT_TOKEN: &str = "{{ content }}";
pub const HOME_TOKEN: &str = "{{pathToHome}}";
pub const PROJECTS_TOKEN: &str = "{{pathToProjects}}";
pub const LINKS_TOKEN: &str = "{{pathToLinks}}";
pub const RESUME_TOKEN: &str = "{{pathToResume}}";

/// One navigation placeholder and the output file it points at.
struct NavTarget {
    token: &'static str,
    file_name: &'static str,
    path: PathBuf,
}

/// The site template, loaded once per build and shared read-only.
pub struct Template {
    source: String,
    nav: [NavTarget; 4],
}

impl Template {
    /// Build a template from its HTML source.
    pub fn new(source: impl Into<String>, paths: OutputPaths<'_>) -> Self {
        let nav = [
            (HOME_TOKEN, INDEX_HTML, paths.index()),
            (PROJECTS_TOKEN, PROJECTS_HTML, paths.projects()),
            (LINKS_TOKEN, LINKS_HTML, paths.links()),
            (RESUME_TOKEN, RESUME_HTML, paths.resume()),
        ]
        .map(|(token, file_name, path)| NavTarget {
            token,
            file_name,
            path,
        });

        Self {
            source: source.into(),
            nav,
        }
    }

    /// Read the template file.
    pub fn load(path: &Path, paths: OutputPaths<'_>) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template: {}", path.display()))?;
        Ok(Self::new(source, paths))
    }

    /// Produce the final HTML for a page written at `output_path`.
    ///
    /// A template without `{{ content }}` drops the content silently.
    pub fn render(&self, content: &str, output_path: &Path) -> String {
        let mut html = self.source.replacen(CONTENT_TOKEN, content, 1);

        for target in &self.nav {
            if !html.contains(target.token) {
                continue;
            }
            let href = relative_href(output_path, &target.path);
            let href = if href.is_empty() {
                target.file_name
            } else {
                href.as_str()
            };
            html = html.replace(target.token, href);
        }

        html
    }
}
