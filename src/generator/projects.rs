//! Project grid (`projects.html`).
//!
//! ```html
//! <a href="projects/tracer.html" class="card-link">
//!   <div class="card">
//!     <div class="mac-header">…</div>
//!     <span class="card-title">Ray Tracer</span>
//!     <p class="card-description">…</p>
//!     <div class="card-tags"><span class="card-tag">rust</span></div>
//!     <div class="code-editor"><pre><code>fn main() {}</code></pre></div>
//!   </div>
//! </a>
//! ```

use crate::{
    compiler::write_html,
    config::SiteConfig,
    content::{Page, Pages},
    log,
    template::Template,
    utils::{html::escape_angle_brackets, path::relative_href},
};
use anyhow::Result;
use std::path::Path;

pub fn build_projects_page(pages: &Pages, template: &Template, config: &SiteConfig) -> Result<()> {
    let output = config.paths().projects();
    let content = projects_content(pages, &output);
    write_html(&output, &template.render(&content, &output), config)?;
    log!("list"; "projects page ({} projects)", pages.projects().count());
    Ok(())
}

fn projects_content(pages: &Pages, listing: &Path) -> String {
    let cards = pages
        .projects()
        .map(|project| project_card(project, listing))
        .collect::<Vec<_>>()
        .join("\n");
    format!(r#"<h1 class="page-title">My Projects</h1><div class="projects-grid">{cards}</div>"#)
}

fn project_card(project: &Page, listing: &Path) -> String {
    let href = relative_href(listing, &project.output_path);
    let description = project.meta.description.as_deref().unwrap_or_default();
    let tags: String = project
        .meta
        .tags
        .iter()
        .map(|tag| format!(r#"<span class="card-tag">{tag}</span>"#))
        .collect();
    let snippet =
        escape_angle_brackets(project.meta.code_snippet.as_deref().unwrap_or_default().trim());

    format!(
        r#"
      <a href="{href}" class="card-link">
        <div class="card">
          <div class="mac-header"><span class="red"></span><span class="yellow"></span><span class="green"></span></div>
          <span class="card-title">{title}</span>
          <p class="card-description">{description}</p>
          <div class="card-tags">{tags}</div>
          <div class="code-editor"><pre><code>{snippet}</code></pre></div>
        </div>
      </a>"#,
        title = project.title,
    )
}
