//! Listing pages built from the discovered pages.
//!
//! | File            | Source                 | Required |
//! |-----------------|------------------------|----------|
//! | `projects.html` | project pages          | yes      |
//! | `index.html`    | post pages             | yes      |
//! | `links.html`    | `links.md` front matter| no       |
//! | `resume.html`   | fixed markup           | yes      |

mod links;
mod posts;
mod projects;
mod resume;

use crate::{config::SiteConfig, content::Pages, template::Template};
use anyhow::Result;

/// Build all four listing pages.
///
/// Returns whether `links.html` was written.
pub fn build_listing_pages(
    pages: &Pages,
    template: &Template,
    config: &SiteConfig,
) -> Result<bool> {
    projects::build_projects_page(pages, template, config)?;
    posts::build_post_index(pages, template, config)?;
    let links_written = links::build_links_page(template, config);
    resume::build_resume_page(template, config)?;
    Ok(links_written)
}
