use super::{markdown, write_html};
use crate::content::Pages;
use crate::template::Template;
use crate::{config::SiteConfig, log};
use anyhow::Result;
use rayon::prelude::*;

/// Render every discovered page through the template and write it.
///
/// Output paths are disjoint, so pages are written in parallel. The first
/// failure stops the remaining writes; pages already written stay on disk.
pub fn write_pages(pages: &Pages, template: &Template, config: &SiteConfig) -> Result<()> {
    pages.items.par_iter().try_for_each(|page| {
        let content = markdown::to_html(&page.body);
        let html = template.render(&content, &page.output_path);
        write_html(&page.output_path, &html, config)?;
        log!("page"; "{} -> {}", page.source_path.display(), page.output_path.display());
        Ok(())
    })
}
