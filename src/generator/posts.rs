//! Post index (`index.html`).

use crate::{
    compiler::write_html, config::SiteConfig, content::Pages, log, template::Template,
    utils::path::relative_href,
};
use anyhow::Result;
use std::path::Path;

pub fn build_post_index(pages: &Pages, template: &Template, config: &SiteConfig) -> Result<()> {
    let output = config.paths().index();
    let content = index_content(pages, &output);
    write_html(&output, &template.render(&content, &output), config)?;
    log!("list"; "post index ({} posts)", pages.posts().count());
    Ok(())
}

fn index_content(pages: &Pages, index: &Path) -> String {
    let items = pages
        .posts()
        .map(|post| {
            let href = relative_href(index, &post.output_path);
            format!(r#"<li><a href="{href}">{}</a></li>"#, post.title)
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("<h1>All Posts</h1><ul>{items}</ul>")
}
