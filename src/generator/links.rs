//! Links directory (`links.html`) from the front matter of `links.md`.
//!
//! ```yaml
//! ---
//! links:
//!   - title: GitHub
//!     url: https://github.com/someone
//!     icon: "<svg>…</svg>"
//!     description: Code and experiments
//! ---
//! ```
//!
//! The page is optional: any failure in this step is logged and skipped.

use crate::{
    compiler::write_html,
    config::SiteConfig,
    content::{
        meta::{LinkEntry, LinksFile},
        parse_front_matter, split_front_matter,
    },
    log,
    template::Template,
};
use anyhow::{Context, Result};
use std::fs;

/// Build `links.html`, returning whether it was written.
pub fn build_links_page(template: &Template, config: &SiteConfig) -> bool {
    match try_build_links_page(template, config) {
        Ok(count) => {
            log!("list"; "links page ({count} links)");
            true
        }
        Err(err) => {
            log!("warn"; "skipping links page: {err:#}");
            false
        }
    }
}

fn try_build_links_page(template: &Template, config: &SiteConfig) -> Result<usize> {
    let source = &config.build.links;
    let text = fs::read_to_string(source)
        .with_context(|| format!("cannot read {}", source.display()))?;
    let (yaml, _) = split_front_matter(&text);
    let file: LinksFile = parse_front_matter(yaml)
        .with_context(|| format!("invalid front matter in {}", source.display()))?;

    let output = config.paths().links();
    let content = links_content(&file.links);
    write_html(&output, &template.render(&content, &output), config)?;
    Ok(file.links.len())
}

fn links_content(links: &[LinkEntry]) -> String {
    let cards = links.iter().map(link_card).collect::<Vec<_>>().join("\n");
    format!(
        r#"
            <h1 class="page-title">Links</h1>
            <div class="links-grid">{cards}</div>
        "#
    )
}

fn link_card(link: &LinkEntry) -> String {
    format!(
        r#"
            <a href="{url}" target="_blank" rel="noopener noreferrer" class="link-card">
                <div class="link-card-icon">{icon}</div>
                <div class="link-card-content">
                    <span class="link-card-title">{title}</span>
                    <p class="link-card-description">{description}</p>
                </div>
            </a>
        "#,
        url = link.url,
        icon = link.icon,
        title = link.title,
        description = link.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn setup(root: &Path) -> (SiteConfig, Template) {
        let mut config = SiteConfig::default();
        config.build.output = root.join("dist");
        config.build.links = root.join("links.md");
        fs::create_dir_all(&config.build.output).unwrap();
        let template = Template::new("{{ content }}", config.paths());
        (config, template)
    }

    #[test]
    fn test_link_card() {
        let card = link_card(&LinkEntry {
            title: "GitHub".into(),
            url: "https://github.com/me".into(),
            icon: "<svg></svg>".into(),
            description: "code".into(),
        });
        assert!(card.contains(
            r#"<a href="https://github.com/me" target="_blank" rel="noopener noreferrer" class="link-card">"#
        ));
        assert!(card.contains(r#"<div class="link-card-icon"><svg></svg></div>"#));
        assert!(card.contains(r#"<span class="link-card-title">GitHub</span>"#));
        assert!(card.contains(r#"<p class="link-card-description">code</p>"#));
    }

    #[test]
    fn test_links_page_written() {
        let dir = tempfile::tempdir().unwrap();
        let (config, template) = setup(dir.path());
        fs::write(
            &config.build.links,
            "---\nlinks:\n  - title: A\n    url: https://a.example\n  - title: B\n    url: https://b.example\n---\n",
        )
        .unwrap();

        assert!(build_links_page(&template, &config));
        let html = fs::read_to_string(config.paths().links()).unwrap();
        assert_eq!(html.matches("class=\"link-card\"").count(), 2);
        assert!(html.contains("https://b.example"));
    }

    #[test]
    fn test_links_page_skipped_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let (config, template) = setup(dir.path());

        assert!(!build_links_page(&template, &config));
        assert!(!config.paths().links().exists());
    }

    #[test]
    fn test_links_page_skipped_when_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let (config, template) = setup(dir.path());
        fs::write(&config.build.links, "---\nlinks: [unclosed\n---\n").unwrap();

        assert!(!build_links_page(&template, &config));
        assert!(!config.paths().links().exists());
    }

    #[test]
    fn test_links_page_without_front_matter() {
        let dir = tempfile::tempdir().unwrap();
        let (config, template) = setup(dir.path());
        fs::write(&config.build.links, "just text").unwrap();

        assert!(build_links_page(&template, &config));
        let html = fs::read_to_string(config.paths().links()).unwrap();
        assert!(html.contains(r#"<div class="links-grid"></div>"#));
    }
}
