//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── Template::load()        template.html, read once
//!     ├── clean_output()          rm -r dist && mkdir -p dist/projects
//!     ├── copy_resume()           best effort
//!     ├── discover()              content/*.md + projects/*.md → Pages
//!     ├── write_pages()           one HTML file per page
//!     └── build_listing_pages()   projects, index, links, resume
//! ```
//!
//! Any error aborts the build; files written before it stay on disk.

use crate::{
    compiler::write_pages, config::SiteConfig, content::discover,
    generator::build_listing_pages, log, template::Template,
};
use anyhow::{Context, Result};
use std::fs;

/// Counts reported after a successful build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub posts: usize,
    pub projects: usize,
    pub resume_copied: bool,
    pub links_written: bool,
}

/// Build the entire site from scratch.
pub fn build_site(config: &SiteConfig) -> Result<BuildSummary> {
    log!("build"; "starting");
    let template = Template::load(&config.build.template, config.paths())?;

    clean_output(config)?;
    let resume_copied = copy_resume(config);

    let pages = discover(config)?;
    write_pages(&pages, &template, config)?;
    let links_written = build_listing_pages(&pages, &template, config)?;

    let summary = BuildSummary {
        posts: pages.posts().count(),
        projects: pages.projects().count(),
        resume_copied,
        links_written,
    };
    log!(
        "build";
        "done: {} posts, {} projects, links {}, resume {} -> {}",
        summary.posts,
        summary.projects,
        if summary.links_written { "written" } else { "skipped" },
        if summary.resume_copied { "copied" } else { "missing" },
        config.build.output.display()
    );
    Ok(summary)
}

/// Remove the output directory and recreate it with its `projects/` subtree.
fn clean_output(config: &SiteConfig) -> Result<()> {
    let paths = config.paths();
    let output = paths.root();

    if output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }

    let projects = paths.projects_dir();
    fs::create_dir_all(&projects)
        .with_context(|| format!("Failed to create {}", projects.display()))
}

/// Copy the resume asset into the output root, if it exists.
fn copy_resume(config: &SiteConfig) -> bool {
    let source = config.resume_source();
    let dest = config.paths().root().join(&config.build.resume);

    match fs::copy(&source, &dest) {
        Ok(_) => {
            log!("copy"; "{}", config.build.resume);
            true
        }
        Err(err) => {
            log!("warn"; "{} not copied: {err}", source.display());
            false
        }
    }
}
