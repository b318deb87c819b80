//! Content discovery.
//!
//! # Sources
//!
//! | Directory   | Kind    | Output                      |
//! |-------------|---------|-----------------------------|
//! | `content/`  | Post    | `dist/<name>.html`          |
//! | `projects/` | Project | `dist/projects/<name>.html` |
//!
//! Only top-level `*.md` files are read. A missing directory contributes no
//! pages; an unreadable file, malformed front matter, or a post named after a
//! listing page (`index`, `projects`, `links`, `resume`) aborts discovery.

mod front_matter;
pub mod meta;
mod page;

pub use front_matter::{parse as parse_front_matter, split as split_front_matter};
pub use page::{Page, PageKind, Pages};

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Content parsing errors
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Invalid front matter in `{0}`")]
    FrontMatter(PathBuf, #[source] serde_yaml::Error),

    #[error("`{0}` would overwrite the generated `{1}`; rename the file")]
    ReservedName(PathBuf, PathBuf),
}

/// Read every post and project source into [`Pages`].
pub fn discover(config: &SiteConfig) -> Result<Pages> {
    let sources = [
        (PageKind::Post, config.build.content.as_path()),
        (PageKind::Project, config.build.projects.as_path()),
    ];

    let mut pages = Pages::default();
    for (kind, dir) in sources {
        for path in markdown_files(dir) {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            pages
                .items
                .push(Page::parse(kind, path, &text, config.paths())?);
        }
    }

    log!("content"; "found {} pages", pages.len());
    Ok(pages)
}

/// `*.md` files directly inside `dir`, sorted by file name.
fn markdown_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => {
            log!("content"; "{} not found, skipping", dir.display());
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension() == Some(OsStr::new("md")) && path.is_file())
        .collect();
    files.sort();
    files
}
