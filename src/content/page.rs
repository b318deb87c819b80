//! Discovered content pages.

use super::{ContentError, front_matter, meta::FrontMatter};
use crate::config::OutputPaths;
use std::path::{Path, PathBuf};

/// Which source directory a page came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Post,
    Project,
}

/// One markdown source, parsed and placed in the output tree.
///
/// | Field | Example |
/// |-------|---------|
/// | `source_path` | `projects/tracer.md` |
/// | `output_path` | `dist/projects/tracer.html` |
/// | `title` | front matter `title`, first `# ` heading, or `tracer` |
#[derive(Debug, Clone)]
pub struct Page {
    pub kind: PageKind,
    pub output_path: PathBuf,
    pub source_path: PathBuf,
    pub meta: FrontMatter,
    /// Markdown with the front matter removed.
    pub body: String,
    pub title: String,
}

impl Page {
    /// Parse a source document already read from `source_path`.
    pub fn parse(
        kind: PageKind,
        source_path: PathBuf,
        text: &str,
        paths: OutputPaths<'_>,
    ) -> Result<Self, ContentError> {
        let (yaml, body) = front_matter::split(text);
        let meta: FrontMatter = front_matter::parse(yaml)
            .map_err(|err| ContentError::FrontMatter(source_path.clone(), err))?;

        let stem = file_stem(&source_path);
        let output_path = match kind {
            PageKind::Post => paths.post_page(&stem),
            PageKind::Project => paths.project_page(&stem),
        };
        if paths.listings().contains(&output_path) {
            return Err(ContentError::ReservedName(source_path, output_path));
        }
        let title = derive_title(&meta, body, &stem);

        Ok(Self {
            kind,
            output_path,
            source_path,
            meta,
            body: body.to_owned(),
            title,
        })
    }
}

/// Pages of one build, in discovery order.
#[derive(Debug, Default)]
pub struct Pages {
    pub items: Vec<Page>,
}

impl Pages {
    pub fn posts(&self) -> impl Iterator<Item = &Page> {
        self.of_kind(PageKind::Post)
    }

    pub fn projects(&self) -> impl Iterator<Item = &Page> {
        self.of_kind(PageKind::Project)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    fn of_kind(&self, kind: PageKind) -> impl Iterator<Item = &Page> {
        self.items.iter().filter(move |page| page.kind == kind)
    }
}

/// Front matter `title`, else the first `# ` heading, else the file stem.
fn derive_title(meta: &FrontMatter, body: &str, stem: &str) -> String {
    if let Some(title) = meta.title.as_deref().filter(|t| !t.is_empty()) {
        return title.to_owned();
    }

    body.lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
        .filter(|heading| !heading.is_empty())
        .unwrap_or(stem)
        .to_owned()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
