//! Output tree layout.
//!
//! Single source of truth for where every generated file lands.
//!
//! ```text
//! dist/
//!  ├── index.html          post index
//!  ├── projects.html       project grid
//!  ├── links.html          links directory (optional)
//!  ├── resume.html         resume viewer
//!  ├── <post>.html
//!  └── projects/
//!       └── <project>.html
//! ```

use std::path::{Path, PathBuf};

pub const INDEX_HTML: &str = "index.html";
pub const PROJECTS_HTML: &str = "projects.html";
pub const LINKS_HTML: &str = "links.html";
pub const RESUME_HTML: &str = "resume.html";
pub const PROJECTS_DIR: &str = "projects";

/// Resolves output file locations relative to the output root.
#[derive(Debug, Clone, Copy)]
pub struct OutputPaths<'a> {
    output: &'a Path,
}

impl<'a> OutputPaths<'a> {
    #[inline]
    pub const fn new(output: &'a Path) -> Self {
        Self { output }
    }

    #[inline]
    pub const fn root(&self) -> &Path {
        self.output
    }

    pub fn index(&self) -> PathBuf {
        self.output.join(INDEX_HTML)
    }

    pub fn projects(&self) -> PathBuf {
        self.output.join(PROJECTS_HTML)
    }

    pub fn links(&self) -> PathBuf {
        self.output.join(LINKS_HTML)
    }

    pub fn resume(&self) -> PathBuf {
        self.output.join(RESUME_HTML)
    }

    /// Every generated listing page, in the order they are written.
    pub fn listings(&self) -> [PathBuf; 4] {
        [self.projects(), self.index(), self.links(), self.resume()]
    }

    /// Directory holding rendered project pages.
    pub fn projects_dir(&self) -> PathBuf {
        self.output.join(PROJECTS_DIR)
    }

    /// `<output>/<stem>.html`
    pub fn post_page(&self, stem: &str) -> PathBuf {
        self.output.join(format!("{stem}.html"))
    }

    /// `<output>/projects/<stem>.html`
    pub fn project_page(&self, stem: &str) -> PathBuf {
        self.projects_dir().join(format!("{stem}.html"))
    }
}
