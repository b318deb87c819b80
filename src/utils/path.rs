//! Relative link computation between files in the output tree.
//!
//! Links are always `/`-separated, whatever the host path convention.

use std::path::{Component, Path};

/// Path from directory `from_dir` to `to`, as a `/`-joined link.
///
/// Both paths must share the same base (both absolute, or both relative to
/// the same directory). Returns an empty string when they are equal.
///
/// # Examples
///
/// ```ignore
/// relative_path(Path::new("dist"), Path::new("dist/a.html"))            // "a.html"
/// relative_path(Path::new("dist/projects"), Path::new("dist/index.html")) // "../index.html"
/// relative_path(Path::new("dist"), Path::new("dist"))                    // ""
/// ```
pub fn relative_path(from_dir: &Path, to: &Path) -> String {
    let from: Vec<Component> = significant(from_dir).collect();
    let to: Vec<Component> = significant(to).collect();

    let common = from
        .iter()
        .zip(&to)
        .take_while(|(a, b)| a == b)
        .count();

    let ups = std::iter::repeat_n("..".to_owned(), from.len() - common);
    let remaining = to[common..]
        .iter()
        .map(|c| c.as_os_str().to_string_lossy().into_owned());

    ups.chain(remaining).collect::<Vec<_>>().join("/")
}

/// Link from the page written at `from_file` to `to`.
pub fn relative_href(from_file: &Path, to: &Path) -> String {
    relative_path(from_file.parent().unwrap_or(Path::new("")), to)
}

/// Components that affect location (`.` is dropped).
fn significant(path: &Path) -> impl Iterator<Item = Component<'_>> {
    path.components().filter(|c| !matches!(c, Component::CurDir))
}
