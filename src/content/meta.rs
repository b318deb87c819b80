//! Typed front matter records.
//!
//! Every recognized key has an explicit default; unrecognized keys of a page
//! are kept in [`FrontMatter::extra`] and never consulted by the pipeline.

use super::front_matter::nullable;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Front matter of a post or project source.
///
/// ```yaml
/// title: Ray Tracer
/// description: A weekend ray tracer
/// tags: [rust, graphics]
/// codeSnippet: |
///   fn main() { trace(); }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "nullable")]
    pub title: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<String>,
    #[serde(rename = "codeSnippet", deserialize_with = "nullable")]
    pub code_snippet: Option<String>,
    #[serde(flatten)]
    #[allow(dead_code)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Front matter of `links.md`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LinksFile {
    #[serde(deserialize_with = "nullable")]
    pub links: Vec<LinkEntry>,
}

/// One external link card.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LinkEntry {
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    /// Raw HTML (usually an inline SVG or an emoji).
    #[serde(deserialize_with = "nullable")]
    pub icon: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::front_matter::parse;

    #[test]
    fn test_front_matter_recognized_keys() {
        let meta: FrontMatter = parse(Some(
            "title: B\ndescription: desc\ntags: [x, y]\ncodeSnippet: \"fn a() {}\"\n",
        ))
        .unwrap();
        assert_eq!(meta.title.as_deref(), Some("B"));
        assert_eq!(meta.description.as_deref(), Some("desc"));
        assert_eq!(meta.tags, vec!["x", "y"]);
        assert_eq!(meta.code_snippet.as_deref(), Some("fn a() {}"));
        assert!(meta.extra.is_empty());
    }

    #[test]
    fn test_front_matter_defaults() {
        let meta: FrontMatter = parse(Some("draft: true")).unwrap();
        assert!(meta.title.is_none());
        assert!(meta.description.is_none());
        assert!(meta.tags.is_empty());
        assert!(meta.code_snippet.is_none());
    }

    #[test]
    fn test_front_matter_keeps_unknown_keys() {
        let meta: FrontMatter = parse(Some("title: A\ndate: 2024-01-02\nweight: 3")).unwrap();
        assert_eq!(meta.extra.len(), 2);
        assert!(meta.extra.contains_key("date"));
        assert_eq!(meta.extra["weight"].as_u64(), Some(3));
    }

    #[test]
    fn test_front_matter_null_values() {
        let meta: FrontMatter = parse(Some("title:\ntags:\n")).unwrap();
        assert!(meta.title.is_none());
        assert!(meta.tags.is_empty());
    }

    #[test]
    fn test_links_file() {
        let links: LinksFile = parse(Some(
            "links:\n  - title: GitHub\n    url: https://github.com\n    icon: \"<svg/>\"\n    description: code\n  - title: Blog\n",
        ))
        .unwrap();
        assert_eq!(links.links.len(), 2);
        assert_eq!(links.links[0].url, "https://github.com");
        assert_eq!(links.links[0].icon, "<svg/>");
        assert_eq!(links.links[1].title, "Blog");
        assert_eq!(links.links[1].url, "");
    }

    #[test]
    fn test_links_file_without_links_key() {
        let links: LinksFile = parse(Some("title: Links")).unwrap();
        assert!(links.links.is_empty());
    }
}
