//! Site configuration management for `site.toml`.
//!
//! The file is optional: without it every setting takes the default layout
//! (`content/`, `projects/`, `template.html`, `links.md` → `dist/`).
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"
//! resume = "Resume.pdf"
//! minify = true
//! ```

mod build;
pub mod defaults;
mod error;
pub mod paths;

use build::BuildConfig;
use error::ConfigError;
pub use paths::OutputPaths;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Component, Path, PathBuf},
};

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Output tree layout under `[build.output]`.
    pub fn paths(&self) -> OutputPaths<'_> {
        OutputPaths::new(&self.build.output)
    }

    /// Location of the resume asset in the project root.
    pub fn resume_source(&self) -> PathBuf {
        self.get_root().join(&self.build.resume)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());
        self.update_path_with_root(&root, &cli.config);
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, config: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(config));

        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.projects = Self::normalize_path(&root.join(&self.build.projects));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.template = Self::normalize_path(&root.join(&self.build.template));
        self.build.links = Self::normalize_path(&root.join(&self.build.links));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Reject layouts where wiping the output would destroy inputs.
    pub fn validate(&self) -> Result<()> {
        let output = &self.build.output;
        let resume = self.resume_source();
        let protected = [
            ("[build.root]", self.get_root()),
            ("[build.content]", self.build.content.as_path()),
            ("[build.projects]", self.build.projects.as_path()),
            ("[build.template]", self.build.template.as_path()),
            ("[build.links]", self.build.links.as_path()),
            ("[build.resume]", resume.as_path()),
        ];

        for (key, path) in protected {
            if path.starts_with(output) {
                bail!(ConfigError::Validation(format!(
                    "[build.output] would delete {key} `{}` when cleaned",
                    path.display()
                )));
            }
        }

        let mut components = Path::new(&self.build.resume).components();
        if !matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) {
            bail!(ConfigError::Validation(
                "[build.resume] must be a bare file name".into()
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn resolved(toml: &str, root: &Path) -> SiteConfig {
        let mut config = SiteConfig::from_str(toml).unwrap();
        let cli = Cli::parse_from(["quire", "--root", root.to_str().unwrap()]);
        config.update_with_cli(&cli);
        config
    }

    #[test]
    fn test_from_str_empty() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config.build.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let err = SiteConfig::from_str("[build\noutput = ").unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        assert!(SiteConfig::from_str("[serve]\nport = 5277").is_err());
    }

    #[test]
    fn test_from_path_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteConfig::from_path(&dir.path().join("site.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(..))
        ));
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new("./"));
    }

    #[test]
    fn test_update_with_cli_joins_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        let config = resolved("", &root);

        assert_eq!(config.get_root(), root.as_path());
        assert_eq!(config.config_path, root.join("site.toml"));
        assert_eq!(config.build.content, root.join("content"));
        assert_eq!(config.build.projects, root.join("projects"));
        assert_eq!(config.build.output, root.join("dist"));
        assert_eq!(config.build.template, root.join("template.html"));
        assert_eq!(config.build.links, root.join("links.md"));
        assert_eq!(config.resume_source(), root.join("resume.pdf"));
        assert_eq!(config.paths().index(), root.join("dist").join("index.html"));
    }

    #[test]
    fn test_validate_default_layout() {
        let dir = tempfile::tempdir().unwrap();
        let config = resolved("", dir.path());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_output_is_root() {
        let dir = tempfile::tempdir().unwrap();
        let config = resolved("[build]\noutput = \".\"", dir.path());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_output_is_source() {
        let dir = tempfile::tempdir().unwrap();
        let config = resolved("[build]\noutput = \"content\"", dir.path());
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("[build.content]"));
    }

    #[test]
    fn test_validate_links_inside_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = resolved("[build]\nlinks = \"dist/links.md\"", dir.path());
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("[build.links]"));
    }

    #[test]
    fn test_validate_resume_inside_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = resolved("[build]\noutput = \"resume.pdf\"", dir.path());
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("[build.resume]"));
    }

    #[test]
    fn test_validate_resume_must_be_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let config = resolved("[build]\nresume = \"docs/cv.pdf\"", dir.path());
        assert!(config.validate().is_err());

        let config = resolved("[build]\nresume = \"cv.pdf\"", dir.path());
        assert!(config.validate().is_ok());
    }
}
