//! Command-line interface definitions.
//!
//! Running `quire` with no arguments builds the site rooted at the current
//! directory. Both options only relocate inputs; they never change what is built.

use clap::Parser;
use std::path::PathBuf;

/// Quire static site generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project root containing `content/`, `projects/` and `template.html`
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name, relative to root (optional, defaults apply if missing)
    #[arg(short = 'C', long, default_value = "site.toml")]
    pub config: PathBuf,
}
