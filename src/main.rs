//! Quire - a static site generator for a markdown blog and project portfolio.

mod build;
mod cli;
mod compiler;
mod config;
mod content;
mod generator;
mod logger;
mod template;
mod utils;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::Cli;
use config::SiteConfig;
use std::{path::Path, process::ExitCode};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match load_config(&cli).and_then(|config| build_site(&config)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log!("error"; "build failed: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error: the default layout applies.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    if config.config_path.exists() {
        log!("config"; "using {}", config.config_path.display());
    }

    Ok(config)
}
