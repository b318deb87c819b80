//! Utility modules for the static site generator.

pub mod html;
pub mod minify;
pub mod path;
