//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "content".into()
    }

    pub fn projects() -> PathBuf {
        "projects".into()
    }

    pub fn output() -> PathBuf {
        "dist".into()
    }

    pub fn template() -> PathBuf {
        "template.html".into()
    }

    pub fn links() -> PathBuf {
        "links.md".into()
    }

    pub fn resume() -> String {
        "resume.pdf".into()
    }
}
