//! Resume viewer (`resume.html`).
//!
//! Always written; the embedded file may be missing from the output.

use crate::{compiler::write_html, config::SiteConfig, log, template::Template};
use anyhow::Result;

pub fn build_resume_page(template: &Template, config: &SiteConfig) -> Result<()> {
    let output = config.paths().resume();
    let content = resume_content(&config.build.resume);
    write_html(&output, &template.render(&content, &output), config)?;
    log!("list"; "resume page");
    Ok(())
}

fn resume_content(resume: &str) -> String {
    format!(
        r#"
        <h1 class="page-title">Resume</h1>
        <div class="resume-container">
            <iframe src="./{resume}" width="100%" height="100%"></iframe>
        </div>
    "#
    )
}
