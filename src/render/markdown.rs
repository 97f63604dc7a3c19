//! Markdown changelog renderer

use std::fmt::Write;

use tracing::{debug, instrument};

use super::{separate, ChangelogRenderer};
use crate::domain::Release;
use crate::error::RenderError;

/// Markdown renderer.
///
/// The whole changelog uses `##` per release and `###` per category. A
/// single release drops its own heading and puts categories at `#`.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        MarkdownRenderer
    }

    /// Summary followed by the categories of one release
    #[instrument(skip(self, release), fields(version = %release.version))]
    pub fn render_release(&self, release: &Release) -> Result<String, RenderError> {
        let mut output = String::new();
        write_summary(&mut output, release)?;
        write_sections(&mut output, release, "#")?;
        debug!(output_len = output.len(), "markdown release rendered");
        Ok(output)
    }

    /// Categories of one release, without summary
    #[instrument(skip(self, release), fields(version = %release.version))]
    pub fn render_description(&self, release: &Release) -> Result<String, RenderError> {
        let mut output = String::new();
        write_sections(&mut output, release, "#")?;
        Ok(output)
    }
}

impl ChangelogRenderer for MarkdownRenderer {
    #[instrument(skip(self, releases), fields(release_count = releases.len()))]
    fn render(&self, releases: &[Release]) -> Result<String, RenderError> {
        let mut output = String::from("# Changelog\n");

        for release in releases {
            separate(&mut output);
            writeln!(output, "## Release {} ({})", release.version, release.date)?;
            write_summary(&mut output, release)?;
            write_sections(&mut output, release, "###")?;
        }

        debug!(output_len = output.len(), "markdown changelog rendered");
        Ok(output)
    }
}

fn write_summary(output: &mut String, release: &Release) -> std::fmt::Result {
    let summary = release.summary.trim_end();
    if summary.is_empty() {
        return Ok(());
    }
    separate(output);
    writeln!(output, "{}", summary)
}

fn write_sections(output: &mut String, release: &Release, heading: &str) -> std::fmt::Result {
    for (category, entries) in release.sections() {
        separate(output);
        writeln!(output, "{} {}", heading, category)?;
        output.push('\n');
        for entry in entries {
            writeln!(output, "- {}", entry)?;
        }
    }
    Ok(())
}
