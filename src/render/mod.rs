//! Changelog renderers

mod html;
mod markdown;
pub mod stylesheet;

pub use html::{HtmlRenderer, DEFAULT_TITLE};
pub use markdown::MarkdownRenderer;

use crate::domain::Release;
use crate::error::RenderError;

/// Trait for renderers of a whole changelog
pub trait ChangelogRenderer {
    /// Render newest-first releases to a complete document
    fn render(&self, releases: &[Release]) -> Result<String, RenderError>;
}

/// Emits a blank line between blocks, never before the first one
fn separate(out: &mut String) {
    if !out.is_empty() {
        out.push('\n');
    }
}
