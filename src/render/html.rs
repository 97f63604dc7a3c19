//! HTML changelog renderer

use std::fmt::Write;

use tracing::{debug, instrument};

use super::ChangelogRenderer;
use crate::domain::Release;
use crate::error::RenderError;

/// Default document title and top-level heading
pub const DEFAULT_TITLE: &str = "Changelog";

/// HTML document renderer.
///
/// Entry text is written as-is so that inline markup in entries is kept.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    /// Document title and `<h1>` text
    pub title: String,
    /// Stylesheet contents, each embedded in its own `<style>` element
    pub stylesheets: Vec<String>,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        HtmlRenderer {
            title: DEFAULT_TITLE.to_string(),
            stylesheets: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_stylesheets(mut self, stylesheets: Vec<String>) -> Self {
        self.stylesheets = stylesheets;
        self
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogRenderer for HtmlRenderer {
    #[instrument(
        skip(self, releases),
        fields(release_count = releases.len(), stylesheet_count = self.stylesheets.len())
    )]
    fn render(&self, releases: &[Release]) -> Result<String, RenderError> {
        let mut output = String::new();

        writeln!(output, "<!DOCTYPE html>")?;
        writeln!(output, "<html>")?;
        writeln!(output, "<head>")?;
        writeln!(output, "<title>{}</title>", self.title)?;
        writeln!(output, "<meta charset=\"utf-8\">")?;
        for stylesheet in &self.stylesheets {
            writeln!(output, "<style type=\"text/css\">")?;
            writeln!(output, "{}", stylesheet.trim_matches('\n'))?;
            writeln!(output, "</style>")?;
        }
        writeln!(output, "</head>")?;
        writeln!(output, "<body>")?;
        writeln!(output, "<h1>{}</h1>", self.title)?;

        for release in releases {
            writeln!(output, "<h2>Release {} ({})</h2>", release.version, release.date)?;
            let summary = release.summary.trim_end();
            if !summary.is_empty() {
                writeln!(output, "<p>{}</p>", summary)?;
            }
            for (category, entries) in release.sections() {
                writeln!(output, "<h3>{}</h3>", category)?;
                writeln!(output, "<ul>")?;
                for entry in entries {
                    writeln!(output, "<li>{}</li>", entry)?;
                }
                writeln!(output, "</ul>")?;
            }
        }

        writeln!(output, "</body>")?;
        writeln!(output, "</html>")?;

        debug!(output_len = output.len(), "html changelog rendered");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn releases() -> Vec<Release> {
        vec![
            Release::new("1.1.0", "2024-02-01")
                .with_summary("Second")
                .with_entry(Category::Security, "Patched <code>eval</code>"),
            Release::new("1.0.0", "2024-01-01")
                .with_summary("First")
                .with_entry(Category::Added, "Thing A")
                .with_entry(Category::Added, "Thing B"),
        ]
    }

    #[test]
    fn test_render_document() {
        let output = HtmlRenderer::new().render(&releases()).unwrap();

        assert!(output.starts_with("<!DOCTYPE html>\n<html>\n<head>\n<title>Changelog</title>"));
        assert!(output.ends_with("</body>\n</html>\n"));
        assert!(output.contains("<h2>Release 1.1.0 (2024-02-01)</h2>\n<p>Second</p>"));
        assert!(output.contains("<h3>Added</h3>\n<ul>\n<li>Thing A</li>\n<li>Thing B</li>\n</ul>"));
        assert!(output.contains("<li>Patched <code>eval</code></li>"));
        assert!(!output.contains("<h3>Changed</h3>"));
        assert!(!output.contains("<style"));
    }

    #[test]
    fn test_releases_keep_order() {
        let output = HtmlRenderer::new().render(&releases()).unwrap();
        let newer = output.find("Release 1.1.0").unwrap();
        let older = output.find("Release 1.0.0").unwrap();
        assert!(newer < older);
    }

    #[test]
    fn test_stylesheets_and_title() {
        let output = HtmlRenderer::new()
            .with_title("History")
            .with_stylesheets(vec!["a { }".to_string(), "\nb { }\n".to_string()])
            .render(&releases())
            .unwrap();

        assert!(output.contains("<title>History</title>"));
        assert!(output.contains("<h1>History</h1>"));
        assert!(output.contains("<style type=\"text/css\">\na { }\n</style>\n<style type=\"text/css\">\nb { }\n</style>"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let renderer = HtmlRenderer::new().with_stylesheets(vec!["p { }".to_string()]);
        assert_eq!(
            renderer.render(&releases()).unwrap(),
            renderer.render(&releases()).unwrap()
        );
    }
}
