//! Stylesheets embedded in HTML output.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::RenderError;

/// Argument selecting [`DEFAULT_STYLESHEET`] instead of a file
pub const DEFAULT_STYLESHEET_TOKEN: &str = "style";

/// Built-in stylesheet
pub const DEFAULT_STYLESHEET: &str = r#"
body {
  font-family: Helvetica, Arial, sans-serif;
  font-size: 16px;
  line-height: 1.5;
  color: #333333;
  background-color: #ffffff;
  max-width: 860px;
  margin: 0 auto;
  padding: 30px;
}

h1, h2, h3 {
  font-weight: bold;
  color: #000000;
  margin: 24px 0 12px;
}

h1 {
  font-size: 32px;
  margin-top: 0;
}

h2 {
  font-size: 26px;
  border-bottom: 1px solid #cccccc;
  padding-bottom: 4px;
}

h3 {
  font-size: 19px;
}

p, ul {
  margin: 12px 0;
}

ul {
  padding-left: 30px;
}

li {
  margin: 4px 0;
}

code {
  font-family: Consolas, "Liberation Mono", Courier, monospace;
  font-size: 14px;
  background-color: #f8f8f8;
  border: 1px solid #eaeaea;
  border-radius: 3px;
  padding: 0 4px;
}

a {
  color: #4183c4;
  text-decoration: none;
}
"#;

/// Loads one stylesheet argument: the built-in one for `style`, a file otherwise
pub fn load_stylesheet(argument: &str) -> Result<String, RenderError> {
    if argument == DEFAULT_STYLESHEET_TOKEN {
        return Ok(DEFAULT_STYLESHEET.to_string());
    }

    let path = Path::new(argument);
    let content = fs::read_to_string(path).map_err(|source| RenderError::StylesheetLoad {
        path: PathBuf::from(path),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "stylesheet loaded");
    Ok(content)
}

/// Loads stylesheet arguments in order, failing on the first unreadable file
pub fn load_stylesheets<S: AsRef<str>>(arguments: &[S]) -> Result<Vec<String>, RenderError> {
    arguments
        .iter()
        .map(|argument| load_stylesheet(argument.as_ref()))
        .collect()
}
