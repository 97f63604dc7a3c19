//! Decoding of YAML changelog documents into the document model.

use tracing::{debug, instrument};

use crate::domain::{Changelog, Release};
use crate::error::ParseError;

/// Parses a changelog document.
///
/// The top-level value must be a sequence of release records. Unknown keys
/// are ignored and missing ones default to empty. An empty document, or one
/// holding only `null`, yields an empty changelog.
///
/// # Arguments
/// * `source` - Raw bytes of the document
///
/// # Returns
/// * `Ok(Changelog)` - Releases in document order
/// * `Err(ParseError)` - The document is not a sequence of release records
#[instrument(skip(source), fields(bytes = source.len()))]
pub fn parse_changelog(source: &[u8]) -> Result<Changelog, ParseError> {
    if source.iter().all(u8::is_ascii_whitespace) {
        debug!("empty document");
        return Ok(Changelog::default());
    }

    let releases: Option<Vec<Release>> = serde_yaml::from_slice(source)?;
    let changelog = Changelog::new(releases.unwrap_or_default());
    debug!(releases = changelog.len(), "changelog parsed");
    Ok(changelog)
}
