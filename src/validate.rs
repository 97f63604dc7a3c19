//! Release metadata checks.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::Release;
use crate::error::ValidationError;

fn version_pattern() -> Option<&'static Regex> {
    const VERSION: &str = r"^[0-9]+(\.[0-9]+)*(-(?i:SNAPSHOT|ALPHA|BETA|RC)(-[0-9]+)?)?$";
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(VERSION).ok()).as_ref()
}

fn date_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").ok())
        .as_ref()
}

/// Whether a string is a release version number.
///
/// Dot-separated integers, optionally followed by `-SNAPSHOT`, `-ALPHA`,
/// `-BETA` or `-RC` (any case), optionally followed by `-<integer>`.
pub fn is_valid_version(version: &str) -> bool {
    version_pattern().is_some_and(|re| re.is_match(version))
}

/// Whether a string has the `YYYY-MM-DD` shape. Calendar validity is not checked.
pub fn is_valid_date(date: &str) -> bool {
    date_pattern().is_some_and(|re| re.is_match(date))
}

/// Checks version and date of a single release
pub fn validate_release(release: &Release) -> Result<(), ValidationError> {
    if release.version.is_empty() {
        return Err(ValidationError::EmptyVersion);
    }
    if !is_valid_version(&release.version) {
        return Err(ValidationError::InvalidVersion(release.version.clone()));
    }
    if release.date.is_empty() {
        return Err(ValidationError::EmptyDate);
    }
    if !is_valid_date(&release.date) {
        return Err(ValidationError::InvalidDate(release.date.clone()));
    }
    Ok(())
}

/// Checks every release, stopping at the first invalid one.
///
/// The error of an invalid release is wrapped in
/// [`ValidationError::InRelease`] with its position and version.
pub fn validate_changelog(releases: &[Release]) -> Result<(), ValidationError> {
    if releases.is_empty() {
        return Err(ValidationError::EmptyChangelog);
    }
    for (index, release) in releases.iter().enumerate() {
        validate_release(release).map_err(|reason| ValidationError::InRelease {
            index,
            version: release.version.clone(),
            reason: Box::new(reason),
        })?;
    }
    Ok(())
}
