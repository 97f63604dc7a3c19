use std::ops::Deref;

use super::Release;

/// Ordered releases, newest first.
///
/// Immutable once parsed; narrowing to older releases is done on borrowed
/// slices (see [`crate::selector::Shift`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changelog {
    releases: Vec<Release>,
}

impl Changelog {
    pub fn new(releases: Vec<Release>) -> Self {
        Changelog { releases }
    }
}

impl Deref for Changelog {
    type Target = [Release];

    fn deref(&self) -> &[Release] {
        &self.releases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derefs_to_releases_newest_first() {
        let changelog = Changelog::new(vec![
            Release::new("2.0.0", "2024-02-01"),
            Release::new("1.0.0", "2024-01-01"),
        ]);
        assert_eq!(changelog.first().map(|r| r.version.as_str()), Some("2.0.0"));
        assert_eq!(changelog.len(), 2);
    }

    #[test]
    fn test_empty_changelog_has_no_releases() {
        assert!(Changelog::default().first().is_none());
        assert!(Changelog::default().is_empty());
    }
}
