//! Relative release selection (`next`, `-N`).

use tracing::debug;

use crate::domain::Release;
use crate::error::SelectionError;

/// Token equivalent to a shift of one release
pub const NEXT_TOKEN: &str = "next";

/// Number of most recent releases to skip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shift(pub usize);

impl Shift {
    /// Parses `next` or `-N`.
    ///
    /// Returns `None` when the token is not a shift at all, and an error when
    /// it looks like one but N is not a non-negative integer.
    pub fn parse(token: &str) -> Option<Result<Shift, SelectionError>> {
        if token == NEXT_TOKEN {
            return Some(Ok(Shift(1)));
        }
        let amount = token.strip_prefix('-')?;
        let invalid = || SelectionError::InvalidShift {
            token: token.to_string(),
        };
        if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
            return Some(Err(invalid()));
        }
        Some(amount.parse::<usize>().map(Shift).map_err(|_| invalid()))
    }

    /// Narrows a newest-first release slice, dropping the first N releases.
    ///
    /// Fails when N is not smaller than the number of releases, so the
    /// resulting view always has a latest release.
    pub fn apply<'a>(
        &self,
        releases: &'a [Release],
        token: &str,
    ) -> Result<&'a [Release], SelectionError> {
        if self.0 >= releases.len() {
            return Err(SelectionError::InvalidShift {
                token: token.to_string(),
            });
        }
        debug!(shift = self.0, remaining = releases.len() - self.0, "releases shifted");
        Ok(&releases[self.0..])
    }
}
