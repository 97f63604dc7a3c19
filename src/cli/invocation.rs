//! Splitting raw command-line tokens into shift, command and arguments.

use crate::domain::Release;
use crate::error::SelectionError;
use crate::selector::Shift;

/// A parsed command line: `[next | -N] <command> [args...]`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    /// Releases to skip before running the command
    pub shift: Shift,
    /// The shift token as typed, kept for error messages
    pub shift_token: Option<String>,
    /// Command name, `None` when only options (or nothing) were given
    pub command: Option<String>,
    /// Remaining tokens after the command name
    pub args: Vec<String>,
}

impl Invocation {
    /// Parses the positional tokens of the command line.
    ///
    /// A leading `next` or `-N` is taken as a shift; a malformed `-N` fails
    /// with [`SelectionError::InvalidShift`].
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, SelectionError> {
        let mut tokens = tokens.iter().map(|t| t.as_ref().to_string());
        let mut invocation = Invocation::default();

        let mut first = tokens.next();
        if let Some(token) = first.as_deref() {
            if let Some(shift) = Shift::parse(token) {
                invocation.shift = shift?;
                invocation.shift_token = first.take();
                first = tokens.next();
            }
        }

        invocation.command = first;
        invocation.args = tokens.collect();
        Ok(invocation)
    }

    /// Narrows the releases a command will see
    pub fn select<'a>(&self, releases: &'a [Release]) -> Result<&'a [Release], SelectionError> {
        match &self.shift_token {
            Some(token) => self.shift.apply(releases, token),
            None => Ok(releases),
        }
    }
}
