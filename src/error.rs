use std::path::PathBuf;

use thiserror::Error;

/// Exit code for failures while reading input or configuration
pub const EXIT_READING: i32 = 1;
/// Exit code for documents that cannot be decoded
pub const EXIT_PARSING: i32 = 2;
/// Exit code for invalid release metadata
pub const EXIT_RELEASE: i32 = 3;
/// Exit code for failures while rendering a changelog
pub const EXIT_TRANSFORM: i32 = 4;

/// Unified error type for changelog operations
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Error reading changelog: {0}")]
    Read(#[from] ReadError),

    #[error("Error parsing changelog: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid release: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Selection(#[from] SelectionError),

    #[error("{0}")]
    Dispatch(#[from] DispatchError),

    #[error("Error rendering changelog: {0}")]
    Render(#[from] RenderError),

    #[error("Release date {found} is wrong (should be {expected})")]
    DateMismatch { found: String, expected: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }

    /// Process exit code conventionally associated with this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            ChangelogError::Read(_)
            | ChangelogError::Selection(_)
            | ChangelogError::Config(_)
            | ChangelogError::Io(_) => EXIT_READING,
            ChangelogError::Parse(_) => EXIT_PARSING,
            ChangelogError::Validation(_) | ChangelogError::DateMismatch { .. } => EXIT_RELEASE,
            ChangelogError::Dispatch(err) => err.exit_code(),
            ChangelogError::Render(_) => EXIT_TRANSFORM,
        }
    }
}

/// Failures while locating or reading the changelog document
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("no changelog file found in '{}'", dir.display())]
    NoChangelogFound { dir: PathBuf },

    #[error("could not list directory '{}': {source}", dir.display())]
    ListDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read standard input: {0}")]
    Stdin(#[source] std::io::Error),
}

/// The document did not decode into a sequence of releases
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    /// Text of the underlying decode error
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_yaml::Error> for ParseError {
    fn from(err: serde_yaml::Error) -> Self {
        ParseError {
            message: err.to_string(),
        }
    }
}

/// Release metadata violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("changelog contains no release")]
    EmptyChangelog,

    #[error("release version is empty")]
    EmptyVersion,

    #[error("release version '{0}' is not a valid semantic version number")]
    InvalidVersion(String),

    #[error("release date is empty")]
    EmptyDate,

    #[error("release date '{0}' is not in ISO format (YYYY-MM-DD)")]
    InvalidDate(String),

    /// A release-level violation located in the changelog
    #[error("release #{index} ({version}): {reason}")]
    InRelease {
        index: usize,
        version: String,
        reason: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Underlying violation, unwrapping any positional context
    pub fn reason(&self) -> &ValidationError {
        match self {
            ValidationError::InRelease { reason, .. } => reason.reason(),
            other => other,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Bad shift '{token}'")]
    InvalidShift { token: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Command '{0}' unknown")]
    UnknownCommand(String),

    #[error("Unknown release argument '{0}'")]
    UnknownReleaseArg(String),

    #[error("Unknown format '{0}'")]
    UnknownFormat(String),

    #[error("You must pass a format to transform to (html or markdown)")]
    MissingFormat,
}

impl DispatchError {
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::UnknownCommand(_) => EXIT_READING,
            DispatchError::UnknownReleaseArg(_) => EXIT_RELEASE,
            DispatchError::UnknownFormat(_) | DispatchError::MissingFormat => EXIT_TRANSFORM,
        }
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("loading stylesheet '{}': {source}", path.display())]
    StylesheetLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("processing template: {0}")]
    Template(#[from] std::fmt::Error),
}
