use std::fmt;

/// Warnings raised while locating the changelog document.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Several files in the directory look like a changelog
    AmbiguousChangelog { chosen: String, ignored: Vec<String> },
    /// Standard input was piped but carried nothing
    EmptyPipedInput,
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::AmbiguousChangelog { chosen, ignored } => {
                write!(
                    f,
                    "Several changelog files found, using '{}' (ignoring {})",
                    chosen,
                    ignored
                        .iter()
                        .map(|name| format!("'{}'", name))
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
            BoundaryWarning::EmptyPipedInput => {
                write!(
                    f,
                    "Standard input is empty, looking for a changelog file instead"
                )
            }
        }
    }
}
