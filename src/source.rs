//! Locating and reading the changelog document.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::boundary::BoundaryWarning;
use crate::error::ReadError;

/// Where the document should come from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    /// Explicit file path
    File(PathBuf),
    /// Piped standard input, else a changelog file in the working directory
    #[default]
    Auto,
}

/// Where the document actually came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Stdin,
    File(PathBuf),
}

/// Raw document with the warnings raised while locating it
#[derive(Debug)]
pub struct SourceDocument {
    pub origin: Origin,
    pub bytes: Vec<u8>,
    pub warnings: Vec<BoundaryWarning>,
}

fn filename_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?i)^change(-|_)?log(\.yml|\.yaml)?$").ok())
        .as_ref()
}

/// Whether a file name looks like a changelog (`CHANGELOG.yml`, `change-log`, ...)
pub fn is_changelog_name(name: &str) -> bool {
    filename_pattern().is_some_and(|re| re.is_match(name))
}

/// Finds the changelog file in a directory.
///
/// When several files match, the first one in name order wins and the
/// others are reported as a warning.
pub fn find_changelog_in(dir: &Path) -> Result<(PathBuf, Vec<BoundaryWarning>), ReadError> {
    let list_error = |source| ReadError::ListDir {
        dir: dir.to_path_buf(),
        source,
    };

    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_error)? {
        let entry = entry.map_err(list_error)?;
        let is_file = entry.file_type().map(|t| !t.is_dir()).unwrap_or(false);
        if let Some(name) = entry.file_name().to_str() {
            if is_file && is_changelog_name(name) {
                candidates.push(name.to_string());
            }
        }
    }
    candidates.sort();

    let mut candidates = candidates.into_iter();
    let chosen = candidates.next().ok_or_else(|| ReadError::NoChangelogFound {
        dir: dir.to_path_buf(),
    })?;
    let ignored: Vec<String> = candidates.collect();

    let mut warnings = Vec::new();
    if !ignored.is_empty() {
        warnings.push(BoundaryWarning::AmbiguousChangelog {
            chosen: chosen.clone(),
            ignored,
        });
    }
    debug!(file = %chosen, "changelog file found");
    Ok((dir.join(chosen), warnings))
}

fn read_file(path: &Path) -> Result<Vec<u8>, ReadError> {
    fs::read(path).map_err(|source| ReadError::File {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the document for an input source.
///
/// `piped` is the standard input stream when it is not a terminal; empty
/// piped input falls back to searching `dir`.
pub fn resolve_source(
    source: &InputSource,
    piped: Option<&mut dyn Read>,
    dir: &Path,
) -> Result<SourceDocument, ReadError> {
    if let InputSource::File(path) = source {
        return Ok(SourceDocument {
            origin: Origin::File(path.clone()),
            bytes: read_file(path)?,
            warnings: Vec::new(),
        });
    }

    let mut warnings = Vec::new();
    if let Some(stdin) = piped {
        let mut bytes = Vec::new();
        stdin.read_to_end(&mut bytes).map_err(ReadError::Stdin)?;
        if !bytes.is_empty() {
            debug!(bytes = bytes.len(), "changelog read from standard input");
            return Ok(SourceDocument {
                origin: Origin::Stdin,
                bytes,
                warnings,
            });
        }
        warnings.push(BoundaryWarning::EmptyPipedInput);
    }

    let (path, found_warnings) = find_changelog_in(dir)?;
    warnings.extend(found_warnings);
    Ok(SourceDocument {
        origin: Origin::File(path.clone()),
        bytes: read_file(&path)?,
        warnings,
    })
}

/// Reads the document from the process environment: standard input when
/// it is piped, otherwise the current directory.
pub fn read_source(source: &InputSource) -> Result<SourceDocument, ReadError> {
    let stdin = io::stdin();
    let is_piped = matches!(source, InputSource::Auto) && !stdin.is_terminal();
    let mut handle = stdin.lock();
    let piped: Option<&mut dyn Read> = if is_piped { Some(&mut handle) } else { None };
    resolve_source(source, piped, Path::new("."))
}
