//! Command lookup tables and handlers.

use std::io::Write;

use tracing::{debug, info};

use super::Context;
use crate::domain::Release;
use crate::error::{ChangelogError, DispatchError, Result, ValidationError};
use crate::render::stylesheet::load_stylesheets;
use crate::render::{ChangelogRenderer, HtmlRenderer, MarkdownRenderer};
use crate::validate::validate_changelog;

/// Top-level commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Release,
    To,
}

const COMMANDS: &[(&str, Command)] = &[
    ("help", Command::Help),
    ("release", Command::Release),
    ("to", Command::To),
];

impl Command {
    pub fn lookup(name: &str) -> Option<Command> {
        lookup(COMMANDS, name)
    }

    /// Whether the command needs the changelog document
    pub fn reads_changelog(&self) -> bool {
        !matches!(self, Command::Help)
    }
}

/// Output formats of `to` and `release to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Markdown,
}

const FORMATS: &[(&str, Format)] = &[("html", Format::Html), ("markdown", Format::Markdown)];

impl Format {
    pub fn lookup(name: &str) -> Option<Format> {
        lookup(FORMATS, name)
    }

    /// Resolves the first argument of a transform command
    fn from_args(args: &[String]) -> std::result::Result<Format, DispatchError> {
        let name = args.first().ok_or(DispatchError::MissingFormat)?;
        Format::lookup(name).ok_or_else(|| DispatchError::UnknownFormat(name.clone()))
    }
}

/// What `release` does with the latest release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseQuery {
    Check,
    Summary,
    Date,
    DateCheck,
    Version,
    ToMarkdown,
    Description,
}

const RELEASE_ARGS: &[(&str, ReleaseQuery)] = &[
    ("summary", ReleaseQuery::Summary),
    ("date", ReleaseQuery::Date),
    ("version", ReleaseQuery::Version),
    ("to", ReleaseQuery::ToMarkdown),
    ("description", ReleaseQuery::Description),
];

impl ReleaseQuery {
    /// Resolves the arguments following `release`
    pub fn from_args(args: &[String]) -> std::result::Result<ReleaseQuery, DispatchError> {
        let Some(name) = args.first() else {
            return Ok(ReleaseQuery::Check);
        };
        let query = lookup(RELEASE_ARGS, name)
            .ok_or_else(|| DispatchError::UnknownReleaseArg(name.clone()))?;

        match (query, args.get(1).map(String::as_str)) {
            (ReleaseQuery::Date, Some("check")) => Ok(ReleaseQuery::DateCheck),
            (ReleaseQuery::Date, Some(other)) => {
                Err(DispatchError::UnknownReleaseArg(format!("date {}", other)))
            }
            (ReleaseQuery::ToMarkdown, _) => match Format::from_args(&args[1..])? {
                Format::Markdown => Ok(ReleaseQuery::ToMarkdown),
                Format::Html => Err(DispatchError::UnknownFormat("html".to_string())),
            },
            (query, _) => Ok(query),
        }
    }
}

fn lookup<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
    table
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}

/// Runs one command against the (already shifted) releases
pub fn dispatch<W: Write>(
    command: Command,
    args: &[String],
    releases: &[Release],
    context: &Context,
    out: &mut W,
) -> Result<()> {
    debug!(?command, ?args, releases = releases.len(), "dispatching");
    match command {
        Command::Help => {
            out.write_all(super::USAGE.as_bytes())?;
            Ok(())
        }
        Command::Release => {
            let query = ReleaseQuery::from_args(args)?;
            release(query, releases, context, out)
        }
        Command::To => {
            let format = Format::from_args(args)?;
            transform(format, &args[1..], releases, context, out)
        }
    }
}

fn latest(releases: &[Release]) -> std::result::Result<&Release, ValidationError> {
    releases.first().ok_or(ValidationError::EmptyChangelog)
}

fn release<W: Write>(
    query: ReleaseQuery,
    releases: &[Release],
    context: &Context,
    out: &mut W,
) -> Result<()> {
    match query {
        ReleaseQuery::Check => {
            validate_changelog(releases)?;
            info!(releases = releases.len(), "changelog is valid");
        }
        ReleaseQuery::Summary => writeln!(out, "{}", latest(releases)?.summary.trim_end())?,
        ReleaseQuery::Date => writeln!(out, "{}", latest(releases)?.date)?,
        ReleaseQuery::Version => writeln!(out, "{}", latest(releases)?.version)?,
        ReleaseQuery::DateCheck => {
            let found = &latest(releases)?.date;
            let expected = context.timezone.today();
            if *found != expected {
                return Err(ChangelogError::DateMismatch {
                    found: found.clone(),
                    expected,
                });
            }
        }
        ReleaseQuery::ToMarkdown => {
            let rendered = MarkdownRenderer::new().render_release(latest(releases)?)?;
            out.write_all(rendered.as_bytes())?;
        }
        ReleaseQuery::Description => {
            let rendered = MarkdownRenderer::new().render_description(latest(releases)?)?;
            out.write_all(rendered.as_bytes())?;
        }
    }
    Ok(())
}

fn transform<W: Write>(
    format: Format,
    args: &[String],
    releases: &[Release],
    context: &Context,
    out: &mut W,
) -> Result<()> {
    validate_changelog(releases)?;

    let rendered = match format {
        Format::Markdown => MarkdownRenderer::new().render(releases)?,
        Format::Html => {
            let stylesheets = if args.is_empty() {
                load_stylesheets(&context.html.stylesheets)?
            } else {
                load_stylesheets(args)?
            };
            HtmlRenderer::new()
                .with_title(context.html.title.clone())
                .with_stylesheets(stylesheets)
                .render(releases)?
        }
    };
    out.write_all(rendered.as_bytes())?;
    Ok(())
}
