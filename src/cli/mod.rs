//! Command-line workflow: parse tokens, load the changelog, run one command.
//!
//! Kept separate from `main.rs` so the whole flow can be driven with any
//! output sink and without clap.

pub mod dispatch;
pub mod invocation;

use std::io::Write;

use tracing::debug;

use crate::config::{Config, HtmlConfig, Timezone};
use crate::domain::Changelog;
use crate::error::{DispatchError, Result};
use crate::parser::parse_changelog;
use crate::source::{read_source, InputSource, Origin};
use crate::ui;

pub use dispatch::{dispatch, Command, Format, ReleaseQuery};
pub use invocation::Invocation;

/// Usage text printed by `help` or when no command is given
pub const USAGE: &str = "\
Manage a semantic changelog

  changelog                      Print this help screen
  changelog release              Check releases
  changelog release date         Print release date
  changelog release date check   Check that release date is today
  changelog release version      Print release version
  changelog release summary      Print release summary
  changelog release description  Print release changes in markdown
  changelog release to markdown  Print release summary and changes in markdown
  changelog to html              Transform changelog to html
  changelog to html stylesheet   Transform to html with stylesheets
                                 ('style' uses the built-in stylesheet)
  changelog to markdown          Transform changelog to markdown

Put 'next' before the command to act on the release before the latest,
or '-N' to go back N releases.

The changelog is read from standard input when it is piped, otherwise from
the file matching 'change[-_]log[.yml|.yaml]' (any case) in the current
directory. Use --file to name another file:

  changelog --file path/to/changelog.yml release
";

/// Settings a command runs with
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub input: InputSource,
    pub timezone: Timezone,
    pub html: HtmlConfig,
}

impl Context {
    pub fn from_config(config: &Config, input: InputSource) -> Self {
        Context {
            input,
            timezone: config.release.timezone,
            html: config.html.clone(),
        }
    }
}

/// Runs a command line end to end, reading the changelog from the
/// context's input source.
pub fn run<S: AsRef<str>, W: Write>(tokens: &[S], context: &Context, out: &mut W) -> Result<()> {
    let invocation = Invocation::parse(tokens)?;
    let Some(command) = resolve_command(&invocation)? else {
        out.write_all(USAGE.as_bytes())?;
        return Ok(());
    };
    if !command.reads_changelog() {
        return dispatch(command, &invocation.args, &[], context, out);
    }

    let document = read_source(&context.input)?;
    for warning in &document.warnings {
        ui::display_boundary_warning(warning);
    }
    if let Origin::File(path) = &document.origin {
        debug!(path = %path.display(), "reading changelog file");
    }

    let changelog = parse_changelog(&document.bytes)?;
    execute(&invocation, &changelog, context, out)
}

/// Runs an already parsed command line against a loaded changelog
pub fn execute<W: Write>(
    invocation: &Invocation,
    changelog: &Changelog,
    context: &Context,
    out: &mut W,
) -> Result<()> {
    let Some(command) = resolve_command(invocation)? else {
        out.write_all(USAGE.as_bytes())?;
        return Ok(());
    };
    let releases = invocation.select(changelog)?;
    dispatch(command, &invocation.args, releases, context, out)
}

fn resolve_command(invocation: &Invocation) -> Result<Option<Command>> {
    match invocation.command.as_deref() {
        None => Ok(None),
        Some(name) => Command::lookup(name)
            .map(Some)
            .ok_or_else(|| DispatchError::UnknownCommand(name.to_string()).into()),
    }
}
