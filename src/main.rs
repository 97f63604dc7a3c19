use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use semantic_changelog::cli::{self, Context};
use semantic_changelog::config::{self, Timezone};
use semantic_changelog::error::ChangelogError;
use semantic_changelog::source::InputSource;
use semantic_changelog::ui;

#[derive(clap::Parser)]
#[command(
    name = "changelog",
    version,
    about = "Query, check and render a YAML semantic changelog",
    after_help = "Run 'changelog help' for the list of commands."
)]
struct Args {
    #[arg(short, long, help = "Changelog file to read instead of stdin or the current directory")]
    file: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, value_enum, help = "Clock used by 'release date check'")]
    timezone: Option<Timezone>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    verbose: u8,

    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_negative_numbers = true,
        allow_hyphen_values = true,
        help = "[next | -N] <command> [arguments...]"
    )]
    command: Vec<String>,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(err) = run(args) {
        let code = err
            .downcast_ref::<ChangelogError>()
            .map(ChangelogError::exit_code)
            .unwrap_or(1);
        ui::display_error(&ui::error_chain_message(&err));
        std::process::exit(code);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(args: Args) -> Result<()> {
    let config =
        config::load_config(args.config.as_deref()).context("Failed to load configuration")?;

    let input = args.file.map(InputSource::File).unwrap_or_default();
    let mut context = Context::from_config(&config, input);
    if let Some(timezone) = args.timezone {
        context.timezone = timezone;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::run(&args.command, &context, &mut out)?;
    out.flush()
        .map_err(ChangelogError::from)
        .context("Failed to write output")?;
    Ok(())
}
