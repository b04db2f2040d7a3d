//! The fieldkey command line tool.

use std::io::IsTerminal;
use std::io::stderr;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use clap_verbosity_flag::Verbosity;
use colored::Colorize;
use fieldkey::commands;
use git_testament::git_testament;
use git_testament::render_testament;
use tracing_log::AsTrace;

git_testament!(TESTAMENT);

/// Generates a key for a content-model group, field, or layout.
#[derive(Parser)]
#[command(author, version = render_testament!(TESTAMENT), about, long_about = None)]
struct Cli {
    /// The key generation arguments.
    #[command(flatten)]
    args: commands::generate::Args,

    /// The verbosity flags.
    #[command(flatten)]
    verbose: Verbosity,
}

/// Parses arguments, installs the tracing subscriber, and runs the
/// command.
fn inner() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // The rendered error carries the usage line and, for a bad
            // category, the offending value plus the valid ones. Every
            // user-input failure exits with code 1.
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            e.print().context("failed to print argument error")?;
            std::process::exit(code);
        }
    };

    tracing_log::LogTracer::init()?;

    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(cli.verbose.log_level_filter().as_trace())
        .with_writer(std::io::stderr)
        .with_ansi(stderr().is_terminal())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    commands::generate::generate(cli.args)
}

fn main() {
    if let Err(e) = inner() {
        eprintln!(
            "{error}: {e:?}",
            error = if std::io::stderr().is_terminal() {
                "error".red().bold()
            } else {
                "error".normal()
            }
        );
        std::process::exit(1);
    }
}
