//! Implementation of the `generate` command.

use std::io::Write;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::key::Category;
use crate::key::generate_key;

/// Arguments for key generation.
#[derive(Parser, Debug)]
pub struct Args {
    /// The kind of configuration object the key will tag.
    #[arg(value_name = "CATEGORY", ignore_case = true)]
    pub category: Category,

    /// The human-readable name; multiple words are joined with single
    /// spaces, so quoting is optional.
    #[arg(value_name = "NAME", required = true, num_args = 1..)]
    pub name: Vec<String>,
}

/// Generates a key and writes it to stdout followed by a newline.
pub fn generate(args: Args) -> Result<()> {
    let name = args.name.join(" ");
    let key = generate_key(args.category, &name);
    debug!("generated key `{key}` from name `{name}`");

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{key}").context("failed to write key to stdout")?;
    Ok(())
}
