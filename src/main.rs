//! publish - move Jekyll drafts into dated posts.
//!
//! `publish a.md b.md` runs `mv _drafts/a.md _posts/YYYY-MM-DD-a.md` for
//! each name, echoing each command first. With `--push` (or `[git] push`)
//! the result is committed and pushed afterwards.

mod cli;
mod config;
mod logger;
mod post;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::PublishConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.names.is_empty() {
        return Ok(());
    }

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = PublishConfig::load(&cli)?;
    cli::publish::run(&cli, &config)
}
