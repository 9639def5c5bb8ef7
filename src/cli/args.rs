//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Move drafts into dated posts, optionally committing and pushing the result
#[derive(Parser, Debug, Clone, Default)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Draft file names; only the part after the last `/` is used
    #[arg(value_name = "NAME", value_hint = clap::ValueHint::FilePath)]
    pub names: Vec<String>,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: publish.toml, searched upward from the current directory)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Drafts directory (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub drafts: Option<PathBuf>,

    /// Posts directory (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub posts: Option<PathBuf>,

    /// Commit the moved posts and push them to the remote
    #[arg(long, overrides_with = "no_push")]
    pub push: bool,

    /// Do not push, even if the config file enables it
    #[arg(long, overrides_with = "push")]
    pub no_push: bool,

    /// Git remote to push to
    #[arg(short, long)]
    pub remote: Option<String>,

    /// Git branch to push (default: current branch)
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Commit message; `{files}` expands to the published file names
    #[arg(short, long)]
    pub message: Option<String>,

    /// Print the commands without moving anything
    #[arg(short = 'n', long)]
    pub dry: bool,

    /// Exit with an error if any move failed
    #[arg(short, long)]
    pub strict: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// `--push` / `--no-push` as an override of `git.push`.
    pub const fn push_override(&self) -> Option<bool> {
        match (self.push, self.no_push) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }
}
