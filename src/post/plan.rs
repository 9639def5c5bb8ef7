//! Turning draft names into `mv` invocations.

use super::name::{segment, target_name};
use crate::utils::{date::PublishDate, exec::Cmd};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Where drafts are read from and posts are written to.
///
/// Both directories are relative to the project root, and are printed as
/// given so the echoed command matches what the user would type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostLayout {
    pub drafts: PathBuf,
    pub posts: PathBuf,
}

impl Default for PostLayout {
    fn default() -> Self {
        Self {
            drafts: PathBuf::from("_drafts"),
            posts: PathBuf::from("_posts"),
        }
    }
}

/// A single draft-to-post rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMove {
    /// Argument as the user passed it.
    pub name: String,
    /// `<drafts>/<segment>`
    pub source: PathBuf,
    /// `<posts>/<date>-<segment>`
    pub destination: PathBuf,
}

impl PostMove {
    /// Plan the move for one draft name.
    ///
    /// Both sides use only the final segment of `name`: `dir/b.md` is looked
    /// up as `<drafts>/b.md`.
    pub fn plan(layout: &PostLayout, date: PublishDate, name: &str) -> Self {
        let segment = segment(name);
        Self {
            name: name.to_owned(),
            source: layout.drafts.join(segment),
            destination: layout.posts.join(target_name(date, segment)),
        }
    }

    /// File name of the published post.
    pub fn target_file_name(&self) -> String {
        self.destination
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// The command as it is echoed: `mv <source> <destination>`.
    pub fn command_line(&self) -> String {
        format!("mv {} {}", self.source.display(), self.destination.display())
    }

    /// Run `mv` from the project root.
    ///
    /// Nothing is checked up front; a missing draft or posts directory
    /// surfaces as the error `mv` reports.
    pub fn execute(&self, root: &Path) -> Result<()> {
        Cmd::new("mv")
            .arg(&self.source)
            .arg(&self.destination)
            .cwd(root)
            .run()?;
        Ok(())
    }
}

/// Plan every move, in argument order.
pub fn plan_moves<S: AsRef<str>>(
    layout: &PostLayout,
    date: PublishDate,
    names: &[S],
) -> Vec<PostMove> {
    names
        .iter()
        .map(|name| PostMove::plan(layout, date, name.as_ref()))
        .collect()
}
