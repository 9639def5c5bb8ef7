use crate::{
    debug, exec, log,
    utils::exec::{Cmd, FilterRule},
};
use anyhow::{Result, bail};
use std::path::Path;

/// Git chatter that adds nothing to a publish log.
const GIT_FILTER: FilterRule = FilterRule::new(&["hint:", "warning: in the working copy"]);

/// Stage every change (additions and deletions) under `paths`.
pub fn stage(root: &Path, paths: &[&Path]) -> Result<()> {
    let cmd = Cmd::new("git")
        .args(["add", "-A", "--"])
        .args(paths)
        .cwd(root)
        .filter(&GIT_FILTER);
    cmd.run()?;
    debug!("git"; "staged {}", display_paths(paths));
    Ok(())
}

/// Whether the index differs from HEAD.
pub fn has_staged_changes(root: &Path) -> Result<bool> {
    let output = exec!(root; "git"; "diff", "--cached", "--name-only")?;
    Ok(!String::from_utf8_lossy(&output.stdout).trim().is_empty())
}

/// Commit the staged changes.
pub fn commit(root: &Path, message: &str) -> Result<()> {
    if message.trim().is_empty() {
        bail!("Commit message cannot be empty");
    }

    exec!(filter=&GIT_FILTER; root; "git"; "commit", "-q", "-m", message)?;
    log!("git"; "commit \"{}\"", message);
    Ok(())
}

/// Push to `remote`, optionally naming the branch.
///
/// Runs in a PTY so credential prompts reach the user.
pub fn push(root: &Path, remote: &str, branch: Option<&str>) -> Result<()> {
    if remote.is_empty() {
        bail!("remote name cannot be empty");
    }

    let branch = branch.unwrap_or_default();
    exec!(pty=true; root; "git"; "push", remote, branch)?;

    if branch.is_empty() {
        log!("push"; "pushed to {remote}");
    } else {
        log!("push"; "pushed to {remote}/{branch}");
    }
    Ok(())
}

fn display_paths(paths: &[&Path]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
