use anyhow::{Context, Result, anyhow};
use gix::Repository;
use std::path::{Path, PathBuf};

/// A discovered repository: its working tree root and current branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repo {
    /// Working tree root (parent of `.git`).
    pub root: PathBuf,
    /// Short name of the branch HEAD points to, `None` when detached.
    pub branch: Option<String>,
}

/// Find the git repository containing `dir`, searching upward.
pub fn discover_repo(dir: &Path) -> Result<Repo> {
    let repo = gix::discover(dir)
        .with_context(|| format!("not a git repository: {}", dir.display()))?;

    let root = get_repo_root(&repo)?.to_path_buf();
    let branch = current_branch(&repo)?;

    Ok(Repo { root, branch })
}

/// Get repository root path
fn get_repo_root(repo: &Repository) -> Result<&Path> {
    repo.workdir()
        .ok_or_else(|| anyhow!("bare repositories have no working tree to publish into"))
}

/// Short name of the checked out branch (e.g. `main`).
fn current_branch(repo: &Repository) -> Result<Option<String>> {
    let head = repo.head_name().context("failed to read HEAD")?;
    Ok(head.map(|name| name.shorten().to_string()))
}
