//! Git operations for publishing.
//!
//! Repository discovery and HEAD inspection go through `gix`; staging,
//! committing and pushing shell out to the `git` binary so hooks, signing
//! and credential helpers behave as they do for the user.

mod remote;
mod repo;

pub use remote::{commit, has_staged_changes, push, stage};
pub use repo::discover_repo;
