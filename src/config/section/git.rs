//! `[git]` section configuration.
//!
//! Off by default: without `push = true` (or `--push`) the tool only moves
//! files.
//!
//! # Example
//!
//! ```toml
//! [git]
//! push = true                  # Commit and push after moving
//! remote = "origin"            # Remote to push to
//! branch = "main"              # Optional, defaults to the current branch
//! message = "Publish {files}"  # `{files}` expands to the published names
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Placeholder replaced by the comma-separated post file names.
const FILES_PLACEHOLDER: &str = "{files}";

/// Commit-and-push settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Commit and push after moving.
    pub push: bool,

    /// Remote name.
    pub remote: String,

    /// Branch to push. `None` pushes the current branch.
    pub branch: Option<String>,

    /// Commit message template.
    pub message: String,
}

/// Field paths for diagnostics.
pub struct GitFields {
    pub push: FieldPath,
    pub remote: FieldPath,
    pub branch: FieldPath,
    pub message: FieldPath,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            push: false,
            remote: "origin".to_string(),
            branch: None,
            message: format!("Publish {FILES_PLACEHOLDER}"),
        }
    }
}

impl GitConfig {
    pub const FIELDS: GitFields = GitFields {
        push: FieldPath::new("git.push"),
        remote: FieldPath::new("git.remote"),
        branch: FieldPath::new("git.branch"),
        message: FieldPath::new("git.message"),
    };

    /// Expand the message template for the given post file names.
    pub fn commit_message<S: AsRef<str>>(&self, files: &[S]) -> String {
        let files = files
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(", ");
        self.message.replace(FILES_PLACEHOLDER, &files)
    }

    /// Validate git settings.
    ///
    /// # Checks
    /// - `remote` and `message` must not be blank.
    /// - `branch`, when set, must not be blank.
    /// - With `push` enabled, `git` must be on `PATH`.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.remote.trim().is_empty() {
            diag.error(
                Self::FIELDS.remote,
                format!("{} must not be empty", Self::FIELDS.remote.as_str()),
            );
        }

        if self.message.trim().is_empty() {
            diag.error(
                Self::FIELDS.message,
                format!("{} must not be empty", Self::FIELDS.message.as_str()),
            );
        }

        if let Some(branch) = &self.branch
            && branch.trim().is_empty()
        {
            diag.error_with_hint(
                Self::FIELDS.branch,
                format!("{} must not be empty", Self::FIELDS.branch.as_str()),
                "remove the field to push the current branch",
            );
        }

        if self.push && which::which("git").is_err() {
            diag.error_with_hint(
                Self::FIELDS.push,
                "`git` not found",
                format!("install git or set {} = false", Self::FIELDS.push.as_str()),
            );
        }
    }
}
