//! `[paths]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [paths]
//! drafts = "_drafts"    # Where drafts live (relative to project root)
//! posts = "_posts"      # Where published posts go (relative to project root)
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::post::PostLayout;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Drafts and posts directories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Drafts directory, relative to the project root.
    pub drafts: PathBuf,

    /// Posts directory, relative to the project root.
    pub posts: PathBuf,
}

/// Field paths for diagnostics.
pub struct PathsFields {
    pub drafts: FieldPath,
    pub posts: FieldPath,
}

impl PathsConfig {
    pub const FIELDS: PathsFields = PathsFields {
        drafts: FieldPath::new("paths.drafts"),
        posts: FieldPath::new("paths.posts"),
    };

    /// Layout used to plan moves.
    pub fn layout(&self) -> PostLayout {
        PostLayout {
            drafts: self.drafts.clone(),
            posts: self.posts.clone(),
        }
    }

    /// Both directories must be non-empty and relative.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, path) in [
            (Self::FIELDS.drafts, &self.drafts),
            (Self::FIELDS.posts, &self.posts),
        ] {
            if path.as_os_str().is_empty() {
                diag.error(field, format!("{} must not be empty", field.as_str()));
            } else if path.is_absolute() {
                diag.error_with_hint(
                    field,
                    format!("{} must be relative: {}", field.as_str(), path.display()),
                    "paths are resolved from the directory holding publish.toml",
                );
            }
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let layout = PostLayout::default();
        Self {
            drafts: layout.drafts,
            posts: layout.posts,
        }
    }
}
