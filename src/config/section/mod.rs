//! Configuration section definitions.
//!
//! Each module corresponds to a section in `publish.toml`:
//!
//! | Module  | TOML Section | Purpose                        |
//! |---------|--------------|--------------------------------|
//! | `paths` | `[paths]`    | Drafts and posts directories   |
//! | `git`   | `[git]`      | Commit and push after moving   |

mod git;
mod paths;

pub use git::GitConfig;
pub use paths::PathsConfig;
