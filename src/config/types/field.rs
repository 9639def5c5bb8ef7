//! Config field path.

use owo_colors::{OwoColorize, Stream::Stderr};
use std::fmt;

/// A dotted path to a config field, e.g. `git.remote`.
///
/// Each section exposes its fields as constants so diagnostics never
/// spell a field name by hand:
///
/// ```ignore
/// diag.error(GitConfig::FIELDS.remote, "must not be empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        write!(f, "{}", quoted.if_supports_color(Stderr, |t| t.bright_blue()))
    }
}
