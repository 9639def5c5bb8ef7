//! Filename rules for published posts.
//!
//! A draft name is taken as given: only the text after its last `/`
//! survives, and nothing else is checked. Empty, dotted or otherwise odd
//! names are handed to `mv` unchanged.

use crate::utils::date::PublishDate;

/// Final path segment: text after the last `/`, or the whole name.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(segment("a.md"), "a.md");
/// assert_eq!(segment("_drafts/nested/b.md"), "b.md");
/// assert_eq!(segment("dir/"), "");
/// ```
#[inline]
pub fn segment(name: &str) -> &str {
    name.rsplit_once('/').map_or(name, |(_, last)| last)
}

/// Dated post filename: `YYYY-MM-DD-<segment>`.
#[inline]
pub fn target_name(date: PublishDate, segment: &str) -> String {
    format!("{date}-{segment}")
}
