//! Draft-to-post naming and move planning.
//!
//! | Module | Purpose                                         |
//! |--------|-------------------------------------------------|
//! | `name` | Final path segment and dated target filename    |
//! | `plan` | `PostLayout` and the `mv` each argument becomes |

mod name;
mod plan;

pub use plan::{PostLayout, PostMove, plan_moves};
