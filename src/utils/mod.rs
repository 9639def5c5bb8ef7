//! Utility modules shared by the publish command.

pub mod date;
pub mod exec;
pub mod git;
pub mod path;
