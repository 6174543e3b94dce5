//! Commit metadata
//!
//! - `record`: the [`record::CommitRecord`] appended to the log on every run
//! - `diffstat`: extraction of the added-lines figure from `git show --stat`
//! - `inspector`: queries git for the record describing `HEAD`

pub mod diffstat;
pub mod inspector;
pub mod record;
