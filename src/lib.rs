//! Append-only spreadsheet audit log of git commits
//!
//! Each run inspects the latest commit of a repository through the git
//! executable and appends one row (timestamp, commit hash, author, added lines)
//! to an `.xlsx` workbook, creating the workbook on first use.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
