//! Commit log record
//!
//! A record captures the state of `HEAD` at the moment the logger ran:
//!
//! ```text
//! Timestamp            Commit Hash                               User       Added Lines
//! 2025-12-17 10:42:07  9fceb02d0ae598e95dc970b74767f19372d61af8  Ada Byron  42
//! ```
//!
//! The timestamp is the wall-clock time the record was produced, not the
//! commit's own author or committer date.

use chrono::Timelike;
use derive_new::new;
use std::fmt;

/// Textual layout of a [`Timestamp`], both when written and when read back
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local wall-clock time with second precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(chrono::NaiveDateTime);

impl Timestamp {
    pub fn now() -> Self {
        Timestamp::from(chrono::Local::now().naive_local())
    }
}

impl From<chrono::NaiveDateTime> for Timestamp {
    fn from(value: chrono::NaiveDateTime) -> Self {
        // Whole seconds only, so the value survives a text round trip unchanged
        Timestamp(value.with_nanosecond(0).unwrap_or(value))
    }
}

impl TryFrom<&str> for Timestamp {
    type Error = chrono::ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        chrono::NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).map(Timestamp)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

/// One row of the commit log
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommitRecord {
    timestamp: Timestamp,
    commit_hash: String,
    user: String,
    added_lines: u64,
}

impl CommitRecord {
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn commit_hash(&self) -> &str {
        &self.commit_hash
    }

    /// Abbreviated commit hash, as shown by `git log --abbrev-commit`
    pub fn short_hash(&self) -> &str {
        let end = self
            .commit_hash
            .char_indices()
            .nth(7)
            .map_or(self.commit_hash.len(), |(index, _)| index);
        &self.commit_hash[..end]
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn added_lines(&self) -> u64 {
        self.added_lines
    }
}
