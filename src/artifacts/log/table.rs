use crate::artifacts::commit::record::CommitRecord;

/// Header labels of the log, in column order
pub const COLUMNS: [&str; 4] = ["Timestamp", "Commit Hash", "User", "Added Lines"];

/// In-memory commit log
///
/// Rows keep insertion order, oldest first. Rows are only ever added at the end;
/// existing rows are never edited, reordered, or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogTable {
    rows: Vec<CommitRecord>,
}

impl LogTable {
    pub fn new() -> Self {
        LogTable { rows: Vec::new() }
    }

    pub fn push(&mut self, record: CommitRecord) {
        self.rows.push(record);
    }

    pub fn rows(&self) -> &[CommitRecord] {
        &self.rows
    }

    /// The last `count` rows, still oldest first
    pub fn tail(&self, count: usize) -> &[CommitRecord] {
        &self.rows[self.rows.len().saturating_sub(count)..]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<CommitRecord>> for LogTable {
    fn from(rows: Vec<CommitRecord>) -> Self {
        LogTable { rows }
    }
}

impl FromIterator<CommitRecord> for LogTable {
    fn from_iter<I: IntoIterator<Item = CommitRecord>>(iter: I) -> Self {
        LogTable {
            rows: iter.into_iter().collect(),
        }
    }
}
