//! Commit log file
//!
//! The log lives in a single workbook file that is read and rewritten whole on
//! every append. A missing file is an empty log. Rewrites go through a
//! temporary file in the same directory that is renamed over the old one, so a
//! failed write leaves the previous log in place.
//!
//! Concurrent writers are not coordinated: two runs appending at the same time
//! can lose one of the two new rows.

use crate::artifacts::commit::record::CommitRecord;
use crate::artifacts::log::table::LogTable;
use crate::artifacts::log::workbook;
use crate::errors::{LoggerError, LoggerResult};
use std::io::Write;
use std::path::Path;

/// Default file name of the commit log
pub const DEFAULT_LOG_FILE: &str = "commit_log.xlsx";

#[derive(Debug)]
pub struct LogStore {
    /// Path to the workbook file
    path: Box<Path>,
}

impl LogStore {
    pub fn new(path: Box<Path>) -> Self {
        LogStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full log, or an empty one if the file does not exist yet
    pub fn load(&self) -> LoggerResult<LogTable> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no commit log yet, starting empty");
                return Ok(LogTable::new());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        workbook::decode(bytes).map_err(|source| LoggerError::StoreFormat {
            path: self.path.to_path_buf(),
            source,
        })
    }

    /// Replace the file contents with the given table
    ///
    /// The parent directory is created if needed.
    pub fn replace(&self, table: &LogTable) -> LoggerResult<()> {
        let bytes = workbook::encode(table).map_err(|source| LoggerError::StoreFormat {
            path: self.path.to_path_buf(),
            source,
        })?;

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;

        let mut staged =
            tempfile::NamedTempFile::new_in(parent).map_err(|source| self.io_error(source))?;
        staged
            .write_all(&bytes)
            .and_then(|_| staged.as_file().sync_all())
            .map_err(|source| self.io_error(source))?;
        staged
            .persist(&self.path)
            .map_err(|err| self.io_error(err.error))?;

        tracing::info!(path = %self.path.display(), rows = table.len(), "commit log rewritten");

        Ok(())
    }

    /// Load the log, add one row at the end, and write everything back
    ///
    /// Returns the table as written.
    pub fn append(&self, record: CommitRecord) -> LoggerResult<LogTable> {
        let mut table = self.load()?;
        table.push(record);
        self.replace(&table)?;

        Ok(table)
    }

    fn io_error(&self, source: std::io::Error) -> LoggerError {
        LoggerError::StoreIo {
            path: self.path.to_path_buf(),
            source,
        }
    }
}
