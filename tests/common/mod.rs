#![allow(dead_code)]

pub mod command;
pub mod file;

use git_logger::areas::log_store::LogStore;
use git_logger::artifacts::log::table::LogTable;
use std::path::Path;

pub const LOG_FILE: &str = "commit_log.xlsx";

/// Read back the log the binary wrote
pub fn load_log(path: &Path) -> Result<LogTable, Box<dyn std::error::Error>> {
    Ok(LogStore::new(path.to_path_buf().into_boxed_path()).load()?)
}
