//! Commit log data structures
//!
//! - `commit`: the per-run commit record and how it is read from git
//! - `log`: the append-only log table and its workbook encoding
//! - `core`: shared output helpers (pager writer)

pub mod commit;
pub mod core;
pub mod log;
