//! Things the logger reads from and writes to
//!
//! - `git`: the external git executable
//! - `log_store`: the workbook file holding the commit log
//! - `repository`: a working directory bundled with its git runner, log store and output

pub mod git;
pub mod log_store;
pub mod repository;
