//! The commit log table
//!
//! - `table`: the in-memory, append-only [`table::LogTable`] and its columns
//! - `workbook`: conversion between a table and `.xlsx` workbook bytes

pub mod table;
pub mod workbook;
