//! Spreadsheet encoding of the commit log
//!
//! The log is an Office Open XML workbook with a single worksheet:
//!
//! ```text
//! | Timestamp           | Commit Hash | User      | Added Lines |   <- bold header row
//! | 2025-12-17 10:42:07 | 9fceb02...  | Ada Byron | 42          |
//! | ...                 | ...         | ...       | ...         |
//! ```
//!
//! Timestamps, hashes and users are text cells; added lines are numeric cells.
//! There is no index column. When reading, header labels are compared with
//! whitespace removed so both `Commit Hash` and `CommitHash` are accepted.

use crate::artifacts::commit::record::{CommitRecord, Timestamp};
use crate::artifacts::log::table::{COLUMNS, LogTable};
use calamine::{Data, Reader, Xlsx};
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook};
use std::io::Cursor;
use thiserror::Error;

/// Name of the single worksheet holding the log
pub const SHEET_NAME: &str = "Sheet1";

/// Rows available in a worksheet, header included
const WORKSHEET_ROW_LIMIT: usize = 1_048_576;

/// Largest count a numeric cell holds exactly (2^53)
const MAX_EXACT_COUNT: u64 = 1 << 53;

/// Column widths that fit a timestamp, a full SHA-1 hash, a name, and a count
const COLUMN_WIDTHS: [f64; 4] = [20.0, 42.0, 24.0, 12.0];

#[derive(Debug, Error)]
pub enum WorkbookError {
    #[error("cannot read workbook")]
    Read(#[from] calamine::XlsxError),

    #[error("cannot render workbook")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    #[error("workbook has no worksheet")]
    NoWorksheet,

    #[error("unexpected header row [{found}], expected [{expected}]")]
    Header { found: String, expected: String },

    #[error("row {row}, column {column}: {reason}")]
    Cell {
        row: usize,
        column: &'static str,
        reason: String,
    },

    #[error("{rows} rows do not fit in a worksheet")]
    TooManyRows { rows: usize },

    #[error("row {row}: {count} added lines cannot be stored exactly")]
    CountTooLarge { row: usize, count: u64 },
}

/// Render the whole table as workbook bytes
pub fn encode(table: &LogTable) -> Result<Vec<u8>, WorkbookError> {
    if table.len() >= WORKSHEET_ROW_LIMIT {
        return Err(WorkbookError::TooManyRows { rows: table.len() });
    }

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (column, (label, width)) in COLUMNS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let column = column as ColNum;
        worksheet.set_column_width(column, width)?;
        worksheet.write_string_with_format(0, column, *label, &header_format)?;
    }

    for (index, record) in table.rows().iter().enumerate() {
        let row = RowNum::try_from(index + 1)
            .map_err(|_| WorkbookError::TooManyRows { rows: table.len() })?;
        if record.added_lines() > MAX_EXACT_COUNT {
            return Err(WorkbookError::CountTooLarge {
                row: index + 2,
                count: record.added_lines(),
            });
        }

        worksheet.write_string(row, 0, record.timestamp().to_string())?;
        worksheet.write_string(row, 1, record.commit_hash())?;
        worksheet.write_string(row, 2, record.user())?;
        worksheet.write_number(row, 3, record.added_lines() as f64)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Parse workbook bytes back into a table
///
/// Reads the first worksheet. An entirely empty worksheet is an empty table.
pub fn decode(bytes: Vec<u8>) -> Result<LogTable, WorkbookError> {
    let mut workbook = Xlsx::new(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(WorkbookError::NoWorksheet)??;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(LogTable::new());
    };
    check_header(header)?;

    let records = rows
        .enumerate()
        .filter(|(_, cells)| cells.iter().any(|cell| !matches!(cell, Data::Empty)))
        // +2: one-based numbering, plus the header row
        .map(|(index, cells)| decode_record(index + 2, cells))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LogTable::from(records))
}

fn normalize_label(label: &str) -> String {
    label.chars().filter(|c| !c.is_whitespace()).collect()
}

fn check_header(header: &[Data]) -> Result<(), WorkbookError> {
    let mut labels = header.iter().map(|cell| cell.to_string()).collect::<Vec<_>>();
    while labels.last().is_some_and(|label| label.trim().is_empty()) {
        labels.pop();
    }

    let matches = labels.len() == COLUMNS.len()
        && labels
            .iter()
            .zip(COLUMNS)
            .all(|(found, expected)| normalize_label(found) == normalize_label(expected));

    if matches {
        Ok(())
    } else {
        Err(WorkbookError::Header {
            found: labels.join(", "),
            expected: COLUMNS.join(", "),
        })
    }
}

fn decode_record(row: usize, cells: &[Data]) -> Result<CommitRecord, WorkbookError> {
    let empty = Data::Empty;
    let cell = |column: usize| cells.get(column).unwrap_or(&empty);
    let invalid = |column: usize, reason: String| WorkbookError::Cell {
        row,
        column: COLUMNS[column],
        reason,
    };

    let timestamp = match cell(0) {
        Data::String(text) => Timestamp::try_from(text.as_str())
            .map_err(|err| invalid(0, format!("{text:?} is not a timestamp: {err}")))?,
        other => return Err(invalid(0, format!("expected text, found {other:?}"))),
    };

    let commit_hash = text_value(cell(1)).ok_or_else(|| invalid(1, "missing commit hash".into()))?;
    // git accepts commits with an empty author name
    let user = match cell(2) {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        other => text_value(other).ok_or_else(|| invalid(2, format!("expected text, found {other:?}")))?,
    };
    let added_lines = count_value(cell(3))
        .ok_or_else(|| invalid(3, format!("expected a non-negative whole number, found {:?}", cell(3))))?;

    Ok(CommitRecord::new(timestamp, commit_hash, user, added_lines))
}

fn text_value(cell: &Data) -> Option<String> {
    match cell {
        Data::String(text) if !text.is_empty() => Some(text.clone()),
        Data::Int(value) => Some(value.to_string()),
        Data::Float(value) if value.fract() == 0.0 => Some(format!("{value:.0}")),
        Data::Float(value) => Some(value.to_string()),
        _ => None,
    }
}

fn count_value(cell: &Data) -> Option<u64> {
    match cell {
        Data::Int(value) => u64::try_from(*value).ok(),
        Data::Float(value)
            if *value >= 0.0 && value.fract() == 0.0 && *value <= MAX_EXACT_COUNT as f64 =>
        {
            Some(*value as u64)
        }
        Data::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
