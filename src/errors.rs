//! Error types for commit inspection and log storage
//!
//! Every failure the library can report is a [`LoggerError`]. Callers that only
//! care about the broad class of a failure use [`LoggerError::kind`]:
//!
//! - `ExternalTool`: git could not be launched or exited with an error
//! - `Decode`: git produced output that could not be interpreted
//! - `Store`: the log file could not be read, parsed, or written

use crate::artifacts::log::workbook::WorkbookError;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Broad failure classes, one per row of the error taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ExternalTool,
    Decode,
    Store,
}

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to launch `{program} {args}`")]
    ToolLaunch {
        program: String,
        args: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program} {args}` exited with {status}: {stderr}")]
    ToolExit {
        program: String,
        args: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("`{program} {args}` returned no output")]
    ToolEmpty { program: String, args: String },

    #[error("could not decode output of `{program} {args}`: {reason}")]
    Decode {
        program: String,
        args: String,
        reason: String,
    },

    #[error("cannot access commit log {}", path.display())]
    StoreIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("commit log {} is not in the expected format", path.display())]
    StoreFormat {
        path: PathBuf,
        #[source]
        source: WorkbookError,
    },
}

impl LoggerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoggerError::ToolLaunch { .. }
            | LoggerError::ToolExit { .. }
            | LoggerError::ToolEmpty { .. } => ErrorKind::ExternalTool,
            LoggerError::Decode { .. } => ErrorKind::Decode,
            LoggerError::StoreIo { .. } | LoggerError::StoreFormat { .. } => ErrorKind::Store,
        }
    }
}

pub type LoggerResult<T> = Result<T, LoggerError>;
