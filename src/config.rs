//! Runtime configuration
//!
//! Settings come from command-line flags, then `GIT_LOGGER_*` environment
//! variables, then built-in defaults. They are resolved once at startup and
//! handed to the [`Repository`](crate::areas::repository::Repository); nothing
//! reads them from global state afterwards.

use crate::areas::git::DEFAULT_GIT_PROGRAM;
use crate::areas::log_store::DEFAULT_LOG_FILE;
use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory git runs in
    repo_dir: PathBuf,
    /// Workbook file, absolute or relative to `repo_dir`
    log_file: PathBuf,
    /// The git executable
    git_program: PathBuf,
}

impl Config {
    /// Resolve settings, falling back to defaults for anything not given
    ///
    /// The repository directory defaults to the current directory.
    pub fn resolve(
        repo_dir: Option<PathBuf>,
        log_file: Option<PathBuf>,
        git_program: Option<PathBuf>,
    ) -> anyhow::Result<Self> {
        let repo_dir = match repo_dir {
            Some(dir) => dir,
            None => std::env::current_dir().context("cannot determine the current directory")?,
        };

        Ok(Config {
            repo_dir,
            log_file: log_file.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            git_program: git_program.unwrap_or_else(|| PathBuf::from(DEFAULT_GIT_PROGRAM)),
        })
    }

    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    /// Log file location, with relative paths anchored at the repository directory
    pub fn log_file_path(&self) -> PathBuf {
        if self.log_file.is_absolute() {
            self.log_file.clone()
        } else {
            self.repo_dir.join(&self.log_file)
        }
    }

    pub fn git_program(&self) -> &Path {
        &self.git_program
    }
}
