//! External git process runner
//!
//! Every query against the repository is a separate, blocking invocation of the
//! git executable. A call either yields the trimmed UTF-8 stdout of a process
//! that exited with status zero, or fails:
//!
//! - the program cannot be spawned (not installed, not executable)
//! - the process exits with a non-zero status (not a repository, no commits yet)
//! - stdout is not valid UTF-8
//!
//! No timeouts are applied; a hung git process hangs the caller.

use crate::errors::{LoggerError, LoggerResult};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Program used when no other git executable is configured
pub const DEFAULT_GIT_PROGRAM: &str = "git";

#[derive(Debug, Clone)]
pub struct Git {
    /// The git executable, looked up on `PATH` when not absolute
    program: PathBuf,
    /// Directory the processes run in
    workdir: Box<Path>,
}

impl Git {
    pub fn new(program: impl Into<PathBuf>, workdir: Box<Path>) -> Self {
        Git {
            program: program.into(),
            workdir,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run git with the given arguments and return its trimmed stdout
    pub fn run(&self, args: &[&str]) -> LoggerResult<String> {
        let program = self.program.display().to_string();
        let joined_args = args.join(" ");
        tracing::debug!(program = %program, args = %joined_args, workdir = %self.workdir.display(), "running git");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
            // keep the porcelain wording untranslated
            .env("LC_ALL", "C")
            .output()
            .map_err(|source| LoggerError::ToolLaunch {
                program: program.clone(),
                args: joined_args.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(LoggerError::ToolExit {
                program,
                args: joined_args,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(|err| LoggerError::Decode {
            program,
            args: joined_args,
            reason: err.to_string(),
        })?;

        Ok(stdout.trim().to_string())
    }
}
