//! Process gateway: launch external tools with structured argument lists.
//!
//! No shell is involved anywhere; every argument is passed to the child
//! process verbatim.

use std::ffi::OsStr;
use std::process::{Command, ExitStatus};

use crate::error::ProcessError;

/// Output of a process that was launched and ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    /// stdout followed by stderr, lossily decoded.
    pub text: String,
    /// Exit status was zero.
    pub success: bool,
}

/// How a launched process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl ExitOutcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for ExitOutcome {
    fn from(status: ExitStatus) -> Self {
        Self { code: status.code() }
    }
}

/// Launches external commands. `Err` always means the process never ran.
pub trait ProcessRunner {
    /// Run to completion, capturing combined output.
    fn run_capturing(
        &self,
        program: &OsStr,
        args: &[&OsStr],
    ) -> Result<CapturedOutput, ProcessError>;

    /// Run to completion with inherited stdio, reporting only how it exited.
    fn run_status(&self, program: &OsStr, args: &[&OsStr]) -> Result<ExitOutcome, ProcessError>;
}

/// [`ProcessRunner`] backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run_capturing(
        &self,
        program: &OsStr,
        args: &[&OsStr],
    ) -> Result<CapturedOutput, ProcessError> {
        let output =
            Command::new(program).args(args).output().map_err(|e| spawn_error(program, e))?;
        let mut text = String::from_utf8_lossy(&output.stdout).to_string();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(CapturedOutput { text, success: output.status.success() })
    }

    fn run_status(&self, program: &OsStr, args: &[&OsStr]) -> Result<ExitOutcome, ProcessError> {
        let status =
            Command::new(program).args(args).status().map_err(|e| spawn_error(program, e))?;
        Ok(status.into())
    }
}

fn spawn_error(program: &OsStr, source: std::io::Error) -> ProcessError {
    ProcessError::Spawn { program: program.to_string_lossy().to_string(), source }
}
