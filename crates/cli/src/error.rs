// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.
//!
//! [`ProcessError`] is a per-file failure: it is logged and the run goes on.
//! [`RunError`] aborts the run.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure while processing a single input file.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to open input file '{}': {}", path.display(), source)]
    OpenInput { path: PathBuf, source: io::Error },

    #[error("failed to open output file '{}': {}", path.display(), source)]
    OpenOutput { path: PathBuf, source: io::Error },

    #[error("failed to read '{}': {}", path.display(), source)]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write '{}': {}", path.display(), source)]
    Write { path: PathBuf, source: io::Error },
}

impl ProcessError {
    /// Path of the file the failure refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::OpenInput { path, .. }
            | Self::OpenOutput { path, .. }
            | Self::Read { path, .. }
            | Self::Write { path, .. } => path.as_path(),
        }
    }
}

/// Failure that aborts the whole run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to spawn worker for '{}': {}", input.display(), source)]
    SpawnWorker { input: PathBuf, source: io::Error },

    #[error("worker for '{}' panicked", input.display())]
    WorkerPanicked { input: PathBuf },
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Both strategies ran, even if some files could not be opened.
    Success = 0,
    /// A worker thread could not be created or died.
    ResourceFailure = 1,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

impl From<&RunError> for ExitCode {
    fn from(_: &RunError) -> Self {
        ExitCode::ResourceFailure
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
