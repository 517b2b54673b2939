// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-file read/transform/write loop.
//!
//! [`transform_lines`] is the one loop both strategies share; the
//! strategies differ only in the [`LineSink`] they hand it.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::ProcessError;
use crate::sink::{LineSink, LockedAppender, OutputLock, open_append};
use crate::transform::upcase_in_place;

/// Result of processing one input file.
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    /// Lines written, or why the file was abandoned.
    pub result: Result<usize, ProcessError>,
}

impl FileOutcome {
    pub fn new(input: &Path, result: Result<usize, ProcessError>) -> Self {
        Self { input: input.to_path_buf(), result }
    }

    pub fn lines(&self) -> usize {
        self.result.as_ref().map_or(0, |n| *n)
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Emit the outcome as a diagnostic.
    pub fn log(&self) {
        match &self.result {
            Ok(lines) => tracing::debug!("processed {} ({} lines)", self.input.display(), lines),
            Err(err) => tracing::error!("{}", err),
        }
    }
}

/// Open an input file for buffered line reading.
pub fn open_input(path: &Path) -> Result<BufReader<File>, ProcessError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| ProcessError::OpenInput { path: path.to_path_buf(), source })
}

/// Open the shared output file for appending.
pub fn open_output(path: &Path) -> Result<File, ProcessError> {
    open_append(path).map_err(|source| ProcessError::OpenOutput { path: path.to_path_buf(), source })
}

/// Uppercase every line of `reader` into `sink`, returning the line count.
///
/// `input` and `output` name the files for error reporting. A trailing
/// `\n` or `\r\n` is dropped from each line; the sink adds its own.
pub fn transform_lines<R: BufRead, S: LineSink>(
    mut reader: R,
    sink: &mut S,
    input: &Path,
    output: &Path,
) -> Result<usize, ProcessError> {
    let mut line = Vec::new();
    let mut count = 0;

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|source| ProcessError::Read { path: input.to_path_buf(), source })?;
        if read == 0 {
            break;
        }

        trim_line_ending(&mut line);
        upcase_in_place(&mut line);
        sink.write_line(&line)
            .map_err(|source| ProcessError::Write { path: output.to_path_buf(), source })?;
        count += 1;
    }

    sink.finish().map_err(|source| ProcessError::Write { path: output.to_path_buf(), source })?;
    Ok(count)
}

/// Process one file as a concurrent worker.
///
/// Opens `input`, then its own append handle on `output`, and writes each
/// line under `lock`. Handles close when this returns.
pub fn run_locked(input: &Path, output: &Path, lock: &OutputLock) -> Result<usize, ProcessError> {
    let reader = open_input(input)?;
    let file = open_output(output)?;
    let mut sink = LockedAppender::new(file, lock);
    transform_lines(reader, &mut sink, input, output)
}

fn trim_line_ending(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
