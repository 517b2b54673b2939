// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line sinks for the shared output file.
//!
//! A [`LineSink`] is the only capability the per-file loop needs. Each
//! [`LineSink::write_line`] call emits one line plus [`LINE_ENDING`].
//!
//! - [`Appender`] writes directly and is for a single producer.
//! - [`LockedAppender`] takes the [`OutputLock`] around every line, so
//!   concurrent producers never interleave partial lines.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::defaults::LINE_ENDING;

/// Destination for transformed lines.
pub trait LineSink {
    /// Write `line` followed by the line terminator.
    fn write_line(&mut self, line: &[u8]) -> io::Result<()>;

    /// Flush anything still buffered.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Open `path` for appending, creating it if missing. Never truncates.
pub fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Mutual-exclusion token serializing line writes to the shared output.
#[derive(Debug, Default)]
pub struct OutputLock {
    inner: Mutex<()>,
}

impl OutputLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block until the token is held. Released when the guard drops.
    ///
    /// The token guards no data, so a poisoned lock is still usable.
    pub fn acquire(&self) -> MutexGuard<'_, ()> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Single-producer sink.
pub struct Appender<W: Write> {
    writer: W,
}

impl<W: Write> Appender<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for Appender<W> {
    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.writer.write_all(line)?;
        self.writer.write_all(LINE_ENDING)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Sink shared with other producers through an [`OutputLock`].
///
/// Each line and its terminator are assembled first and handed to the
/// writer in a single `write_all` while the token is held. The writer
/// must not buffer across calls, or a later flush could split a line.
pub struct LockedAppender<'a, W: Write> {
    writer: W,
    lock: &'a OutputLock,
    line: Vec<u8>,
}

impl<'a, W: Write> LockedAppender<'a, W> {
    pub fn new(writer: W, lock: &'a OutputLock) -> Self {
        Self { writer, lock, line: Vec::new() }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for LockedAppender<'_, W> {
    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.line.clear();
        self.line.extend_from_slice(line);
        self.line.extend_from_slice(LINE_ENDING);

        let _guard = self.lock.acquire();
        self.writer.write_all(&self.line)?;
        self.writer.flush()
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
