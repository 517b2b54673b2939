// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized fixed values for a run.
//!
//! Paths are relative to the working directory and are not configurable.

/// Input files, processed in this order by the sequential strategy.
pub const INPUT_FILES: [&str; 3] = ["1.txt", "2.txt", "3.txt"];

/// Shared output file. Opened in append mode, never truncated.
pub const OUTPUT_FILE: &str = "o.txt";

/// Terminator written after every transformed line.
#[cfg(windows)]
pub const LINE_ENDING: &[u8] = b"\r\n";

/// Terminator written after every transformed line.
#[cfg(not(windows))]
pub const LINE_ENDING: &[u8] = b"\n";
