// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Uppercase a fixed set of text files into one shared output file.
//!
//! The same work runs twice, once with one thread per file and once
//! sequentially, and each run is timed. [`worker::transform_lines`] is the
//! shared per-file loop; [`strategy`] decides how it is scheduled.

pub mod cli;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod sink;
pub mod strategy;
pub mod timing;
pub mod transform;
pub mod worker;

#[cfg(test)]
pub mod test_utils;
