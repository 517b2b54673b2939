// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock timing for strategy runs.

use std::time::{Duration, Instant};

/// Monotonic stopwatch started at construction.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Truncate to whole milliseconds.
pub fn whole_millis(elapsed: Duration) -> u128 {
    elapsed.as_millis()
}

#[cfg(test)]
#[path = "timing_tests.rs"]
mod tests;
