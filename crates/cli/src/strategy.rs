// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Concurrent and sequential orchestration over one [`RunPlan`].
//!
//! Both strategies append to the same output without truncating it and
//! time themselves with a [`Stopwatch`]. Per-file failures are logged and
//! recorded in the report; only a worker that cannot be spawned (or dies)
//! is fatal.

use std::fmt;
use std::io::BufWriter;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::defaults::{INPUT_FILES, OUTPUT_FILE};
use crate::error::{ProcessError, RunError};
use crate::sink::{Appender, LineSink, OutputLock};
use crate::timing::{Stopwatch, whole_millis};
use crate::worker::{self, FileOutcome};

/// Input files and the output they are appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
}

impl RunPlan {
    pub fn new(inputs: Vec<PathBuf>, output: PathBuf) -> Self {
        Self { inputs, output }
    }
}

impl Default for RunPlan {
    fn default() -> Self {
        Self::new(INPUT_FILES.iter().map(PathBuf::from).collect(), PathBuf::from(OUTPUT_FILE))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One worker thread per input file.
    Concurrent,
    /// Files processed one after another on the calling thread.
    Sequential,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Concurrent => write!(f, "with threads"),
            Strategy::Sequential => write!(f, "without threads"),
        }
    }
}

/// What one strategy did and how long it took.
#[derive(Debug)]
pub struct StrategyReport {
    pub strategy: Strategy,
    pub elapsed: Duration,
    pub files: Vec<FileOutcome>,
    /// Output failure that stopped the whole strategy (sequential only).
    pub output_error: Option<ProcessError>,
}

impl StrategyReport {
    fn new(strategy: Strategy) -> Self {
        Self { strategy, elapsed: Duration::ZERO, files: Vec::new(), output_error: None }
    }

    pub fn lines_written(&self) -> usize {
        self.files.iter().map(FileOutcome::lines).sum()
    }

    pub fn failed_files(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| !f.is_ok())
    }

    /// True when every file was processed and the output stayed writable.
    pub fn is_clean(&self) -> bool {
        self.output_error.is_none() && self.files.iter().all(FileOutcome::is_ok)
    }

    /// Human-readable timing line, e.g. `Time with threads: 12 ms`.
    pub fn summary_line(&self) -> String {
        format!("Time {}: {} ms", self.strategy, whole_millis(self.elapsed))
    }
}

/// Run one worker thread per input, all appending to `plan.output`.
///
/// Lines from one file keep their order; lines from different files may
/// interleave, but never within a line.
pub fn run_concurrent(plan: &RunPlan) -> Result<StrategyReport, RunError> {
    let mut report = StrategyReport::new(Strategy::Concurrent);
    let stopwatch = Stopwatch::start();
    let lock = OutputLock::new();

    report.files = thread::scope(|scope| -> Result<Vec<FileOutcome>, RunError> {
        let mut handles = Vec::with_capacity(plan.inputs.len());
        for (index, input) in plan.inputs.iter().enumerate() {
            let output = plan.output.as_path();
            let lock = &lock;
            let handle = thread::Builder::new()
                .name(format!("upcase-worker-{index}"))
                .spawn_scoped(scope, move || {
                    let outcome = FileOutcome::new(input, worker::run_locked(input, output, lock));
                    outcome.log();
                    outcome
                })
                .map_err(|source| RunError::SpawnWorker { input: input.clone(), source })?;
            tracing::debug!("spawned worker {} for {}", index, input.display());
            handles.push((input, handle));
        }

        handles
            .into_iter()
            .map(|(input, handle)| {
                handle.join().map_err(|_| RunError::WorkerPanicked { input: input.clone() })
            })
            .collect::<Result<Vec<_>, _>>()
    })?;

    report.elapsed = stopwatch.elapsed();
    Ok(report)
}

/// Process every input in plan order through one buffered writer.
///
/// There is a single producer, so no lock is taken. A missing input is
/// logged and skipped; an unopenable output ends the strategy.
pub fn run_sequential(plan: &RunPlan) -> StrategyReport {
    let mut report = StrategyReport::new(Strategy::Sequential);
    let stopwatch = Stopwatch::start();

    match worker::open_output(&plan.output) {
        Ok(file) => {
            let mut sink = Appender::new(BufWriter::new(file));
            for input in &plan.inputs {
                let result = worker::open_input(input).and_then(|reader| {
                    worker::transform_lines(reader, &mut sink, input, &plan.output)
                });
                let outcome = FileOutcome::new(input, result);
                outcome.log();
                report.files.push(outcome);
            }
            if let Err(source) = sink.finish() {
                let err = ProcessError::Write { path: plan.output.clone(), source };
                tracing::error!("{}", err);
                report.output_error = Some(err);
            }
        }
        Err(err) => {
            tracing::error!("{}", err);
            report.output_error = Some(err);
        }
    }

    report.elapsed = stopwatch.elapsed();
    report
}

#[cfg(test)]
#[path = "strategy_tests.rs"]
mod tests;
