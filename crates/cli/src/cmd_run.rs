// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Default command: run both strategies over the fixed files.

use upcase::error::ExitCode;
use upcase::strategy::{self, RunPlan, StrategyReport};

/// Run the concurrent strategy, then the sequential one, and print timings.
///
/// File-level failures were already logged; they do not change the exit
/// code. Failing to spawn a worker aborts before anything is printed.
pub fn run() -> anyhow::Result<ExitCode> {
    let plan = RunPlan::default();

    let concurrent = strategy::run_concurrent(&plan)?;
    log_summary(&concurrent);
    let sequential = strategy::run_sequential(&plan);
    log_summary(&sequential);

    println!("{}", concurrent.summary_line());
    println!("{}", sequential.summary_line());
    Ok(ExitCode::Success)
}

fn log_summary(report: &StrategyReport) {
    tracing::debug!(
        "{}: {} lines, {} failed files",
        report.strategy,
        report.lines_written(),
        report.failed_files().count()
    );
}
