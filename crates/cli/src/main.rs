// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_run;

use clap::Parser;

use upcase::cli::Cli;
use upcase::error::{ExitCode, RunError};
use upcase::logging;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cmd_run::run() {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("Error: {err:#}");
            err.downcast_ref::<RunError>().map_or(ExitCode::ResourceFailure, ExitCode::from).into()
        }
    }
}
