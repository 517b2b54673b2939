//! CLI argument parsing with clap derive.

use clap::Parser;

/// Uppercase 1.txt, 2.txt and 3.txt into o.txt, with and without threads,
/// and report how long each took
#[derive(Parser)]
#[command(name = "upcase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log per-file progress and worker lifecycle to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
