//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the upcase crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::{NamedTempFile, TempDir};

use crate::sink::LineSink;
use crate::strategy::RunPlan;

/// Sink that keeps every line in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub lines: Vec<Vec<u8>>,
}

impl LineSink for CollectingSink {
    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.lines.push(line.to_vec());
        Ok(())
    }
}

/// Creates a temp file with content using writeln! for each line.
pub fn temp_file_with_lines(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    file
}

/// Creates input files from (name, lines) pairs and returns a plan that
/// reads them in order and appends to `o.txt` in the same directory.
///
/// A `None` entry is added to the plan but never created on disk.
pub fn plan_in(root: &Path, inputs: &[(&str, Option<&[&str]>)]) -> RunPlan {
    let mut paths = Vec::with_capacity(inputs.len());
    for (name, lines) in inputs {
        let path = root.join(name);
        if let Some(lines) = lines {
            let mut content = String::new();
            for line in *lines {
                content.push_str(line);
                content.push('\n');
            }
            fs::write(&path, content).unwrap();
        }
        paths.push(path);
    }
    RunPlan::new(paths, root.join("o.txt"))
}

/// The three-file fixture: `["hello", "World"]`, `["FOO"]`, `["BarBaz", "qux"]`.
pub fn sample_plan() -> (TempDir, RunPlan) {
    let tmp = TempDir::new().unwrap();
    let plan = plan_in(
        tmp.path(),
        &[
            ("1.txt", Some(&["hello", "World"])),
            ("2.txt", Some(&["FOO"])),
            ("3.txt", Some(&["BarBaz", "qux"])),
        ],
    );
    (tmp, plan)
}

/// Read a text file and split it into lines, accepting either terminator.
pub fn output_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path).unwrap().lines().map(str::to_string).collect()
}
