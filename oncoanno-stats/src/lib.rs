//! # Run log statistics
//!
//! Scrapes captured stderr of `oncoanno annotate` runs (optionally wrapped in
//! GNU `time -v`) and reports, per run, the total number of annotated variants,
//! the wall clock time and the input file.
//!
//! A log may hold several runs back to back; the n-th `Total Annotated` line is
//! paired with the n-th `Elapsed` and `Input file` lines.

use std::fmt::{self, Display};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use regex::Regex;
use thiserror::Error;

pub mod consts {
    pub const STATS_CMD: &str = "stats";

    pub const MARKER_INPUT_FILE: &str = "Input file";
    pub const MARKER_TOTAL_ANNOTATED: &str = "Total Annotated";
    pub const MARKER_ELAPSED: &str = "Elapsed";

    pub const PATTERN_INPUT_FILE: &str = r"Input file: (.+)";
    pub const PATTERN_TOTAL_ANNOTATED: &str = r"Total Annotated: (\d+)";
    pub const PATTERN_ELAPSED: &str = r"\(h:mm:ss or m:ss\): (.+)";
}

use consts::*;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Could not parse input file (line {0})")]
    InputFile(usize),
    #[error("Could not parse total annotated (line {0})")]
    TotalAnnotated(usize),
    #[error("Could not parse elapsed time (line {0})")]
    Elapsed(usize),
    #[error("Run {run} has no matching {field} entry")]
    MissingEntry { run: usize, field: &'static str },
    #[error("Regex compilation error: {0}")]
    Regex(#[from] regex::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Statistics of one annotation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub total_annotated: u64,
    pub elapsed: String,
    pub input_file: String,
}

impl Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            self.total_annotated, self.elapsed, self.input_file
        )
    }
}

struct LogPatterns {
    input_file: Regex,
    total_annotated: Regex,
    elapsed: Regex,
}

impl LogPatterns {
    fn new() -> Result<Self, StatsError> {
        Ok(LogPatterns {
            input_file: Regex::new(PATTERN_INPUT_FILE)?,
            total_annotated: Regex::new(PATTERN_TOTAL_ANNOTATED)?,
            elapsed: Regex::new(PATTERN_ELAPSED)?,
        })
    }
}

fn capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

///
/// Scan a run log.
///
/// # Arguments
/// - reader: the log, read line by line
///
/// # Returns
/// - one entry per `Total Annotated` line, in log order
///
pub fn scan_log<R: BufRead>(reader: R) -> Result<Vec<RunStats>, StatsError> {
    let patterns = LogPatterns::new()?;

    let mut input_files = Vec::new();
    let mut totals = Vec::new();
    let mut elapsed = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        let line_no = i + 1;

        if line.contains(MARKER_INPUT_FILE) {
            let input_file =
                capture(&patterns.input_file, line).ok_or(StatsError::InputFile(line_no))?;
            input_files.push(input_file.to_string());
        } else if line.contains(MARKER_TOTAL_ANNOTATED) {
            let total = capture(&patterns.total_annotated, line)
                .and_then(|n| n.parse::<u64>().ok())
                .ok_or(StatsError::TotalAnnotated(line_no))?;
            totals.push(total);
        } else if line.contains(MARKER_ELAPSED) {
            let time = capture(&patterns.elapsed, line).ok_or(StatsError::Elapsed(line_no))?;
            elapsed.push(time.to_string());
        }
    }

    debug!(
        "Found {} input files, {} totals, {} elapsed times",
        input_files.len(),
        totals.len(),
        elapsed.len()
    );

    totals
        .into_iter()
        .enumerate()
        .map(|(run, total_annotated)| -> Result<RunStats, StatsError> {
            let elapsed = elapsed.get(run).ok_or(StatsError::MissingEntry {
                run: run + 1,
                field: MARKER_ELAPSED,
            })?;
            let input_file = input_files.get(run).ok_or(StatsError::MissingEntry {
                run: run + 1,
                field: MARKER_INPUT_FILE,
            })?;
            Ok(RunStats {
                total_annotated,
                elapsed: elapsed.clone(),
                input_file: input_file.clone(),
            })
        })
        .collect()
}

/// Scan a run log file.
pub fn scan_log_file(path: &Path) -> Result<Vec<RunStats>, StatsError> {
    let file = File::open(path)?;
    scan_log(BufReader::new(file))
}
