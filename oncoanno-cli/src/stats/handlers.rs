use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use oncoanno_stats::scan_log_file;

pub fn run_stats(matches: &ArgMatches) -> Result<()> {
    let log_path = matches
        .get_one::<String>("log")
        .expect("A path to a run log is required.");

    let runs = scan_log_file(Path::new(log_path))
        .with_context(|| format!("Failed to scan run log: {}", log_path))?;

    let mut stdout = io::stdout().lock();
    for run in runs {
        writeln!(stdout, "{}", run)?;
    }

    Ok(())
}
