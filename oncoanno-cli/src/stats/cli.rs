use clap::{Arg, Command};

pub use oncoanno_stats::consts::STATS_CMD;

pub fn create_stats_cli() -> Command {
    Command::new(STATS_CMD)
        .about(
            "Extract total annotated variants, elapsed time and input file from captured \
             annotate run logs. Prints one tab-separated line per run.",
        )
        .arg(
            Arg::new("log")
                .required(true)
                .help("Captured stderr of one or more annotate runs"),
        )
}
