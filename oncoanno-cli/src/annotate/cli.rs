use clap::{Arg, ArgAction, Command, value_parser};

pub use oncoanno_oncokb::consts::ANNOTATE_CMD;

pub fn create_annotate_cli() -> Command {
    Command::new(ANNOTATE_CMD)
        .about(
            "Iterate over all VARIANTS of a report and add OncoKB annotation when available. \
             The annotated report is written to stdout.",
        )
        .arg(
            Arg::new("config")
                .required(true)
                .help("Configuration file (JSON) with the OncoKB API key, timeout and tumor types"),
        )
        .arg(
            Arg::new("json")
                .required(true)
                .help("Report (JSON) with a VARIANTS section"),
        )
        .arg(
            Arg::new("min-filtered-vaf")
                .long("min-filtered-vaf")
                .short('m')
                .value_parser(value_parser!(f64))
                .default_value("1.0")
                .help("Minimum VAF to annotate Filtered variants"),
        )
        .arg(
            Arg::new("include-variant")
                .long("include-variant")
                .action(ArgAction::SetTrue)
                .help("Store variant information in oncokb entry"),
        )
}
