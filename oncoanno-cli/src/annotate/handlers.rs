use std::fs::read_to_string;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use log::{debug, error, info};
use serde_json::Value;

use oncoanno_oncokb::{
    AnnotateOptions, ConfigError, OncoKbClient, OncoKbConfig, UreqTransport, VariantAnnotator,
    annotate_document,
};

/// Load and validate the configuration, logging every problem found.
fn load_config(path: &str) -> Result<OncoKbConfig> {
    match OncoKbConfig::try_from(Path::new(path)) {
        Ok(config) => Ok(config),
        Err(ConfigError::Invalid(problems)) => {
            for problem in &problems {
                error!("{}", problem);
            }
            bail!("Invalid configuration file: {}", path)
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read configuration file: {}", path)),
    }
}

pub fn run_annotate(matches: &ArgMatches) -> Result<()> {
    let config_path = matches
        .get_one::<String>("config")
        .expect("A path to a config file is required.");

    let json_path = matches
        .get_one::<String>("json")
        .expect("A path to a JSON report is required.");

    let options = AnnotateOptions {
        min_filtered_vaf: *matches
            .get_one::<f64>("min-filtered-vaf")
            .expect("min-filtered-vaf has a default"),
        include_variant: matches.get_flag("include-variant"),
    };
    debug!("Annotation options: {:?}", options);

    info!("Config file: {}", config_path);
    let config = load_config(config_path)?;
    info!("tumor_types_n: {}", config.tumor_types.len());

    info!("Input file: {}", json_path);
    let json_str = read_to_string(json_path)
        .with_context(|| format!("Failed to read input file: {}", json_path))?;
    let mut document: Value = serde_json::from_str(&json_str)
        .with_context(|| format!("Input file is not valid JSON: {}", json_path))?;

    let timeout = config.timeout();
    let client = OncoKbClient::new(UreqTransport::new(), config.api_key, timeout);
    let annotator = VariantAnnotator::new(client, config.tumor_types, options);

    let summary = annotate_document(&mut document, &annotator)?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &document)?;
    writeln!(stdout)?;
    stdout.flush()?;

    summary.log();

    Ok(())
}
