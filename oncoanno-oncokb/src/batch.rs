//! Annotation of a whole report document.

use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use serde::Deserialize;
use serde_json::{Map, Value};

use oncoanno_core::{ColumnSchema, Tier};

use crate::annotator::{TierCounts, VariantAnnotator};
use crate::consts::{KEY_ONCOKB, KEY_REPORTING, KEY_VARIANTS};
use crate::transport::Transport;

/// One tier under `VARIANTS`.
#[derive(Deserialize, Debug)]
struct TierBucket {
    columns: Vec<String>,
    #[serde(default)]
    data: Vec<Vec<Value>>,
}

///
/// Counters of a finished run, per tier in processing order.
///
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub tiers: Vec<(Tier, TierCounts)>,
}

impl RunSummary {
    pub fn counts(&self, tier: Tier) -> TierCounts {
        self.tiers
            .iter()
            .find(|(t, _)| *t == tier)
            .map(|(_, counts)| *counts)
            .unwrap_or_default()
    }

    pub fn total_annotated(&self) -> usize {
        self.tiers.iter().map(|(_, counts)| counts.annotated).sum()
    }

    ///
    /// Summary lines, e.g. `Total PASS: 12` ... `Total Annotated: 5`.
    ///
    /// `Total Annotated` is scraped from run logs, keep the wording stable.
    ///
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.tiers.len() * 3 + 1);
        for (tier, counts) in &self.tiers {
            lines.push(format!("Total {}: {}", tier, counts.total));
            lines.push(format!("Skipped {}: {}", tier, counts.skipped));
            lines.push(format!("Annotated {}: {}", tier, counts.annotated));
        }
        lines.push(format!("Total Annotated: {}", self.total_annotated()));
        lines
    }

    pub fn log(&self) {
        for line in self.lines() {
            info!("{}", line);
        }
    }
}

///
/// Annotate every tier of a report document in place.
///
/// Tiers are processed `PASS` first, then `Filtered`. A tier that is missing
/// or an empty object is skipped and gets no reporting entry. Annotations are
/// written to `REPORTING.oncokb.<tier>` in input order.
///
/// # Arguments
/// - document: the parsed report, with a top-level `VARIANTS` object
/// - annotator: the configured annotator
///
/// # Returns
/// - the run counters; an error if the document or a variant is malformed
///
pub fn annotate_document<T: Transport>(
    document: &mut Value,
    annotator: &VariantAnnotator<T>,
) -> Result<RunSummary> {
    let mut summary = RunSummary { tiers: Vec::new() };

    for tier in Tier::ALL {
        let mut counts = TierCounts::default();
        info!("Fetching OncoKB for {}", tier);

        let Some(bucket) = read_bucket(document, tier)? else {
            summary.tiers.push((tier, counts));
            continue;
        };

        let schema = ColumnSchema::from_columns(&bucket.columns)
            .with_context(|| format!("Invalid columns for tier {}", tier))?;

        let pb = progress_bar(tier, bucket.data.len())?;
        let mut annotations = Vec::with_capacity(bucket.data.len());
        for (i, row) in bucket.data.iter().enumerate() {
            let annotation = annotator
                .annotate(tier, &schema, row, &mut counts)
                .with_context(|| format!("Failed to annotate {} variant #{}", tier, i + 1))?;
            annotations.push(annotation);
            pb.inc(1);
        }
        pb.finish_and_clear();

        let tier_reporting = serde_json::to_value(&annotations)?;
        oncokb_section(document)?.insert(tier.to_string(), tier_reporting);
        summary.tiers.push((tier, counts));
    }

    Ok(summary)
}

fn read_bucket(document: &Value, tier: Tier) -> Result<Option<TierBucket>> {
    let variants = document
        .get(KEY_VARIANTS)
        .and_then(Value::as_object)
        .ok_or_else(|| anyhow!("Input document has no {} object", KEY_VARIANTS))?;

    match variants.get(tier.as_str()) {
        None => Ok(None),
        Some(Value::Object(bucket)) if bucket.is_empty() => Ok(None),
        Some(bucket) => TierBucket::deserialize(bucket)
            .map(Some)
            .with_context(|| format!("Invalid {} tier in {}", tier, KEY_VARIANTS)),
    }
}

/// `REPORTING.oncokb`, created if absent.
fn oncokb_section(document: &mut Value) -> Result<&mut Map<String, Value>> {
    let root = document
        .as_object_mut()
        .ok_or_else(|| anyhow!("Input document is not a JSON object"))?;

    let reporting = root
        .entry(KEY_REPORTING)
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| anyhow!("{} is not a JSON object", KEY_REPORTING))?;

    reporting
        .entry(KEY_ONCOKB)
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| anyhow!("{}.{} is not a JSON object", KEY_REPORTING, KEY_ONCOKB))
}

fn progress_bar(tier: Tier, len: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")?,
    );
    pb.set_message(format!("{} variants", tier));
    Ok(pb)
}
