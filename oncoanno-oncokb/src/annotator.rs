//! Per-variant annotation.
//!
//! For each variant:
//!
//! 1. Filtered variants below the minimum VAF are marked `low_vaf` without any
//!    lookup.
//! 2. A tumor-agnostic lookup decides whether the variant is known at all. A
//!    failed lookup gives `api_failed`, an empty mutation effect description
//!    gives `not_found`; both stop here.
//! 3. Known variants (`ok`) get one lookup per configured tumor type. Each
//!    tumor type is classified on its own and never changes the variant status.

use log::debug;
use serde_json::Value;
use thiserror::Error;

use oncoanno_core::{ColumnSchema, EncodeError, Tier, VariantError, encode};

use crate::annotation::{ApiStatus, TumorTypeAnnotation, VariantAnnotation};
use crate::client::{LookupOutcome, OncoKbClient, mutation_effect_description};
use crate::consts::DEFAULT_MIN_FILTERED_VAF;
use crate::transport::Transport;

/// Malformed input; aborts the run.
#[derive(Error, Debug, PartialEq)]
pub enum AnnotateError {
    #[error(transparent)]
    Variant(#[from] VariantError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnnotateOptions {
    /// Filtered variants below this VAF (percent) are not looked up.
    pub min_filtered_vaf: f64,
    /// Embed the source row in each annotation.
    pub include_variant: bool,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        AnnotateOptions {
            min_filtered_vaf: DEFAULT_MIN_FILTERED_VAF,
            include_variant: false,
        }
    }
}

/// Run counters of one tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierCounts {
    pub total: usize,
    pub skipped: usize,
    pub annotated: usize,
}

pub struct VariantAnnotator<T: Transport> {
    client: OncoKbClient<T>,
    tumor_types: Vec<String>,
    options: AnnotateOptions,
}

impl<T: Transport> VariantAnnotator<T> {
    pub fn new(client: OncoKbClient<T>, tumor_types: Vec<String>, options: AnnotateOptions) -> Self {
        VariantAnnotator {
            client,
            tumor_types,
            options,
        }
    }

    pub fn client(&self) -> &OncoKbClient<T> {
        &self.client
    }

    ///
    /// Annotate one variant row and update the tier counters.
    ///
    /// The row is encoded before the VAF gate, so a malformed row aborts the
    /// run even if it would have been skipped.
    ///
    /// # Arguments
    /// - tier: tier the row belongs to
    /// - schema: column schema of the tier
    /// - row: the variant row
    /// - counts: counters of the tier
    ///
    pub fn annotate(
        &self,
        tier: Tier,
        schema: &ColumnSchema,
        row: &[Value],
        counts: &mut TierCounts,
    ) -> Result<VariantAnnotation, AnnotateError> {
        counts.total += 1;

        let variant = schema.variant(row)?;
        let genomic_location = encode(&variant)?.to_string();

        let mut annotation = VariantAnnotation::new(ApiStatus::Ok);
        if self.options.include_variant {
            annotation.variant = Some(row.to_vec());
        }

        if tier.is_vaf_gated() {
            let vaf = schema.vaf(row)?;
            if vaf < self.options.min_filtered_vaf {
                debug!("Failed VAF filter: {} ({})", vaf, variant);
                annotation.status = ApiStatus::LowVaf;
                counts.skipped += 1;
                return Ok(annotation);
            }
        }

        match self.client.lookup(&genomic_location, None) {
            LookupOutcome::Failed(failure) => {
                annotation.status = ApiStatus::ApiFailed;
                annotation.api_requests = Some(failure);
                return Ok(annotation);
            }
            LookupOutcome::Found(payload) => {
                if mutation_effect_description(&payload).is_none() {
                    annotation.status = ApiStatus::NotFound;
                    return Ok(annotation);
                }
            }
        }
        counts.annotated += 1;

        for tumor_type in &self.tumor_types {
            let outcome = self.client.lookup(&genomic_location, Some(tumor_type.as_str()));
            annotation
                .tumor_types
                .push((tumor_type.clone(), TumorTypeAnnotation::from(outcome)));
        }

        Ok(annotation)
    }
}
