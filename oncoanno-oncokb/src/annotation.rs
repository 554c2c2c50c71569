//! Per-variant annotation records written to `REPORTING.oncokb.<tier>`.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::client::{ApiFailure, LookupOutcome, mutation_effect_description};
use crate::consts::{KEY_API_REQUESTS, KEY_API_STATUS, KEY_VARIANT};

#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApiStatus {
    Ok,
    NotFound,
    ApiFailed,
    LowVaf,
}

///
/// Result of the lookup for one tumor type.
///
/// Found payloads are kept whole and get an `apiStatus` key; a failed lookup
/// only records the failure.
///
#[derive(Debug, Clone, PartialEq)]
pub enum TumorTypeAnnotation {
    Ok(Map<String, Value>),
    NotFound(Map<String, Value>),
    ApiFailed(ApiFailure),
}

impl TumorTypeAnnotation {
    pub fn status(&self) -> ApiStatus {
        match self {
            TumorTypeAnnotation::Ok(_) => ApiStatus::Ok,
            TumorTypeAnnotation::NotFound(_) => ApiStatus::NotFound,
            TumorTypeAnnotation::ApiFailed(_) => ApiStatus::ApiFailed,
        }
    }
}

impl From<LookupOutcome> for TumorTypeAnnotation {
    fn from(outcome: LookupOutcome) -> Self {
        match outcome {
            LookupOutcome::Failed(failure) => TumorTypeAnnotation::ApiFailed(failure),
            LookupOutcome::Found(payload) => {
                if mutation_effect_description(&payload).is_some() {
                    TumorTypeAnnotation::Ok(payload)
                } else {
                    TumorTypeAnnotation::NotFound(payload)
                }
            }
        }
    }
}

impl Serialize for TumorTypeAnnotation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TumorTypeAnnotation::Ok(payload) | TumorTypeAnnotation::NotFound(payload) => {
                let mut map = serializer.serialize_map(None)?;
                for (key, value) in payload.iter().filter(|(key, _)| *key != KEY_API_STATUS) {
                    map.serialize_entry(key, value)?;
                }
                map.serialize_entry(KEY_API_STATUS, &self.status())?;
                map.end()
            }
            TumorTypeAnnotation::ApiFailed(failure) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry(KEY_API_STATUS, &self.status())?;
                map.serialize_entry(KEY_API_REQUESTS, failure)?;
                map.end()
            }
        }
    }
}

///
/// Annotation of a single variant.
///
/// Serialized as one object: the source row under `variant` (debug runs only),
/// `apiStatus`, `apiRequests` when the pre-flight lookup failed, then one
/// entry per tumor type in configured order.
///
#[derive(Debug, Clone, PartialEq)]
pub struct VariantAnnotation {
    pub variant: Option<Vec<Value>>,
    pub status: ApiStatus,
    pub api_requests: Option<ApiFailure>,
    pub tumor_types: Vec<(String, TumorTypeAnnotation)>,
}

impl VariantAnnotation {
    pub fn new(status: ApiStatus) -> Self {
        VariantAnnotation {
            variant: None,
            status,
            api_requests: None,
            tumor_types: Vec::new(),
        }
    }

    pub fn tumor_type(&self, name: &str) -> Option<&TumorTypeAnnotation> {
        self.tumor_types
            .iter()
            .find(|(tumor_type, _)| tumor_type == name)
            .map(|(_, annotation)| annotation)
    }
}

impl Serialize for VariantAnnotation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(variant) = &self.variant {
            map.serialize_entry(KEY_VARIANT, variant)?;
        }
        map.serialize_entry(KEY_API_STATUS, &self.status)?;
        if let Some(failure) = &self.api_requests {
            map.serialize_entry(KEY_API_REQUESTS, failure)?;
        }
        for (tumor_type, annotation) in &self.tumor_types {
            map.serialize_entry(tumor_type, annotation)?;
        }
        map.end()
    }
}
