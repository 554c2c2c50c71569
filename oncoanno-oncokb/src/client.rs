//! OncoKB `byGenomicChange` client.
//!
//! A lookup is a single request with no retry. Transport errors and
//! non-success responses are not propagated; they come back as
//! [`LookupOutcome::Failed`] so the caller can record them next to the variant
//! and move on.

use std::time::Duration;

use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::consts::{
    KEY_DESCRIPTION, KEY_MUTATION_EFFECT, ONCOKB_API_URL, PARAM_GENOMIC_LOCATION,
    PARAM_REFERENCE_GENOME, PARAM_TUMOR_TYPE, REFERENCE_GENOME,
};
use crate::transport::{HttpRequest, Transport};

/// Why a lookup produced no payload.
///
/// Serializes as `{"exception": ...}` or `{"status_code": ..., "reason": ...}`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ApiFailure {
    Exception { exception: String },
    Status { status_code: u16, reason: String },
}

/// Result of one lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(Map<String, Value>),
    Failed(ApiFailure),
}

///
/// `mutationEffect.description` of an OncoKB payload, if present and non-empty.
///
/// OncoKB answers unknown variants with a regular payload whose description is
/// empty, so this is what separates "found" from "not found".
///
pub fn mutation_effect_description(payload: &Map<String, Value>) -> Option<&str> {
    payload
        .get(KEY_MUTATION_EFFECT)
        .and_then(|effect| effect.get(KEY_DESCRIPTION))
        .and_then(Value::as_str)
        .filter(|description| !description.is_empty())
}

pub struct OncoKbClient<T: Transport> {
    transport: T,
    url: String,
    api_key: String,
    timeout: Duration,
}

impl<T: Transport> OncoKbClient<T> {
    pub fn new(transport: T, api_key: impl Into<String>, timeout: Duration) -> Self {
        OncoKbClient {
            transport,
            url: ONCOKB_API_URL.to_string(),
            api_key: api_key.into(),
            timeout,
        }
    }

    /// Point the client at another endpoint, e.g. a mirror or a test server.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    ///
    /// Build the request for a lookup without sending it.
    ///
    pub fn request(&self, genomic_location: &str, tumor_type: Option<&str>) -> HttpRequest {
        let mut query = vec![
            (PARAM_GENOMIC_LOCATION.to_string(), genomic_location.to_string()),
            (PARAM_REFERENCE_GENOME.to_string(), REFERENCE_GENOME.to_string()),
        ];
        if let Some(tumor_type) = tumor_type {
            query.push((PARAM_TUMOR_TYPE.to_string(), tumor_type.to_string()));
        }

        HttpRequest {
            url: self.url.clone(),
            query,
            headers: vec![
                ("accept".to_string(), "application/json".to_string()),
                ("authorization".to_string(), format!("Bearer {}", self.api_key)),
            ],
            timeout: self.timeout,
        }
    }

    ///
    /// Look up a genomic location, optionally for a single tumor type.
    ///
    /// # Arguments
    /// - genomic_location: MAF-style `chrom,start,end,ref,alt`
    /// - tumor_type: OncoKB tumor type, or `None` for a tumor-agnostic lookup
    ///
    pub fn lookup(&self, genomic_location: &str, tumor_type: Option<&str>) -> LookupOutcome {
        let request = self.request(genomic_location, tumor_type);
        debug!(
            "OncoKB lookup {} (tumor type: {})",
            genomic_location,
            tumor_type.unwrap_or("any")
        );

        let response = match self.transport.get(&request) {
            Ok(response) => response,
            Err(e) => {
                return LookupOutcome::Failed(ApiFailure::Exception {
                    exception: e.to_string(),
                });
            }
        };

        if !response.is_success() {
            return LookupOutcome::Failed(ApiFailure::Status {
                status_code: response.status,
                reason: response.reason,
            });
        }

        match serde_json::from_str::<Value>(&response.body) {
            Ok(Value::Object(payload)) => LookupOutcome::Found(payload),
            Ok(other) => LookupOutcome::Failed(ApiFailure::Exception {
                exception: format!("Expected a JSON object from OncoKB, got: {}", other),
            }),
            Err(e) => LookupOutcome::Failed(ApiFailure::Exception {
                exception: format!("Failed to decode OncoKB response: {}", e),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::json;

    use crate::transport::{HttpResponse, TransportError};

    /// Answers every request with the same result.
    struct FixedTransport(Result<HttpResponse, TransportError>);

    impl Transport for FixedTransport {
        fn get(&self, _request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            self.0.clone()
        }
    }

    fn ok(body: &str) -> FixedTransport {
        FixedTransport(Ok(HttpResponse {
            status: 200,
            reason: "OK".to_string(),
            body: body.to_string(),
        }))
    }

    fn client(transport: FixedTransport) -> OncoKbClient<FixedTransport> {
        OncoKbClient::new(transport, "secret", Duration::from_secs(30))
    }

    #[rstest]
    fn test_request_without_tumor_type() {
        let request = client(ok("{}")).request("7,140453136,140453136,A,T", None);

        assert_eq!(request.url, ONCOKB_API_URL);
        assert_eq!(
            request.query_param("genomicLocation"),
            Some("7,140453136,140453136,A,T")
        );
        assert_eq!(request.query_param("referenceGenome"), Some("GRCh38"));
        assert_eq!(request.query_param("tumorType"), None);
        assert_eq!(request.timeout, Duration::from_secs(30));
        assert!(
            request
                .headers
                .contains(&("authorization".to_string(), "Bearer secret".to_string()))
        );
    }

    #[rstest]
    fn test_request_with_tumor_type() {
        let request = client(ok("{}")).request("1,101,102,TG,-", Some("Melanoma"));
        assert_eq!(request.query_param("tumorType"), Some("Melanoma"));
    }

    #[rstest]
    fn test_with_url() {
        let request = client(ok("{}"))
            .with_url("http://localhost:8080/annotate")
            .request("1,1,1,A,T", None);
        assert_eq!(request.url, "http://localhost:8080/annotate");
    }

    #[rstest]
    fn test_found() {
        let body = r#"{"query": {}, "mutationEffect": {"description": "Activating."}}"#;
        let outcome = client(ok(body)).lookup("7,1,1,A,T", None);

        match outcome {
            LookupOutcome::Found(payload) => {
                assert_eq!(mutation_effect_description(&payload), Some("Activating."))
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[rstest]
    fn test_transport_error_is_returned_as_data() {
        let transport = FixedTransport(Err(TransportError("timed out".to_string())));
        let outcome = client(transport).lookup("7,1,1,A,T", None);

        assert_eq!(
            outcome,
            LookupOutcome::Failed(ApiFailure::Exception {
                exception: "timed out".to_string()
            })
        );
    }

    #[rstest]
    fn test_http_error_is_returned_as_data() {
        let transport = FixedTransport(Ok(HttpResponse {
            status: 401,
            reason: "Unauthorized".to_string(),
            body: String::new(),
        }));
        let outcome = client(transport).lookup("7,1,1,A,T", None);

        assert_eq!(
            outcome,
            LookupOutcome::Failed(ApiFailure::Status {
                status_code: 401,
                reason: "Unauthorized".to_string()
            })
        );
    }

    #[rstest]
    #[case("not json")]
    #[case("[1, 2]")]
    fn test_undecodable_body(#[case] body: &str) {
        let outcome = client(ok(body)).lookup("7,1,1,A,T", None);
        assert!(matches!(
            outcome,
            LookupOutcome::Failed(ApiFailure::Exception { .. })
        ));
    }

    #[rstest]
    #[case(json!({"mutationEffect": {"description": ""}}))]
    #[case(json!({"mutationEffect": {"description": null}}))]
    #[case(json!({"mutationEffect": {}}))]
    #[case(json!({}))]
    fn test_missing_description(#[case] payload: Value) {
        let payload = payload.as_object().cloned().unwrap();
        assert_eq!(mutation_effect_description(&payload), None);
    }

    #[rstest]
    fn test_api_failure_serialization() {
        let exception = ApiFailure::Exception {
            exception: "timed out".to_string(),
        };
        let status = ApiFailure::Status {
            status_code: 503,
            reason: "Service Unavailable".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&exception).unwrap(),
            json!({"exception": "timed out"})
        );
        assert_eq!(
            serde_json::to_value(&status).unwrap(),
            json!({"status_code": 503, "reason": "Service Unavailable"})
        );
    }
}
