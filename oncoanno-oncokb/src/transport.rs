//! HTTP transport used by the OncoKB client.
//!
//! The client only needs "send a GET, get back a status and a body". Keeping
//! that behind [`Transport`] lets the annotation logic run against scripted
//! responses in tests.

use std::time::Duration;

use thiserror::Error;

/// A GET request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
}

impl HttpRequest {
    /// Value of a query parameter, if present.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Any HTTP response, successful or not.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        self.status < 400
    }
}

/// The request never produced a response (timeout, DNS, refused connection, ...).
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct TransportError(pub String);

pub trait Transport {
    ///
    /// Issue a single GET request.
    ///
    /// Implementations must not retry and must return non-success statuses as
    /// an `Ok` response; `Err` is reserved for requests that got no response.
    ///
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

///
/// Blocking transport backed by a `ureq` agent.
///
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        UreqTransport {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl Transport for UreqTransport {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut call = self.agent.get(&request.url).timeout(request.timeout);
        for (key, value) in &request.query {
            call = call.query(key, value);
        }
        for (key, value) in &request.headers {
            call = call.set(key, value);
        }

        match call.call() {
            Ok(response) => read_response(response),
            // ureq reports 4xx/5xx as errors but they still carry a response
            Err(ureq::Error::Status(_, response)) => read_response(response),
            Err(ureq::Error::Transport(transport)) => Err(TransportError(transport.to_string())),
        }
    }
}

fn read_response(response: ureq::Response) -> Result<HttpResponse, TransportError> {
    let status = response.status();
    let reason = response.status_text().to_string();
    let body = response
        .into_string()
        .map_err(|e| TransportError(format!("Failed reading response body: {}", e)))?;

    Ok(HttpResponse {
        status,
        reason,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(200, true)]
    #[case(204, true)]
    #[case(401, false)]
    #[case(404, false)]
    #[case(503, false)]
    fn test_is_success(#[case] status: u16, #[case] expected: bool) {
        let response = HttpResponse {
            status,
            reason: String::new(),
            body: String::new(),
        };
        assert_eq!(response.is_success(), expected);
    }

    #[rstest]
    fn test_query_param() {
        let request = HttpRequest {
            url: "http://localhost".to_string(),
            query: vec![
                ("genomicLocation".to_string(), "7,1,1,A,T".to_string()),
                ("tumorType".to_string(), "Melanoma".to_string()),
            ],
            headers: vec![],
            timeout: Duration::from_secs(1),
        };

        assert_eq!(request.query_param("tumorType"), Some("Melanoma"));
        assert_eq!(request.query_param("referenceGenome"), None);
    }

    #[rstest]
    fn test_unreachable_host_is_a_transport_error() {
        // a port that was just released has no listener
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();

        let transport = UreqTransport::new();
        let request = HttpRequest {
            url: format!("http://{}/annotate", addr),
            query: vec![],
            headers: vec![],
            timeout: Duration::from_secs(2),
        };

        assert!(transport.get(&request).is_err());
    }
}
