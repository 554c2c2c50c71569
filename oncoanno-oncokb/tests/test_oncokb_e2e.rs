//! End-to-end tests: report document + local OncoKB stand-in → annotated report

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use oncoanno_core::Tier;
use oncoanno_oncokb::{
    AnnotateOptions, OncoKbClient, OncoKbConfig, TierCounts, UreqTransport, VariantAnnotator,
    annotate_document,
};

/// Request line and headers of one request seen by the stand-in server.
#[derive(Debug)]
struct SeenRequest {
    line: String,
    headers: Vec<String>,
}

/// Serve `n` requests, answering each with `respond(request_line)`.
fn serve(
    listener: TcpListener,
    n: usize,
    respond: fn(&str) -> (u16, &'static str, String),
) -> JoinHandle<Vec<SeenRequest>> {
    thread::spawn(move || {
        let mut seen = Vec::new();
        for stream in listener.incoming().take(n) {
            let mut stream = stream.unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let mut headers = Vec::new();
            loop {
                let mut header = String::new();
                reader.read_line(&mut header).unwrap();
                if header.trim().is_empty() {
                    break;
                }
                headers.push(header.trim().to_lowercase());
            }

            let (status, reason, body) = respond(&line);
            write!(
                stream,
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            )
            .unwrap();

            seen.push(SeenRequest {
                line: line.trim().to_string(),
                headers,
            });
        }
        seen
    })
}

fn description(text: &str) -> String {
    json!({"query": {"hugoSymbol": "TEST"}, "mutationEffect": {"description": text}}).to_string()
}

/// BRAF V600E is known; Melanoma has a tumor-specific answer and lung cancer
/// lookups fail on the server side.
fn oncokb_stand_in(line: &str) -> (u16, &'static str, String) {
    if line.contains("tumorType=Non-Small") {
        (503, "Service Unavailable", String::new())
    } else if line.contains("tumorType=Melanoma") {
        (200, "OK", description("BRAF V600E in melanoma."))
    } else if line.contains("140453136") {
        (200, "OK", description("Activating."))
    } else {
        (200, "OK", description(""))
    }
}

fn load_document() -> Value {
    let text = std::fs::read_to_string("tests/data/variants.json").unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn test_annotate_report_against_local_server() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/annotate", listener.local_addr().unwrap());
    // BRAF: pre-flight + 2 tumor types, KRAS, TP53, NRAS: pre-flight only
    let server = serve(listener, 6, oncokb_stand_in);

    let config = OncoKbConfig::try_from(Path::new("tests/data/config.json")).unwrap();
    let client =
        OncoKbClient::new(UreqTransport::new(), &config.api_key, config.timeout()).with_url(url);
    let annotator = VariantAnnotator::new(
        client,
        config.tumor_types.clone(),
        AnnotateOptions::default(),
    );

    let mut document = load_document();
    let summary = annotate_document(&mut document, &annotator).unwrap();
    let seen = server.join().unwrap();

    assert_eq!(seen.len(), 6);
    assert!(seen.iter().all(|r| r.line.contains("referenceGenome=GRCh38")));
    assert!(
        seen.iter()
            .all(|r| r.headers.contains(&"authorization: bearer test-token".to_string()))
    );

    assert_eq!(
        summary.counts(Tier::Pass),
        TierCounts {
            total: 3,
            skipped: 0,
            annotated: 1
        }
    );
    assert_eq!(
        summary.counts(Tier::Filtered),
        TierCounts {
            total: 2,
            skipped: 1,
            annotated: 0
        }
    );

    let pass = &document["REPORTING"]["oncokb"]["PASS"];
    assert_eq!(pass[0]["apiStatus"], json!("ok"));
    assert_eq!(pass[0]["Melanoma"]["apiStatus"], json!("ok"));
    assert_eq!(
        pass[0]["Melanoma"]["mutationEffect"]["description"],
        json!("BRAF V600E in melanoma.")
    );
    assert_eq!(
        pass[0]["Non-Small Cell Lung Cancer"],
        json!({
            "apiStatus": "api_failed",
            "apiRequests": {"status_code": 503, "reason": "Service Unavailable"}
        })
    );
    assert_eq!(pass[1], json!({"apiStatus": "not_found"}));
    assert_eq!(pass[2], json!({"apiStatus": "not_found"}));

    let filtered = &document["REPORTING"]["oncokb"]["Filtered"];
    assert_eq!(filtered[0], json!({"apiStatus": "low_vaf"}));
    assert_eq!(filtered[1], json!({"apiStatus": "not_found"}));
}

#[test]
fn test_report_keeps_input_key_order() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/annotate", listener.local_addr().unwrap());
    let server = serve(listener, 4, |_| (200, "OK", description("")));

    let client = OncoKbClient::new(UreqTransport::new(), "k", Duration::from_secs(5)).with_url(url);
    let annotator = VariantAnnotator::new(client, vec![], AnnotateOptions::default());

    let mut document = load_document();
    annotate_document(&mut document, &annotator).unwrap();
    server.join().unwrap();

    let keys: Vec<&String> = document.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["SAMPLE", "VARIANTS", "REPORTING"]);
}

#[test]
fn test_timeout_is_recorded_as_api_failed() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/annotate", listener.local_addr().unwrap());

    // accept the connection but never answer
    let server = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        thread::sleep(Duration::from_secs(3));
        drop(stream);
    });

    let client = OncoKbClient::new(UreqTransport::new(), "k", Duration::from_secs(1)).with_url(url);
    let annotator = VariantAnnotator::new(
        client,
        vec!["Melanoma".to_string()],
        AnnotateOptions::default(),
    );

    let mut document = json!({
        "VARIANTS": {"PASS": {
            "columns": ["type", "chrom", "pos", "ref", "alt"],
            "data": [["SNV", "chr7", 140453136, "A", "T"]]
        }}
    });
    let summary = annotate_document(&mut document, &annotator).unwrap();
    server.join().unwrap();

    let annotation = &document["REPORTING"]["oncokb"]["PASS"][0];
    assert_eq!(annotation["apiStatus"], json!("api_failed"));
    assert!(annotation["apiRequests"]["exception"].is_string());
    assert!(annotation.get("Melanoma").is_none());
    assert_eq!(summary.total_annotated(), 0);
}
