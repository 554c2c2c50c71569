//! # OncoKB annotation
//!
//! Annotates the variants of a report document with OncoKB data:
//!
//! - [`config`]: the OncoKB section of the run configuration
//! - [`transport`]: the HTTP capability, with a blocking `ureq` implementation
//! - [`client`]: a single `byGenomicChange` lookup, failures returned as data
//! - [`annotator`]: the per-variant pre-flight and tumor-type fan-out
//! - [`batch`]: iteration over tiers and write-back into the document

pub mod annotation;
pub mod annotator;
pub mod batch;
pub mod client;
pub mod config;
pub mod consts;
pub mod transport;

pub use annotation::{ApiStatus, TumorTypeAnnotation, VariantAnnotation};
pub use annotator::{AnnotateError, AnnotateOptions, TierCounts, VariantAnnotator};
pub use batch::{RunSummary, annotate_document};
pub use client::{ApiFailure, LookupOutcome, OncoKbClient};
pub use config::{ConfigError, OncoKbConfig};
pub use transport::{HttpRequest, HttpResponse, Transport, TransportError, UreqTransport};
