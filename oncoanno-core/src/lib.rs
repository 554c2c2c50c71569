//! # oncoanno-core
//!
//! Data model shared by the oncoanno tools:
//!
//! - confidence tiers (`PASS`, `Filtered`)
//! - per-tier column schemas and typed access to variant rows
//! - encoding of a variant into the MAF-style `chrom,start,end,ref,alt`
//!   string used by the OncoKB `byGenomicChange` endpoint

pub mod consts;
pub mod encode;
pub mod errors;
pub mod models;

pub use encode::{MafLocation, VariantClass, encode};
pub use errors::{EncodeError, VariantError};
pub use models::{ColumnSchema, Tier, Variant, VariantType};
