use std::fmt::{self, Display};
use std::str::FromStr;

use crate::consts::{VARIANT_TYPE_INDEL, VARIANT_TYPE_SNV};
use crate::errors::VariantError;

///
/// Variant type as declared by the caller.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub enum VariantType {
    Snv,
    Indel,
}

impl VariantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantType::Snv => VARIANT_TYPE_SNV,
            VariantType::Indel => VARIANT_TYPE_INDEL,
        }
    }
}

impl Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VariantType {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            VARIANT_TYPE_SNV => Ok(VariantType::Snv),
            VARIANT_TYPE_INDEL => Ok(VariantType::Indel),
            _ => Err(VariantError::UnknownType(s.to_string())),
        }
    }
}

///
/// Typed view of the positional fields of one variant row.
///
/// `pos` is the 1-based position of the first reference base, and both
/// alleles are VCF-style, i.e. indels carry the shared anchor base.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Variant {
    pub kind: VariantType,
    pub chrom: String,
    pub pos: u64,
    pub ref_allele: String,
    pub alt_allele: String,
}

impl Variant {
    pub fn new(
        kind: VariantType,
        chrom: impl Into<String>,
        pos: u64,
        ref_allele: impl Into<String>,
        alt_allele: impl Into<String>,
    ) -> Self {
        Variant {
            kind,
            chrom: chrom.into(),
            pos,
            ref_allele: ref_allele.into(),
            alt_allele: alt_allele.into(),
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}:{} {}>{}",
            self.kind, self.chrom, self.pos, self.ref_allele, self.alt_allele
        )
    }
}
