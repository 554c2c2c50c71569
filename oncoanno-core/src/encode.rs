//! MAF-style genomic location encoding.
//!
//! OncoKB's `byGenomicChange` endpoint takes a location of the form
//! `chrom,start,end,ref,alt` where indels are written without the VCF anchor
//! base and the missing side is `-`. The variant class is decided from the
//! allele lengths alone; the declared [`VariantType`] must agree with it.
//!
//! Complex substitutions (both alleles longer than one base) are passed through
//! unchanged with `end = pos + len(alt) - 1`. This matches OncoKB for
//! DNP/TNP/ONP but is known not to resolve when `len(ref) != len(alt)`.

use std::fmt::{self, Display};

use crate::consts::{CHROM_PREFIX, EMPTY_ALLELE, NUCLEOTIDES};
use crate::errors::EncodeError;
use crate::models::variant::{Variant, VariantType};

/// Variant class implied by the allele lengths.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum VariantClass {
    Substitution,
    Deletion,
    Insertion,
    Complex,
}

impl VariantClass {
    pub fn from_alleles(ref_allele: &str, alt_allele: &str) -> Self {
        match (ref_allele.len(), alt_allele.len()) {
            (1, 1) => VariantClass::Substitution,
            (r, 1) if r > 1 => VariantClass::Deletion,
            (1, a) if a > 1 => VariantClass::Insertion,
            _ => VariantClass::Complex,
        }
    }

    /// The declared type this class requires, if any.
    pub fn required_type(&self) -> Option<VariantType> {
        match self {
            VariantClass::Substitution => Some(VariantType::Snv),
            VariantClass::Deletion | VariantClass::Insertion => Some(VariantType::Indel),
            VariantClass::Complex => None,
        }
    }
}

impl Display for VariantClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VariantClass::Substitution => "substitution",
            VariantClass::Deletion => "deletion",
            VariantClass::Insertion => "insertion",
            VariantClass::Complex => "complex substitution",
        };
        write!(f, "{}", name)
    }
}

///
/// A genomic location as expected by OncoKB.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct MafLocation {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
    pub ref_allele: String,
    pub alt_allele: String,
}

impl MafLocation {
    ///
    /// Get the comma-separated query string of the location
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.chrom, self.start, self.end, self.ref_allele, self.alt_allele
        )
    }
}

impl Display for MafLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

///
/// Encode a variant as a MAF-style location.
///
/// # Arguments
/// - variant: the variant with VCF-style alleles
///
/// # Returns
/// - the location, or an error if the alleles are malformed or contradict the
///   declared type
///
pub fn encode(variant: &Variant) -> Result<MafLocation, EncodeError> {
    let Variant {
        kind,
        chrom,
        pos,
        ref_allele,
        alt_allele,
    } = variant;
    let pos = *pos;

    if ref_allele.is_empty() || alt_allele.is_empty() {
        return Err(EncodeError::EmptyAllele {
            chrom: chrom.clone(),
            pos,
        });
    }

    for allele in [ref_allele, alt_allele] {
        if !is_nucleotides(allele) {
            return Err(EncodeError::InvalidAllele {
                chrom: chrom.clone(),
                pos,
                allele: allele.clone(),
            });
        }
    }

    let class = VariantClass::from_alleles(ref_allele, alt_allele);
    if let Some(required) = class.required_type() {
        if required != *kind {
            return Err(EncodeError::TypeMismatch {
                declared: kind.to_string(),
                implied: class.to_string(),
                chrom: chrom.clone(),
                pos,
                ref_allele: ref_allele.clone(),
                alt_allele: alt_allele.clone(),
            });
        }
    }

    let overflow = || EncodeError::PositionOverflow {
        chrom: chrom.clone(),
        pos,
    };
    // last position covered by `len` bases starting at pos
    let end_at = |len: usize| pos.checked_add(len as u64 - 1).ok_or_else(overflow);

    let (start, end, maf_ref, maf_alt) = match class {
        VariantClass::Substitution => (pos, pos, ref_allele.as_str(), alt_allele.as_str()),
        VariantClass::Deletion => (
            pos.checked_add(1).ok_or_else(overflow)?,
            end_at(ref_allele.len())?,
            &ref_allele[1..],
            EMPTY_ALLELE,
        ),
        VariantClass::Insertion => (
            pos,
            pos.checked_add(1).ok_or_else(overflow)?,
            EMPTY_ALLELE,
            &alt_allele[1..],
        ),
        VariantClass::Complex => (
            pos,
            end_at(alt_allele.len())?,
            ref_allele.as_str(),
            alt_allele.as_str(),
        ),
    };

    Ok(MafLocation {
        chrom: strip_chrom_prefix(chrom).to_string(),
        start,
        end,
        ref_allele: maf_ref.to_string(),
        alt_allele: maf_alt.to_string(),
    })
}

fn is_nucleotides(allele: &str) -> bool {
    allele.bytes().all(|b| NUCLEOTIDES.contains(&b))
}

/// `chr7` -> `7`; labels without the prefix are returned as is.
pub fn strip_chrom_prefix(chrom: &str) -> &str {
    chrom.strip_prefix(CHROM_PREFIX).unwrap_or(chrom)
}
