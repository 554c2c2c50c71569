use thiserror::Error;

/// Structural problems with a tier schema or a variant row.
#[derive(Error, Debug, PartialEq)]
pub enum VariantError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Variant row has no value for column {column} (index {index})")]
    MissingField { column: String, index: usize },

    #[error("Invalid value for column {column}: {value}")]
    InvalidField { column: String, value: String },

    #[error("Unknown variant type: {0}")]
    UnknownType(String),
}

/// A variant that cannot be encoded into a genomic location.
#[derive(Error, Debug, PartialEq)]
pub enum EncodeError {
    #[error(
        "Type mismatch: {declared} declared for {chrom}:{pos} {ref_allele}>{alt_allele}, alleles imply {implied}"
    )]
    TypeMismatch {
        declared: String,
        implied: String,
        chrom: String,
        pos: u64,
        ref_allele: String,
        alt_allele: String,
    },

    #[error("Empty allele at {chrom}:{pos}")]
    EmptyAllele { chrom: String, pos: u64 },

    #[error("Invalid allele at {chrom}:{pos}: {allele}")]
    InvalidAllele {
        chrom: String,
        pos: u64,
        allele: String,
    },

    #[error("Position out of range at {chrom}:{pos}")]
    PositionOverflow { chrom: String, pos: u64 },
}
