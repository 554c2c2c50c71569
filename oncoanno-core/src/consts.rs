// tier names as they appear under VARIANTS
pub const TIER_PASS: &str = "PASS";
pub const TIER_FILTERED: &str = "Filtered";

// required columns of a tier schema
pub const COLUMN_TYPE: &str = "type";
pub const COLUMN_CHROM: &str = "chrom";
pub const COLUMN_POS: &str = "pos";
pub const COLUMN_REF: &str = "ref";
pub const COLUMN_ALT: &str = "alt";
pub const COLUMN_VAF: &str = "vaf";

pub const VARIANT_TYPE_SNV: &str = "SNV";
pub const VARIANT_TYPE_INDEL: &str = "INDEL";

pub const CHROM_PREFIX: &str = "chr";

/// Allele placeholder for "no base" in MAF-style locations.
pub const EMPTY_ALLELE: &str = "-";

/// Bases accepted in `ref`/`alt` alleles.
pub const NUCLEOTIDES: &[u8] = b"ACGTN";
