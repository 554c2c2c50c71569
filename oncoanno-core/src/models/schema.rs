//! Column schema of a tier.
//!
//! Every tier in the input document lists its `columns` once and then stores
//! each variant as a positional array. [`ColumnSchema`] resolves the indices of
//! the columns the annotator needs a single time, so rows are read by name
//! without repeated lookups.

use serde_json::Value;

use crate::consts::{COLUMN_ALT, COLUMN_CHROM, COLUMN_POS, COLUMN_REF, COLUMN_TYPE, COLUMN_VAF};
use crate::errors::VariantError;
use crate::models::variant::{Variant, VariantType};

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ColumnSchema {
    kind: usize,
    chrom: usize,
    pos: usize,
    ref_allele: usize,
    alt_allele: usize,
    vaf: Option<usize>,
}

impl ColumnSchema {
    ///
    /// Resolve the schema from a tier's column names.
    ///
    /// `vaf` is optional here; it is only required when a VAF is actually read.
    ///
    pub fn from_columns<S: AsRef<str>>(columns: &[S]) -> Result<Self, VariantError> {
        let index_of = |name: &str| columns.iter().position(|c| c.as_ref() == name);
        let required = |name: &str| {
            index_of(name).ok_or_else(|| VariantError::MissingColumn(name.to_string()))
        };

        Ok(ColumnSchema {
            kind: required(COLUMN_TYPE)?,
            chrom: required(COLUMN_CHROM)?,
            pos: required(COLUMN_POS)?,
            ref_allele: required(COLUMN_REF)?,
            alt_allele: required(COLUMN_ALT)?,
            vaf: index_of(COLUMN_VAF),
        })
    }

    /// Read the positional fields of a row.
    pub fn variant(&self, row: &[Value]) -> Result<Variant, VariantError> {
        let kind: VariantType = field_str(row, self.kind, COLUMN_TYPE)?.parse()?;
        let chrom = field_str(row, self.chrom, COLUMN_CHROM)?;
        let pos = field_u64(row, self.pos, COLUMN_POS)?;
        let ref_allele = field_str(row, self.ref_allele, COLUMN_REF)?;
        let alt_allele = field_str(row, self.alt_allele, COLUMN_ALT)?;

        Ok(Variant::new(kind, chrom, pos, ref_allele, alt_allele))
    }

    ///
    /// Read the variant allele frequency of a row, in percent.
    ///
    /// Accepts a JSON number or a string with an optional trailing `%`,
    /// e.g. `"12.5%"`.
    ///
    pub fn vaf(&self, row: &[Value]) -> Result<f64, VariantError> {
        let index = self
            .vaf
            .ok_or_else(|| VariantError::MissingColumn(COLUMN_VAF.to_string()))?;
        let value = field(row, index, COLUMN_VAF)?;

        let invalid = || VariantError::InvalidField {
            column: COLUMN_VAF.to_string(),
            value: value.to_string(),
        };

        match value {
            Value::Number(n) => n.as_f64().ok_or_else(invalid),
            Value::String(s) => s
                .trim()
                .trim_end_matches('%')
                .trim()
                .parse::<f64>()
                .map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }
}

fn field<'a>(row: &'a [Value], index: usize, column: &str) -> Result<&'a Value, VariantError> {
    row.get(index).ok_or_else(|| VariantError::MissingField {
        column: column.to_string(),
        index,
    })
}

fn field_str<'a>(row: &'a [Value], index: usize, column: &str) -> Result<&'a str, VariantError> {
    let value = field(row, index, column)?;
    value.as_str().ok_or_else(|| VariantError::InvalidField {
        column: column.to_string(),
        value: value.to_string(),
    })
}

// positions show up both as JSON integers and as decimal strings
fn field_u64(row: &[Value], index: usize, column: &str) -> Result<u64, VariantError> {
    let value = field(row, index, column)?;
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| VariantError::InvalidField {
        column: column.to_string(),
        value: value.to_string(),
    })
}
