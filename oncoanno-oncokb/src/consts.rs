pub const ONCOKB_API_URL: &str = "https://www.oncokb.org/api/v1/annotate/mutations/byGenomicChange";
pub const REFERENCE_GENOME: &str = "GRCh38";

pub const DEFAULT_MIN_FILTERED_VAF: f64 = 1.0;

// query parameters
pub const PARAM_GENOMIC_LOCATION: &str = "genomicLocation";
pub const PARAM_REFERENCE_GENOME: &str = "referenceGenome";
pub const PARAM_TUMOR_TYPE: &str = "tumorType";

// configuration keys
pub const CONFIG_API_KEY: &str = "oncokb_api_key";
pub const CONFIG_API_TIMEOUT: &str = "oncokb_api_timeout";
pub const CONFIG_TUMOR_TYPES: &str = "oncokb_tumor_types";

// report document keys
pub const KEY_VARIANTS: &str = "VARIANTS";
pub const KEY_REPORTING: &str = "REPORTING";
pub const KEY_ONCOKB: &str = "oncokb";
pub const KEY_API_STATUS: &str = "apiStatus";
pub const KEY_API_REQUESTS: &str = "apiRequests";
pub const KEY_VARIANT: &str = "variant";

// OncoKB response keys
pub const KEY_MUTATION_EFFECT: &str = "mutationEffect";
pub const KEY_DESCRIPTION: &str = "description";

pub const ANNOTATE_CMD: &str = "annotate";
