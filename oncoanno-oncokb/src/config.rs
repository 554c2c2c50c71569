use std::fs::read_to_string;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::consts::{CONFIG_API_KEY, CONFIG_API_TIMEOUT, CONFIG_TUMOR_TYPES};

///
/// OncoKB section of the run configuration.
///
/// The configuration file is shared with other tools, so unknown keys are
/// ignored.
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct OncoKbConfig {
    #[serde(rename = "oncokb_api_key")]
    pub api_key: String,
    /// Per-request timeout in seconds.
    #[serde(rename = "oncokb_api_timeout")]
    pub api_timeout: u64,
    /// Tumor types queried for every annotated variant, in order.
    #[serde(rename = "oncokb_tumor_types")]
    pub tumor_types: Vec<String>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl OncoKbConfig {
    ///
    /// Validate and convert a parsed configuration document.
    ///
    /// Every required key is checked before failing, so the error lists all
    /// problems at once.
    /// # Arguments
    /// * `value` - the parsed configuration document
    /// * `source` - name of the configuration, used to prefix each problem
    ///
    pub fn from_value(value: &Value, source: &str) -> ConfigResult<Self> {
        let checks: [(&str, fn(&Value) -> bool); 3] = [
            (CONFIG_API_KEY, Value::is_string),
            (CONFIG_API_TIMEOUT, Value::is_u64),
            (CONFIG_TUMOR_TYPES, is_string_array),
        ];

        let problems: Vec<String> = checks
            .iter()
            .filter(|(key, check)| !value.get(*key).is_some_and(check))
            .map(|(key, _)| format!("{}: {} missing or invalid", source, key))
            .collect();

        if !problems.is_empty() {
            return Err(ConfigError::Invalid(problems));
        }

        Ok(OncoKbConfig::deserialize(value)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api_timeout)
    }
}

fn is_string_array(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(Value::is_string))
}

impl TryFrom<&Path> for OncoKbConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let json_str = read_to_string(path)?;
        let value: Value = serde_json::from_str(&json_str)?;
        OncoKbConfig::from_value(&value, &path.display().to_string())
    }
}
