use std::time::Duration;

use serde::Deserialize;

use crate::args::parsers::parse_duration;
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

/// Config file names probed in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["routeload.toml", "routeload.json"];

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub requests: Option<u64>,
    pub endpoints: Option<Vec<String>>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub no_color: Option<bool>,
    pub env_file: Option<String>,
    pub compose_file: Option<String>,
    pub compose_bin: Option<String>,
}

/// A duration written either as bare seconds (`10`) or with a unit (`"500ms"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self, field: &str) -> AppResult<Duration> {
        let parsed = match self {
            DurationValue::Seconds(0) => Err(ValidationError::DurationZero),
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration(text),
        };
        parsed.map_err(|err| {
            AppError::config(ConfigError::InvalidDuration {
                field: field.to_owned(),
                source: err,
            })
        })
    }
}
