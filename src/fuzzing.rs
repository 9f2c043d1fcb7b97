//! Entry points for the `fuzz/` targets.
use crate::args::parsers::{parse_duration_arg, parse_request_count};
use crate::config::types::ConfigFile;
use crate::error::{AppError, AppResult};
use crate::load::EndpointList;

/// Parses a request count the way the CLI and the prompt do.
///
/// # Errors
///
/// Returns an error when the input is not a whole number >= 1.
pub fn parse_request_count_input(input: &str) -> AppResult<u64> {
    parse_request_count(input)
        .map(u64::from)
        .map_err(AppError::from)
}

/// Parses a duration argument (e.g. `10s`, `500ms`).
///
/// # Errors
///
/// Returns an error when the duration is invalid.
pub fn parse_duration_input(input: &str) -> AppResult<std::time::Duration> {
    parse_duration_arg(input)
}

/// Parses a TOML config and validates the fields a run would use.
///
/// # Errors
///
/// Returns an error when the TOML is invalid or a field is out of range.
pub fn validate_config_toml(input: &str) -> Result<ConfigFile, String> {
    let config: ConfigFile = toml::from_str(input).map_err(|err| err.to_string())?;
    if let Some(timeout) = config.timeout.as_ref() {
        timeout.to_duration("timeout").map_err(|err| err.to_string())?;
    }
    if let Some(timeout) = config.connect_timeout.as_ref() {
        timeout
            .to_duration("connect_timeout")
            .map_err(|err| err.to_string())?;
    }
    if let Some(endpoints) = config.endpoints.clone() {
        EndpointList::new(endpoints).map_err(|err| err.to_string())?;
    }
    Ok(config)
}
