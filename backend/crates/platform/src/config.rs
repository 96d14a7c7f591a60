//! Environment configuration helpers
//!
//! Thin wrappers over `std::env` used while assembling start-up config.
//! Empty values are treated as unset.

use std::env;
use std::str::FromStr;

/// Error when an environment variable is present but unusable
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid value for {name}: {value:?} ({reason})")]
pub struct EnvError {
    pub name: String,
    pub value: String,
    pub reason: String,
}

/// Read a variable, treating empty strings as absent
pub fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parse a raw value, naming the variable in the error
pub fn parse_value<T>(name: &str, raw: &str) -> Result<T, EnvError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| EnvError {
        name: name.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Split a comma-separated list, dropping blanks
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
