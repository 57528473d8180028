// Runtime configuration read from the environment.
//
// Variables
// - CINEMA_DEFAULT_CAPACITY: seats for showtimes scheduled without an explicit capacity (default 100).
// - CINEMA_SEED_SAMPLE_DATA: load the bundled sample data at startup (default true).
// - RUST_LOG: log filter, read by the tracing subscriber in the binary.

use crate::core::seats::DEFAULT_CAPACITY;
use thiserror::Error;

pub const DEFAULT_CAPACITY_VAR: &str = "CINEMA_DEFAULT_CAPACITY";
pub const SEED_SAMPLE_DATA_VAR: &str = "CINEMA_SEED_SAMPLE_DATA";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a non-negative integer, got {value:?}")]
    InvalidCapacity { name: &'static str, value: String },

    #[error("{name} must be true or false, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub default_capacity: u32,
    pub seed_sample_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_capacity: DEFAULT_CAPACITY,
            seed_sample_data: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let default_capacity = match lookup(DEFAULT_CAPACITY_VAR) {
            None => defaults.default_capacity,
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidCapacity {
                    name: DEFAULT_CAPACITY_VAR,
                    value,
                })?,
        };

        let seed_sample_data = match lookup(SEED_SAMPLE_DATA_VAR) {
            None => defaults.seed_sample_data,
            Some(value) => parse_flag(&value).ok_or(ConfigError::InvalidFlag {
                name: SEED_SAMPLE_DATA_VAR,
                value,
            })?,
        };

        Ok(Self {
            default_capacity,
            seed_sample_data,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[rstest]
    fn it_should_fall_back_to_defaults() {
        assert_eq!(config_from(&[]), Ok(Config::default()));
        assert_eq!(Config::default().default_capacity, 100);
    }

    #[rstest]
    fn it_should_read_overrides() {
        let config = config_from(&[
            (DEFAULT_CAPACITY_VAR, " 250 "),
            (SEED_SAMPLE_DATA_VAR, "off"),
        ])
        .unwrap();
        assert_eq!(config.default_capacity, 250);
        assert!(!config.seed_sample_data);
    }

    #[rstest]
    #[case("-5")]
    #[case("lots")]
    fn it_should_reject_a_bad_capacity(#[case] value: &str) {
        assert_eq!(
            config_from(&[(DEFAULT_CAPACITY_VAR, value)]),
            Err(ConfigError::InvalidCapacity {
                name: DEFAULT_CAPACITY_VAR,
                value: value.to_string()
            })
        );
    }

    #[rstest]
    fn it_should_reject_a_bad_flag() {
        let error = config_from(&[(SEED_SAMPLE_DATA_VAR, "maybe")]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "CINEMA_SEED_SAMPLE_DATA must be true or false, got \"maybe\""
        );
    }
}
