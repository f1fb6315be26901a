use crate::consts::{
    DEFAULT_PAGE_SIZE, DEFAULT_START_INDEX, ENV_ORG_ID, ENV_PAGE_SIZE, ENV_SAMPLE_PATH,
    ENV_START_INDEX,
};
use folders::DEFAULT_ORG_ID;
use std::path::PathBuf;
use std::str::FromStr;
use uuid::Uuid;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable {name} has an invalid value '{value}': {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Document to read folders from. Generated data is used when absent.
    pub sample_path: Option<PathBuf>,
    pub org_id: Uuid,
    pub start_index: i64,
    pub page_size: i64,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            sample_path: lookup(ENV_SAMPLE_PATH)
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            org_id: parse_or(&lookup, ENV_ORG_ID, DEFAULT_ORG_ID)?,
            start_index: parse_or(&lookup, ENV_START_INDEX, DEFAULT_START_INDEX)?,
            page_size: parse_or(&lookup, ENV_PAGE_SIZE, DEFAULT_PAGE_SIZE)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                name,
                reason: e.to_string(),
                value,
            }),
    }
}
