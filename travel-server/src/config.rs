//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheConfig;

const BIND_ADDR_VAR: &str = "TRAVEL_BIND_ADDR";
const DATA_DIR_VAR: &str = "TRAVEL_DATA_DIR";
const STATIC_DIR_VAR: &str = "TRAVEL_STATIC_DIR";
const CACHE_TTL_VAR: &str = "TRAVEL_CACHE_TTL_SECS";
const CACHE_CAPACITY_VAR: &str = "TRAVEL_CACHE_CAPACITY";
const MAX_CANDIDATES_VAR: &str = "TRAVEL_MAX_CANDIDATES";

/// Errors reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("{var} has invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration for the HTTP server and its collaborators.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Directory holding `destinations.json` and `search_history.json`.
    pub data_dir: PathBuf,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Nearby result cache settings.
    pub cache: CacheConfig,

    /// Most destinations handed to the engine per request.
    pub max_candidates: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_dir: PathBuf::from("data"),
            static_dir: PathBuf::from("static"),
            cache: CacheConfig::default(),
            max_candidates: 500,
        }
    }
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset or blank variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let bind_addr = match get(BIND_ADDR_VAR) {
            Some(v) => parse(BIND_ADDR_VAR, &v)?,
            None => defaults.bind_addr,
        };

        let ttl = match get(CACHE_TTL_VAR) {
            Some(v) => Duration::from_secs(parse(CACHE_TTL_VAR, &v)?),
            None => defaults.cache.ttl,
        };

        let max_capacity = match get(CACHE_CAPACITY_VAR) {
            Some(v) => parse(CACHE_CAPACITY_VAR, &v)?,
            None => defaults.cache.max_capacity,
        };

        let max_candidates = match get(MAX_CANDIDATES_VAR) {
            Some(v) => parse_positive(MAX_CANDIDATES_VAR, &v)?,
            None => defaults.max_candidates,
        };

        Ok(Self {
            bind_addr,
            data_dir: get(DATA_DIR_VAR).map_or(defaults.data_dir, PathBuf::from),
            static_dir: get(STATIC_DIR_VAR).map_or(defaults.static_dir, PathBuf::from),
            cache: CacheConfig { ttl, max_capacity },
            max_candidates,
        })
    }
}

fn parse<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_positive(var: &'static str, value: &str) -> Result<usize, ConfigError> {
    let n: usize = parse(var, value)?;
    if n == 0 {
        return Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(n)
}
