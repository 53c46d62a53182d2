//! Load config from process environment.

use crate::config::types::CatalogConfig;
use crate::config::validate;
use crate::error::ConfigError;
use std::str::FromStr;

impl CatalogConfig {
    /// Build config from env vars (`DATABASE_URL`, `CATALOG_TABLE`, `BIND_ADDR`, `MAX_CONNECTIONS`,
    /// `ACQUIRE_TIMEOUT_SECS`, `COSTAR_THRESHOLD`), falling back to defaults, then validate.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = CatalogConfig::default();
        if let Some(v) = lookup("DATABASE_URL") {
            cfg.database_url = v;
        }
        if let Some(v) = lookup("CATALOG_TABLE") {
            cfg.table = v;
        }
        if let Some(v) = lookup("BIND_ADDR") {
            cfg.bind_addr = v;
        }
        if let Some(v) = lookup("MAX_CONNECTIONS") {
            cfg.max_connections = parse_var("MAX_CONNECTIONS", &v)?;
        }
        if let Some(v) = lookup("ACQUIRE_TIMEOUT_SECS") {
            cfg.acquire_timeout_secs = parse_var("ACQUIRE_TIMEOUT_SECS", &v)?;
        }
        if let Some(v) = lookup("COSTAR_THRESHOLD") {
            cfg.costar_threshold = parse_var("COSTAR_THRESHOLD", &v)?;
        }
        validate(&cfg)?;
        Ok(cfg)
    }
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Load(format!("{} must be a non-negative integer, got '{}'", key, raw)))
}
