//! Config validation: identifiers and addresses the service relies on.

use crate::config::CatalogConfig;
use crate::error::ConfigError;
use regex::Regex;
use std::net::SocketAddr;

const IDENTIFIER_PATTERN: &str = "^[A-Za-z_][A-Za-z0-9_]*$";

/// True when `name` can be used as an unquoted SQL identifier.
pub fn is_identifier(name: &str) -> bool {
    Regex::new(IDENTIFIER_PATTERN)
        .map(|re| re.is_match(name))
        .unwrap_or(false)
}

pub fn validate(config: &CatalogConfig) -> Result<(), ConfigError> {
    if !is_identifier(&config.table) {
        return Err(ConfigError::Validation(format!(
            "table name '{}' is not a valid identifier",
            config.table
        )));
    }
    if config.max_connections == 0 {
        return Err(ConfigError::Validation("max_connections must be at least 1".into()));
    }
    if config.database_url.trim().is_empty() {
        return Err(ConfigError::Validation("database_url is required".into()));
    }
    config
        .bind_addr
        .parse::<SocketAddr>()
        .map_err(|_| ConfigError::Validation(format!("bind_addr '{}' is not a socket address", config.bind_addr)))?;
    Ok(())
}
