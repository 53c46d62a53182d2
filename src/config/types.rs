//! Runtime configuration for the catalog service.

use serde::{Deserialize, Serialize};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://netflix.db";
pub const DEFAULT_TABLE: &str = "netflix";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
/// A co-star is reported only when seen in strictly more titles than this.
pub const DEFAULT_COSTAR_THRESHOLD: usize = 2;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Name of the catalog table. Interpolated into SQL as a quoted identifier, so it is validated.
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
    #[serde(default = "default_costar_threshold")]
    pub costar_threshold: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            database_url: default_database_url(),
            table: default_table(),
            bind_addr: default_bind_addr(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
            costar_threshold: DEFAULT_COSTAR_THRESHOLD,
        }
    }
}

fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.into()
}

fn default_table() -> String {
    DEFAULT_TABLE.into()
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.into()
}

fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

fn default_acquire_timeout_secs() -> u64 {
    DEFAULT_ACQUIRE_TIMEOUT_SECS
}

fn default_costar_threshold() -> usize {
    DEFAULT_COSTAR_THRESHOLD
}
