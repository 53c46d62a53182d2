//! Shared application state for all routes. Built once at startup; never mutated.

use crate::config::CatalogConfig;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Arc<CatalogConfig>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: CatalogConfig) -> Self {
        AppState {
            pool,
            config: Arc::new(config),
        }
    }

    pub fn table(&self) -> &str {
        &self.config.table
    }
}
