//! Data access: read-only SQLite pool, table verification, and row fetching.

use crate::config::CatalogConfig;
use crate::error::{AppError, ConfigError};
use crate::model::CATALOG_COLUMNS;
use crate::sql::QueryBuf;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::SqlitePool;
use std::collections::HashSet;
use std::str::FromStr;
use std::time::Duration;

/// A queryable catalog. Returns every matching row as an ordered tuple of column values.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_rows(&self, q: &QueryBuf) -> Result<Vec<Vec<Value>>, AppError>;
}

#[async_trait]
impl CatalogSource for SqlitePool {
    /// Acquires one pooled connection for the statement; it goes back to the pool when dropped,
    /// whichever way this returns.
    async fn fetch_rows(&self, q: &QueryBuf) -> Result<Vec<Vec<Value>>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut conn = self.acquire().await.map_err(AppError::Connection)?;
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let rows = query.fetch_all(&mut *conn).await?;
        Ok(rows.iter().map(row_to_values).collect())
    }
}

/// Open a read-only pool on `config.database_url`. The catalog is never written.
/// Every connection registers `REGEXP`, which the substring lookups use for Unicode case folding.
pub async fn connect(config: &CatalogConfig) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|e| ConfigError::Load(format!("database_url: {}", e)))?
        .read_only(true)
        .with_regexp();
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(options)
        .await
        .map_err(AppError::Connection)?;
    tracing::info!(database_url = %config.database_url, "catalog pool ready");
    Ok(pool)
}

/// Check that `table` exists and has every catalog column.
pub async fn verify_catalog_table(pool: &SqlitePool, table: &str) -> Result<(), AppError> {
    let names: Vec<(String,)> = sqlx::query_as("SELECT name FROM pragma_table_info(?1)")
        .bind(table)
        .fetch_all(pool)
        .await?;
    if names.is_empty() {
        return Err(ConfigError::Validation(format!("table '{}' not found", table)).into());
    }
    let present: HashSet<&str> = names.iter().map(|(n,)| n.as_str()).collect();
    let missing: Vec<&str> = CATALOG_COLUMNS
        .iter()
        .copied()
        .filter(|c| !present.contains(c))
        .collect();
    if !missing.is_empty() {
        return Err(ConfigError::Validation(format!(
            "table '{}' is missing columns: {}",
            table,
            missing.join(", ")
        ))
        .into());
    }
    Ok(())
}

fn row_to_values(row: &SqliteRow) -> Vec<Value> {
    use sqlx::Row;
    (0..row.len()).map(|i| cell_to_value(row, i)).collect()
}

fn cell_to_value(row: &SqliteRow, idx: usize) -> Value {
    use sqlx::Row;
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(idx) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<f64>, _>(idx) {
        if let Some(n) = serde_json::Number::from_f64(n) {
            return Value::Number(n);
        }
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(idx) {
        return Value::String(s);
    }
    Value::Null
}
