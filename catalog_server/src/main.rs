//! Catalog server: loads config from env (and `.env`), opens the catalog read-only,
//! checks the table, and serves the lookup routes.
//!
//! Run from repo root: `cargo run -p catalog-server`

use catalog_api::{app, connect, verify_catalog_table, AppState, CatalogConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("catalog_api=info,catalog_server=info")),
        )
        .init();

    let config = CatalogConfig::from_env()?;
    let pool = connect(&config).await?;
    verify_catalog_table(&pool, &config.table).await?;

    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(pool, config);
    let router = app(state);

    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("catalog server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
