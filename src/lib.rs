//! Catalog API: read-only JSON lookups over a movie and TV catalog table.

pub mod config;
pub mod error;
pub mod model;
pub mod response;
pub mod sql;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::{validate, CatalogConfig};
pub use error::{AppError, ConfigError};
pub use model::{Category, OutputSchema, RatingClass, TitleScope};
pub use response::{many, many_or_not_found, one_or_not_found};
pub use sql::{build, CatalogQuery, QueryBuf};
pub use state::AppState;
pub use store::{connect, verify_catalog_table, CatalogSource};
pub use routes::{catalog_routes, status_routes};
pub use service::{CatalogService, Record};

/// Full application router: health/readiness/version plus every catalog lookup, with a
/// request span per call.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(status_routes(state.clone()))
        .merge(catalog_routes(state))
        .layer(TraceLayer::new_for_http())
}
