//! Liveness, catalog readiness, and build info.

use crate::state::AppState;
use crate::store::verify_catalog_table;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct Readiness<'a> {
    status: &'static str,
    table: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

async fn live() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Ready once the configured table answers with every catalog column. Anything else is 503.
async fn ready(State(state): State<AppState>) -> Response {
    let table = state.table();
    match verify_catalog_table(&state.pool, table).await {
        Ok(()) => Json(Readiness {
            status: "ready",
            table,
            reason: None,
        })
        .into_response(),
        Err(e) => {
            tracing::warn!(table, error = %e, "catalog not ready");
            let body = Readiness {
                status: "unavailable",
                table,
                reason: Some(e.to_string()),
            };
            (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
        }
    }
}

async fn build_info() -> Json<serde_json::Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub fn status_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(ready))
        .route("/version", get(build_info))
        .with_state(state)
}
