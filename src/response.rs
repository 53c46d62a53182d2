//! Response helpers: plain JSON bodies and the not-found sentinel.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const MOVIE_NOT_FOUND: &str = "Movie not found";
pub const MOVIES_NOT_FOUND: &str = "Movies not found";

/// Sentinel body for a lookup with zero matches. Sent with 200, not as an error.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct NotFoundBody {
    pub message: &'static str,
}

pub fn not_found(message: &'static str) -> Response {
    (StatusCode::OK, Json(NotFoundBody { message })).into_response()
}

/// Single record, or the sentinel when there is none.
pub fn one_or_not_found<T: Serialize>(data: Option<T>, message: &'static str) -> Response {
    match data {
        Some(d) => (StatusCode::OK, Json(d)).into_response(),
        None => not_found(message),
    }
}

/// List of records, or the sentinel when the list is empty.
pub fn many_or_not_found<T: Serialize>(data: Vec<T>, message: &'static str) -> Response {
    if data.is_empty() {
        return not_found(message);
    }
    many(data)
}

/// List of records; empty lists are sent as `[]`.
pub fn many<T: Serialize>(data: Vec<T>) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}
