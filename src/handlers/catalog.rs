//! Catalog lookup handlers: parse path parameters, run the lookup, serialize the result.

use crate::error::AppError;
use crate::model::TitleScope;
use crate::response::{many, many_or_not_found, one_or_not_found, MOVIES_NOT_FOUND, MOVIE_NOT_FOUND};
use crate::service::{CatalogService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct TitleParams {
    #[serde(default)]
    pub movies_only: bool,
}

/// GET /movie/:title — newest title containing the text; `?movies_only=true` skips TV shows.
pub async fn movie_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Query(params): Query<TitleParams>,
) -> Result<Response, AppError> {
    let title = RequestValidator::text("title", &title)?;
    let scope = if params.movies_only {
        TitleScope::MoviesOnly
    } else {
        TitleScope::Any
    };
    let row = CatalogService::by_title(&state.pool, state.table(), title, scope).await?;
    Ok(one_or_not_found(row, MOVIE_NOT_FOUND))
}

/// GET /movie/id/:show_id
pub async fn movie_by_id(
    State(state): State<AppState>,
    Path(show_id): Path<String>,
) -> Result<Response, AppError> {
    let show_id = RequestValidator::text("show_id", &show_id)?;
    let row = CatalogService::by_id(&state.pool, state.table(), show_id).await?;
    Ok(one_or_not_found(row, MOVIE_NOT_FOUND))
}

/// GET /movie/year/:start_year/:end_year — at most 100, newest first.
pub async fn movies_by_year_range(
    State(state): State<AppState>,
    Path((start_year, end_year)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let start = RequestValidator::year("start_year", &start_year)?;
    let end = RequestValidator::year("end_year", &end_year)?;
    let rows = CatalogService::by_year_range(&state.pool, state.table(), start, end).await?;
    Ok(many_or_not_found(rows, MOVIES_NOT_FOUND))
}

/// GET /movie/rating/:rating_list — comma-separated rating codes.
pub async fn movies_by_rating(
    State(state): State<AppState>,
    Path(rating_list): Path<String>,
) -> Result<Response, AppError> {
    let ratings = RequestValidator::rating_list(&rating_list)?;
    let rows = CatalogService::by_ratings(&state.pool, state.table(), ratings).await?;
    Ok(many_or_not_found(rows, MOVIES_NOT_FOUND))
}

/// GET /movie/rating_class/:class — children, family or adult; movies only. Empty result is `[]`.
pub async fn movies_by_rating_class(
    State(state): State<AppState>,
    Path(class): Path<String>,
) -> Result<Response, AppError> {
    let class = RequestValidator::rating_class(&class)?;
    let rows = CatalogService::by_rating_class(&state.pool, state.table(), class).await?;
    Ok(many(rows))
}

/// GET /genre/:genre — at most 10, newest first.
pub async fn movies_by_genre(
    State(state): State<AppState>,
    Path(genre): Path<String>,
) -> Result<Response, AppError> {
    let genre = RequestValidator::text("genre", &genre)?;
    let rows = CatalogService::by_genre(&state.pool, state.table(), genre).await?;
    Ok(many_or_not_found(rows, MOVIES_NOT_FOUND))
}

/// GET /movie/type_year_genre/:movie_type/:year/:genre
pub async fn movies_by_type_year_genre(
    State(state): State<AppState>,
    Path((movie_type, year, genre)): Path<(String, String, String)>,
) -> Result<Response, AppError> {
    let category = RequestValidator::category(&movie_type)?;
    let year = RequestValidator::year("year", &year)?;
    let genre = RequestValidator::text("genre", &genre)?;
    let rows = CatalogService::by_type_year_genre(&state.pool, state.table(), category, year, genre).await?;
    Ok(many_or_not_found(rows, MOVIES_NOT_FOUND))
}

/// GET /movie/unique/:category/:year/:genre — genre must equal the whole listing. Empty result is `[]`.
pub async fn movies_unique(
    State(state): State<AppState>,
    Path((category, year, genre)): Path<(String, String, String)>,
) -> Result<Response, AppError> {
    let category = RequestValidator::category(&category)?;
    let year = RequestValidator::year("year", &year)?;
    let genre = RequestValidator::text("genre", &genre)?;
    let rows =
        CatalogService::unique_by_category_year_genre(&state.pool, state.table(), category, year, genre).await?;
    Ok(many(rows))
}

/// GET /cast/:first_actor/:second_actor — frequent co-stars of both actors.
pub async fn co_stars(
    State(state): State<AppState>,
    Path((first_actor, second_actor)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let first = RequestValidator::text("first_actor", &first_actor)?;
    let second = RequestValidator::text("second_actor", &second_actor)?;
    let names = CatalogService::co_stars(
        &state.pool,
        state.table(),
        first,
        second,
        state.config.costar_threshold,
    )
    .await?;
    Ok(many(names))
}
