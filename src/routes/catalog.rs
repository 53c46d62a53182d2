//! Catalog lookup routes. GET only.

use crate::handlers::catalog::{
    co_stars, movie_by_id, movie_by_title, movies_by_genre, movies_by_rating, movies_by_rating_class,
    movies_by_type_year_genre, movies_by_year_range, movies_unique,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/movie/:title", get(movie_by_title))
        .route("/movie/id/:show_id", get(movie_by_id))
        .route("/movie/year/:start_year/:end_year", get(movies_by_year_range))
        .route("/movie/rating/:rating_list", get(movies_by_rating))
        .route("/movie/rating_class/:class", get(movies_by_rating_class))
        .route(
            "/movie/type_year_genre/:movie_type/:year/:genre",
            get(movies_by_type_year_genre),
        )
        .route("/movie/unique/:category/:year/:genre", get(movies_unique))
        .route("/genre/:genre", get(movies_by_genre))
        .route("/cast/:first_actor/:second_actor", get(co_stars))
        .with_state(state)
}
