//! Endpoint behaviour through the full router.

mod common;

use axum::http::StatusCode;
use catalog_api::{app, AppState, CatalogConfig};
use common::{assert_key_order, catalog_with, get, sample_catalog, title};
use serde_json::{json, Value};

fn parse(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

#[tokio::test]
async fn movie_by_title_detail_shape() {
    let c = sample_catalog().await;
    let (status, body) = get(&c.router(), "/movie/paddington").await;
    assert_eq!(status, StatusCode::OK);
    assert_key_order(&body, &["title", "country", "release_year", "genre", "description"]);
    assert_eq!(
        parse(&body),
        json!({
            "title": "Paddington",
            "country": "United Kingdom, France",
            "release_year": 2014,
            "genre": "Children & Family Movies, Comedies",
            "description": "A bearin London."
        })
    );
}

#[tokio::test]
async fn movie_by_title_movies_only_query() {
    let c = sample_catalog().await;
    let (_, any) = get(&c.router(), "/movie/office").await;
    assert_eq!(parse(&any)["title"], "Office Hours");
    let (_, movies) = get(&c.router(), "/movie/office?movies_only=true").await;
    assert_eq!(parse(&movies)["title"], "Office Christmas Party");
}

#[tokio::test]
async fn movie_not_found_is_sentinel_with_ok_status() {
    let c = sample_catalog().await;
    let (status, body) = get(&c.router(), "/movie/zzznomatch").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body), json!({"message": "Movie not found"}));
}

#[tokio::test]
async fn movie_by_id() {
    let c = sample_catalog().await;
    let (_, body) = get(&c.router(), "/movie/id/s9").await;
    assert_eq!(parse(&body)["title"], "Tiny Tots");
    let (_, missing) = get(&c.router(), "/movie/id/s999").await;
    assert_eq!(parse(&missing), json!({"message": "Movie not found"}));
}

#[tokio::test]
async fn year_range_list() {
    let c = sample_catalog().await;
    let (status, body) = get(&c.router(), "/movie/year/2018/2019").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        parse(&body),
        json!([
            {"title": "Heist Night 2", "release_year": 2019},
            {"title": "Heist Night", "release_year": 2018}
        ])
    );
    assert_key_order(&body, &["title", "release_year", "title", "release_year"]);

    let (_, none) = get(&c.router(), "/movie/year/1900/1901").await;
    assert_eq!(parse(&none), json!({"message": "Movies not found"}));
}

#[tokio::test]
async fn non_numeric_year_is_client_error() {
    let c = sample_catalog().await;
    let (status, body) = get(&c.router(), "/movie/year/abc/2020").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let v = parse(&body);
    assert_eq!(v["error"]["code"], "validation_error");
    assert!(v["error"]["message"].as_str().unwrap().contains("start_year"));
}

#[tokio::test]
async fn rating_list_endpoint() {
    let c = sample_catalog().await;
    let (_, body) = get(&c.router(), "/movie/rating/G,PG-13").await;
    let v = parse(&body);
    let titles: Vec<&str> = v.as_array().unwrap().iter().map(|r| r["title"].as_str().unwrap()).collect();
    assert_eq!(titles.len(), 2);
    assert!(titles.contains(&"Tiny Tots"));
    assert!(titles.contains(&"Kid Detectives"));
    assert_key_order(&body, &["title", "rating", "description"]);

    let (_, none) = get(&c.router(), "/movie/rating/NC-17").await;
    assert_eq!(parse(&none), json!({"message": "Movies not found"}));
}

#[tokio::test]
async fn rating_class_endpoint() {
    let c = sample_catalog().await;
    let (_, body) = get(&c.router(), "/movie/rating_class/children").await;
    assert_eq!(
        parse(&body),
        json!([{"title": "Tiny Tots", "rating": "G", "description": "Singalong."}])
    );
    let (status, _) = get(&c.router(), "/movie/rating_class/teens").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn genre_endpoint() {
    let c = sample_catalog().await;
    let (_, body) = get(&c.router(), "/genre/action").await;
    let v = parse(&body);
    assert_eq!(v.as_array().unwrap().len(), 3);
    assert_eq!(v[0], json!({"title": "Heist Night 3", "description": "Last job."}));
    assert_eq!(v[2]["description"], "Crewreunites.");

    let (_, none) = get(&c.router(), "/genre/westerns").await;
    assert_eq!(parse(&none), json!({"message": "Movies not found"}));
}

#[tokio::test]
async fn type_year_genre_endpoint() {
    let c = sample_catalog().await;
    let (_, body) = get(&c.router(), "/movie/type_year_genre/TV%20Show/2021/comedies").await;
    assert_eq!(
        parse(&body),
        json!([{"title": "Office Hours", "description": "Night shift."}])
    );
    let (status, body) = get(&c.router(), "/movie/type_year_genre/Documentary/2021/comedies").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&body)["error"]["code"], "validation_error");
}

#[tokio::test]
async fn unique_endpoint_returns_empty_list_on_miss() {
    let c = sample_catalog().await;
    let (_, body) = get(&c.router(), "/movie/unique/Movie/2014/Children%20%26%20Family%20Movies%2C%20Comedies").await;
    assert_eq!(parse(&body)[0]["title"], "Paddington");
    let (status, miss) = get(&c.router(), "/movie/unique/Movie/2014/Comedies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&miss), json!([]));
}

#[tokio::test]
async fn cast_endpoint() {
    let c = sample_catalog().await;
    let (_, body) = get(&c.router(), "/cast/Alice%20Ames/Bob%20Burns").await;
    assert_eq!(parse(&body), json!(["Carol Cole"]));
}

#[tokio::test]
async fn cast_endpoint_honours_configured_threshold() {
    let c = sample_catalog().await;
    let config = CatalogConfig {
        costar_threshold: 1,
        ..c.config.clone()
    };
    let router = app(AppState::new(c.pool.clone(), config));
    let (_, body) = get(&router, "/cast/Alice%20Ames/Bob%20Burns").await;
    assert_eq!(parse(&body), json!(["Carol Cole", "Dan Drake"]));
}

#[tokio::test]
async fn health_ready_version() {
    let c = sample_catalog().await;
    let router = c.router();
    let (_, health) = get(&router, "/health").await;
    assert_eq!(parse(&health), json!({"status": "ok"}));
    let (status, ready) = get(&router, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&ready), json!({"status": "ready", "table": "netflix"}));
    let (_, version) = get(&router, "/version").await;
    assert_eq!(parse(&version)["name"], "catalog-api");
    let (info, _) = get(&router, "/info").await;
    assert_eq!(info, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ready_reports_missing_table() {
    let c = sample_catalog().await;
    let config = CatalogConfig {
        table: "shows".into(),
        ..c.config.clone()
    };
    let router = app(AppState::new(c.pool.clone(), config));
    let (status, body) = get(&router, "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let body = parse(&body);
    assert_eq!(body["status"], "unavailable");
    assert_eq!(body["table"], "shows");
    assert!(body["reason"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn accented_title_matches_regardless_of_case() {
    let c = catalog_with(&[title(
        "s11", "Élite", "Spain", 2018, "TV Show", "International TV Shows, TV Dramas",
        "Three teens\nenroll.", "TV-MA", Some("Danna Paola, Miguel Bernardeau"),
    )])
    .await;
    let (status, body) = get(&c.router(), "/movie/%C3%A9lite").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body)["title"], "Élite");
    let (_, body) = get(&c.router(), "/movie/ELITE").await;
    assert_eq!(parse(&body), json!({"message": "Movie not found"}));
}

#[tokio::test]
async fn closed_pool_is_service_unavailable() {
    let c = sample_catalog().await;
    let router = c.router();
    c.pool.close().await;
    let (status, body) = get(&router, "/genre/comedies").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(parse(&body)["error"]["code"], "connection_error");
    let (ready, _) = get(&router, "/ready").await;
    assert_eq!(ready, StatusCode::SERVICE_UNAVAILABLE);
}
