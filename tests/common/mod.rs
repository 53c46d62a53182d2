//! Shared fixtures: a temp SQLite catalog seeded through a writable pool, opened read-only.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use catalog_api::{app, connect, AppState, CatalogConfig};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct Title {
    pub show_id: String,
    pub title: String,
    pub country: String,
    pub release_year: Option<i64>,
    pub kind: String,
    pub listed_in: String,
    pub description: String,
    pub rating: String,
    pub cast: Option<String>,
}

#[allow(clippy::too_many_arguments)]
pub fn title(
    show_id: &str,
    title: &str,
    country: &str,
    release_year: i64,
    kind: &str,
    listed_in: &str,
    description: &str,
    rating: &str,
    cast: Option<&str>,
) -> Title {
    Title {
        show_id: show_id.into(),
        title: title.into(),
        country: country.into(),
        release_year: Some(release_year),
        kind: kind.into(),
        listed_in: listed_in.into(),
        description: description.into(),
        rating: rating.into(),
        cast: cast.map(str::to_string),
    }
}

/// Small catalog covering every lookup.
pub fn sample_titles() -> Vec<Title> {
    vec![
        title("s1", "Office Space", "United States", 1999, "Movie", "Comedies", "Cubicle\nlife.", "R",
            Some("Ron Livingston, Jennifer Aniston")),
        title("s2", "Office Christmas Party", "United States", 2016, "Movie", "Comedies", "A party\ngoes wrong.", "R",
            Some("Jason Bateman, Jennifer Aniston")),
        title("s3", "Office Hours", "", 2021, "TV Show", "TV Comedies, Romantic TV Shows", "Night shift.", "TV-MA",
            Some("")),
        title("s4", "Paddington", "United Kingdom, France", 2014, "Movie", "Children & Family Movies, Comedies",
            "A bear\nin London.", "PG", Some("Ben Whishaw, Hugh Bonneville")),
        title("s5", "Kid Detectives", "Canada", 2020, "TV Show", "Kids' TV", "Solving cases.", "PG-13",
            Some("Alice Ames, Bob Burns, Carol Cole")),
        title("s6", "Heist Night", "United States", 2018, "Movie", "Action & Adventure", "Crew\nreunites.", "R",
            Some("Alice Ames, Bob Burns, Carol Cole, Dan Drake")),
        title("s7", "Heist Night 2", "United States", 2019, "Movie", "Action & Adventure", "Again.", "R",
            Some("Alice Ames, Bob Burns, Dan Drake")),
        title("s8", "Heist Night 3", "United States", 2020, "Movie", "Action & Adventure", "Last job.", "TV-MA",
            Some("Carol Cole, Alice Ames, Bob Burns")),
        title("s9", "Tiny Tots", "United States", 2010, "Movie", "Children & Family Movies", "Singalong.", "G", None),
        title("s10", "Bear Tales", "Canada", 2022, "TV Show", "Kids' TV", "Bears\ntell\nstories.", "PG",
            Some("Hugh Bonneville")),
    ]
}

const CREATE_TABLE: &str = r#"
    CREATE TABLE netflix (
        show_id TEXT PRIMARY KEY,
        title TEXT,
        country TEXT,
        release_year INTEGER,
        type TEXT,
        listed_in TEXT,
        description TEXT,
        rating TEXT,
        "cast" TEXT
    )
"#;

/// Keeps the temp dir alive alongside the read-only pool.
pub struct Catalog {
    pub dir: TempDir,
    pub pool: SqlitePool,
    pub config: CatalogConfig,
}

impl Catalog {
    pub fn state(&self) -> AppState {
        AppState::new(self.pool.clone(), self.config.clone())
    }

    pub fn router(&self) -> Router {
        app(self.state())
    }
}

pub fn database_url(dir: &TempDir) -> String {
    format!("sqlite://{}", dir.path().join("netflix.db").display())
}

pub async fn seed(url: &str, ddl: &str, titles: &[Title]) {
    let options = SqliteConnectOptions::from_str(url).unwrap().create_if_missing(true);
    let writer = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    sqlx::query(ddl).execute(&writer).await.unwrap();
    for t in titles {
        sqlx::query(r#"INSERT INTO netflix (show_id, title, country, release_year, type, listed_in, description, rating, "cast") VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"#)
            .bind(&t.show_id)
            .bind(&t.title)
            .bind(&t.country)
            .bind(t.release_year)
            .bind(&t.kind)
            .bind(&t.listed_in)
            .bind(&t.description)
            .bind(&t.rating)
            .bind(t.cast.as_deref())
            .execute(&writer)
            .await
            .unwrap();
    }
    writer.close().await;
}

pub async fn catalog_with(titles: &[Title]) -> Catalog {
    let dir = TempDir::new().unwrap();
    let url = database_url(&dir);
    seed(&url, CREATE_TABLE, titles).await;
    let config = CatalogConfig {
        database_url: url,
        ..CatalogConfig::default()
    };
    let pool = connect(&config).await.unwrap();
    Catalog { dir, pool, config }
}

pub async fn sample_catalog() -> Catalog {
    catalog_with(&sample_titles()).await
}

/// GET `uri` through the router; returns status and raw body text.
pub async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let resp = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Assert every key appears in `body` in the given order, once per record.
pub fn assert_key_order(record_json: &str, keys: &[&str]) {
    let mut last = 0;
    for k in keys {
        let needle = format!("\"{}\":", k);
        let pos = record_json[last..]
            .find(&needle)
            .unwrap_or_else(|| panic!("key {} missing or out of order in {}", k, record_json));
        last += pos + needle.len();
    }
}
