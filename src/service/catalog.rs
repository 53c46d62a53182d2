//! Catalog lookups: build the statement, run it, shape the rows.

use crate::error::AppError;
use crate::model::{Category, RatingClass, TitleScope};
use crate::service::costars::{cast_lists, frequent_costars};
use crate::service::shaper::{shape_many, shape_one, Record};
use crate::sql::{build, CatalogQuery};
use crate::store::CatalogSource;

pub struct CatalogService;

impl CatalogService {
    /// Run any list-shaped lookup. Zero matches give an empty list.
    pub async fn list<S: CatalogSource + ?Sized>(
        source: &S,
        table: &str,
        query: &CatalogQuery,
    ) -> Result<Vec<Record>, AppError> {
        let q = build(table, query);
        let rows = source.fetch_rows(&q).await?;
        Ok(shape_many(query.schema(), rows))
    }

    /// Run a single-record lookup. Zero matches give `None`.
    pub async fn one<S: CatalogSource + ?Sized>(
        source: &S,
        table: &str,
        query: &CatalogQuery,
    ) -> Result<Option<Record>, AppError> {
        let q = build(table, query);
        let rows = source.fetch_rows(&q).await?;
        Ok(shape_one(query.schema(), rows))
    }

    /// Most recent title containing `title`.
    pub async fn by_title<S: CatalogSource + ?Sized>(
        source: &S,
        table: &str,
        title: &str,
        scope: TitleScope,
    ) -> Result<Option<Record>, AppError> {
        let query = CatalogQuery::ByTitle {
            title: title.to_string(),
            scope,
        };
        Self::one(source, table, &query).await
    }

    pub async fn by_id<S: CatalogSource + ?Sized>(
        source: &S,
        table: &str,
        show_id: &str,
    ) -> Result<Option<Record>, AppError> {
        let query = CatalogQuery::ById {
            show_id: show_id.to_string(),
        };
        Self::one(source, table, &query).await
    }

    pub async fn by_year_range<S: CatalogSource + ?Sized>(
        source: &S,
        table: &str,
        start: u16,
        end: u16,
    ) -> Result<Vec<Record>, AppError> {
        Self::list(source, table, &CatalogQuery::ByYearRange { start, end }).await
    }

    pub async fn by_ratings<S: CatalogSource + ?Sized>(
        source: &S,
        table: &str,
        ratings: Vec<String>,
    ) -> Result<Vec<Record>, AppError> {
        Self::list(source, table, &CatalogQuery::ByRatingSet { ratings }).await
    }

    pub async fn by_rating_class<S: CatalogSource + ?Sized>(
        source: &S,
        table: &str,
        class: RatingClass,
    ) -> Result<Vec<Record>, AppError> {
        Self::list(source, table, &CatalogQuery::ByRatingClass { class }).await
    }

    pub async fn by_genre<S: CatalogSource + ?Sized>(
        source: &S,
        table: &str,
        genre: &str,
    ) -> Result<Vec<Record>, AppError> {
        let query = CatalogQuery::ByGenre {
            genre: genre.to_string(),
        };
        Self::list(source, table, &query).await
    }

    pub async fn by_type_year_genre<S: CatalogSource + ?Sized>(
        source: &S,
        table: &str,
        category: Category,
        year: u16,
        genre: &str,
    ) -> Result<Vec<Record>, AppError> {
        let query = CatalogQuery::ByTypeYearGenre {
            category,
            year,
            genre: genre.to_string(),
        };
        Self::list(source, table, &query).await
    }

    pub async fn unique_by_category_year_genre<S: CatalogSource + ?Sized>(
        source: &S,
        table: &str,
        category: Category,
        year: u16,
        genre: &str,
    ) -> Result<Vec<Record>, AppError> {
        let query = CatalogQuery::UniqueByCategoryYearGenre {
            category,
            year,
            genre: genre.to_string(),
        };
        Self::list(source, table, &query).await
    }

    /// Actors appearing in more than `threshold` titles whose cast mentions both `first` and `second`.
    pub async fn co_stars<S: CatalogSource + ?Sized>(
        source: &S,
        table: &str,
        first: &str,
        second: &str,
        threshold: usize,
    ) -> Result<Vec<String>, AppError> {
        let query = CatalogQuery::CastWithBoth {
            first: first.to_string(),
            second: second.to_string(),
        };
        let q = build(table, &query);
        let rows = source.fetch_rows(&q).await?;
        let casts = cast_lists(rows);
        tracing::debug!(titles = casts.len(), first, second, "co-star candidates");
        Ok(frequent_costars(&casts, first, second, threshold))
    }
}
