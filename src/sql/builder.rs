//! Builds parameterized SELECTs over the catalog table, one per named lookup.

use crate::model::{Category, OutputSchema, RatingClass, TitleScope};
use crate::sql::SqliteBindValue;

/// Cap for year-range lookups.
pub const YEAR_RANGE_LIMIT: u32 = 100;
/// Cap for genre lookups.
pub const GENRE_LIMIT: u32 = 10;

/// A named catalog lookup with typed, already-validated arguments.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogQuery {
    /// Most recent title containing `title` (case-insensitive).
    ByTitle { title: String, scope: TitleScope },
    /// Exact `show_id` match.
    ById { show_id: String },
    /// `start <= release_year <= end`, newest first.
    ByYearRange { start: u16, end: u16 },
    /// `rating IN (...)`.
    ByRatingSet { ratings: Vec<String> },
    /// Movies whose rating falls in the class, newest first.
    ByRatingClass { class: RatingClass },
    /// Genre listing contains `genre` (case-insensitive), newest first.
    ByGenre { genre: String },
    /// Exact category and year, genre listing contains `genre`.
    ByTypeYearGenre { category: Category, year: u16, genre: String },
    /// Exact category, year and whole genre listing.
    UniqueByCategoryYearGenre { category: Category, year: u16, genre: String },
    /// Cast lists mentioning both actors.
    CastWithBoth { first: String, second: String },
}

impl CatalogQuery {
    pub fn schema(&self) -> OutputSchema {
        match self {
            CatalogQuery::ByTitle { .. } | CatalogQuery::ById { .. } => OutputSchema::Detail,
            CatalogQuery::ByYearRange { .. } => OutputSchema::TitleYear,
            CatalogQuery::ByRatingSet { .. } | CatalogQuery::ByRatingClass { .. } => OutputSchema::TitleRating,
            CatalogQuery::ByGenre { .. }
            | CatalogQuery::ByTypeYearGenre { .. }
            | CatalogQuery::UniqueByCategoryYearGenre { .. } => OutputSchema::Summary,
            CatalogQuery::CastWithBoth { .. } => OutputSchema::Cast,
        }
    }
}

/// Quote identifier (safe: only from config and the fixed column list).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Case-insensitive (Unicode) substring pattern for `REGEXP`; user text is matched literally.
pub fn contains_pattern(s: &str) -> SqliteBindValue {
    SqliteBindValue::Text(format!("(?i){}", regex::escape(s)))
}

/// `"column" REGEXP ?n`: unanchored, so any occurrence matches.
fn contains(column: &str, placeholder: &str) -> String {
    format!("{} REGEXP {}", quoted(column), placeholder)
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqliteBindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    /// Bind a value and return its numbered placeholder (`?1`, `?2`, ...).
    fn push_param(&mut self, v: impl Into<SqliteBindValue>) -> String {
        self.params.push(v.into());
        format!("?{}", self.params.len())
    }
}

/// SELECT list for a schema: each field as `"column" AS "name"`.
fn select_column_list(schema: OutputSchema) -> String {
    schema
        .fields()
        .iter()
        .map(|f| {
            if f.name == f.column {
                quoted(f.column)
            } else {
                format!("{} AS {}", quoted(f.column), quoted(f.name))
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Placeholder list for an IN clause; None when there is nothing to match.
fn in_list(q: &mut QueryBuf, values: &[&str]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    let placeholders: Vec<String> = values.iter().map(|v| q.push_param(*v)).collect();
    Some(placeholders.join(", "))
}

/// Build the statement for `query` against `table`. Substring matches need a connection with
/// `REGEXP` registered (see `store::connect`).
pub fn build(table: &str, query: &CatalogQuery) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut where_parts: Vec<String> = Vec::new();
    let mut order_newest_first = false;
    let mut limit: Option<u32> = None;

    match query {
        CatalogQuery::ByTitle { title, scope } => {
            let ph = q.push_param(contains_pattern(title));
            where_parts.push(contains("title", &ph));
            if *scope == TitleScope::MoviesOnly {
                let ph = q.push_param(Category::Movie.label());
                where_parts.push(format!("{} = {}", quoted("type"), ph));
            }
            order_newest_first = true;
            limit = Some(1);
        }
        CatalogQuery::ById { show_id } => {
            let ph = q.push_param(show_id.as_str());
            where_parts.push(format!("{} = {}", quoted("show_id"), ph));
            limit = Some(1);
        }
        CatalogQuery::ByYearRange { start, end } => {
            let lo = q.push_param(*start);
            let hi = q.push_param(*end);
            where_parts.push(format!("{} BETWEEN {} AND {}", quoted("release_year"), lo, hi));
            order_newest_first = true;
            limit = Some(YEAR_RANGE_LIMIT);
        }
        CatalogQuery::ByRatingSet { ratings } => {
            let codes: Vec<&str> = ratings.iter().map(String::as_str).collect();
            match in_list(&mut q, &codes) {
                Some(list) => where_parts.push(format!("{} IN ({})", quoted("rating"), list)),
                None => where_parts.push("1 = 0".into()),
            }
        }
        CatalogQuery::ByRatingClass { class } => {
            // Parenthesized so the category filter binds to the whole rating set.
            match in_list(&mut q, class.codes()) {
                Some(list) => where_parts.push(format!("({} IN ({}))", quoted("rating"), list)),
                None => where_parts.push("1 = 0".into()),
            }
            let ph = q.push_param(Category::Movie.label());
            where_parts.push(format!("{} = {}", quoted("type"), ph));
            order_newest_first = true;
        }
        CatalogQuery::ByGenre { genre } => {
            let ph = q.push_param(contains_pattern(genre));
            where_parts.push(contains("listed_in", &ph));
            order_newest_first = true;
            limit = Some(GENRE_LIMIT);
        }
        CatalogQuery::ByTypeYearGenre { category, year, genre } => {
            let t = q.push_param(category.label());
            let y = q.push_param(*year);
            let g = q.push_param(contains_pattern(genre));
            where_parts.push(format!("{} = {}", quoted("type"), t));
            where_parts.push(format!("{} = {}", quoted("release_year"), y));
            where_parts.push(contains("listed_in", &g));
        }
        CatalogQuery::UniqueByCategoryYearGenre { category, year, genre } => {
            let t = q.push_param(category.label());
            let y = q.push_param(*year);
            let g = q.push_param(genre.as_str());
            where_parts.push(format!("{} = {}", quoted("type"), t));
            where_parts.push(format!("{} = {}", quoted("release_year"), y));
            where_parts.push(format!("{} = {}", quoted("listed_in"), g));
        }
        CatalogQuery::CastWithBoth { first, second } => {
            let a = q.push_param(contains_pattern(first));
            let b = q.push_param(contains_pattern(second));
            where_parts.push(contains("cast", &a));
            where_parts.push(contains("cast", &b));
        }
    }

    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    let order_clause = if order_newest_first {
        format!(" ORDER BY {} DESC", quoted("release_year"))
    } else {
        String::new()
    };
    let limit_clause = limit.map(|n| format!(" LIMIT {}", n)).unwrap_or_default();
    q.sql = format!(
        "SELECT {} FROM {}{}{}{}",
        select_column_list(query.schema()),
        quoted(table),
        where_clause,
        order_clause,
        limit_clause
    );
    q
}
