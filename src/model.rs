//! Catalog vocabulary: table columns, categories, rating classes and per-endpoint output schemas.

use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// Columns every catalog table must expose.
pub const CATALOG_COLUMNS: [&str; 9] = [
    "show_id",
    "title",
    "country",
    "release_year",
    "type",
    "listed_in",
    "description",
    "rating",
    "cast",
];

/// The `type` column: either a movie or a TV show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Movie,
    TvShow,
}

impl Category {
    /// Value stored in the `type` column.
    pub fn label(self) -> &'static str {
        match self {
            Category::Movie => "Movie",
            Category::TvShow => "TV Show",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s
            .trim()
            .chars()
            .map(|c| if c == '_' || c == '-' { ' ' } else { c.to_ascii_lowercase() })
            .collect();
        match norm.as_str() {
            "movie" => Ok(Category::Movie),
            "tv show" => Ok(Category::TvShow),
            _ => Err(AppError::Validation(format!(
                "unknown category '{}': expected 'Movie' or 'TV Show'",
                s
            ))),
        }
    }
}

/// Named group of content-rating codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RatingClass {
    Children,
    Family,
    Adult,
}

impl RatingClass {
    pub fn codes(self) -> &'static [&'static str] {
        match self {
            RatingClass::Children => &["G"],
            RatingClass::Family => &["G", "PG", "PG-13"],
            RatingClass::Adult => &["R", "NC-17"],
        }
    }
}

impl FromStr for RatingClass {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "children" => Ok(RatingClass::Children),
            "family" => Ok(RatingClass::Family),
            "adult" => Ok(RatingClass::Adult),
            _ => Err(AppError::Validation(format!(
                "unknown rating class '{}': expected children, family or adult",
                s
            ))),
        }
    }
}

/// Restricts title lookups to movies when set to `MoviesOnly`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TitleScope {
    #[default]
    Any,
    MoviesOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Passed through unchanged.
    Plain,
    /// Free text: embedded line breaks are removed.
    Text,
}

/// One output field: JSON key, source column, post-processing.
#[derive(Clone, Copy, Debug)]
pub struct Field {
    pub name: &'static str,
    pub column: &'static str,
    pub kind: FieldKind,
}

const fn plain(name: &'static str, column: &'static str) -> Field {
    Field { name, column, kind: FieldKind::Plain }
}

const fn text(name: &'static str, column: &'static str) -> Field {
    Field { name, column, kind: FieldKind::Text }
}

const DETAIL: [Field; 5] = [
    plain("title", "title"),
    plain("country", "country"),
    plain("release_year", "release_year"),
    plain("genre", "listed_in"),
    text("description", "description"),
];
const TITLE_YEAR: [Field; 2] = [plain("title", "title"), plain("release_year", "release_year")];
const TITLE_RATING: [Field; 3] = [
    plain("title", "title"),
    plain("rating", "rating"),
    text("description", "description"),
];
const SUMMARY: [Field; 2] = [plain("title", "title"), text("description", "description")];
const CAST: [Field; 1] = [plain("cast", "cast")];

/// Declared field list for each endpoint. Field order is the JSON key order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputSchema {
    /// `{title, country, release_year, genre, description}`
    Detail,
    /// `{title, release_year}`
    TitleYear,
    /// `{title, rating, description}`
    TitleRating,
    /// `{title, description}`
    Summary,
    /// `{cast}`, consumed by the co-star analyzer only.
    Cast,
}

impl OutputSchema {
    pub fn fields(self) -> &'static [Field] {
        match self {
            OutputSchema::Detail => &DETAIL,
            OutputSchema::TitleYear => &TITLE_YEAR,
            OutputSchema::TitleRating => &TITLE_RATING,
            OutputSchema::Summary => &SUMMARY,
            OutputSchema::Cast => &CAST,
        }
    }
}
