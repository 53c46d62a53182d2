//! Path parameter parsing. Anything malformed becomes a validation error before a query is built.

use crate::error::AppError;
use crate::model::{Category, RatingClass};

pub struct RequestValidator;

impl RequestValidator {
    /// Decimal year, 0..=9999.
    pub fn year(name: &str, raw: &str) -> Result<u16, AppError> {
        let s = raw.trim();
        if s.is_empty() || s.len() > 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::Validation(format!(
                "{} must be a year (up to 4 digits), got '{}'",
                name, raw
            )));
        }
        s.parse()
            .map_err(|_| AppError::Validation(format!("{} must be a year, got '{}'", name, raw)))
    }

    /// Comma-separated rating codes, trimmed, empties dropped. At least one code required.
    pub fn rating_list(raw: &str) -> Result<Vec<String>, AppError> {
        let codes: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if codes.is_empty() {
            return Err(AppError::Validation("rating_list must name at least one rating".into()));
        }
        Ok(codes)
    }

    pub fn category(raw: &str) -> Result<Category, AppError> {
        raw.parse()
    }

    pub fn rating_class(raw: &str) -> Result<RatingClass, AppError> {
        raw.parse()
    }

    /// Free text that must not be blank. Returned as given; matching tolerates case, not padding.
    pub fn text<'a>(name: &str, raw: &'a str) -> Result<&'a str, AppError> {
        if raw.trim().is_empty() {
            return Err(AppError::Validation(format!("{} is required", name)));
        }
        Ok(raw)
    }
}
