//! CatalogService: named lookups over the catalog, plus shaping and validation helpers.

mod catalog;
pub mod costars;
pub mod shaper;
mod validation;
pub use catalog::CatalogService;
pub use costars::frequent_costars;
pub use shaper::{shape_many, shape_one, strip_line_breaks, Record};
pub use validation::RequestValidator;
