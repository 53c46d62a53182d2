mod catalog;
mod status;

pub use catalog::catalog_routes;
pub use status::status_routes;
