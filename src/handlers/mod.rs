//! HTTP handlers for catalog lookups.

pub mod catalog;
pub use catalog::*;
