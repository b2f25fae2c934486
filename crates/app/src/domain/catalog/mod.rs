//! Catalog

pub mod errors;
mod records;
pub mod repository;

pub use errors::CatalogError;
pub use repository::*;
