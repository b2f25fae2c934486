//! Storefront application services and persistence.

pub mod cache;
pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;
