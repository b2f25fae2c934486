//! Storefront

pub mod errors;
pub mod models;
pub mod service;

pub use errors::StorefrontError;
pub use models::{ProductPage, StorefrontSettings, Visitor};
pub use service::*;
