//! Storefront service errors.

use thiserror::Error;

use crate::domain::{catalog::CatalogError, checkout::CheckoutError};

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("product not found")]
    NotFound,

    #[error("product already owned")]
    AlreadyOwned,

    #[error("catalog error")]
    Catalog(#[from] CatalogError),

    #[error("checkout error")]
    Checkout(#[from] CheckoutError),
}
