//! Checkout errors.

use storefront::discounts::DiscountError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from payment provider: {0}")]
    UnexpectedResponse(String),

    #[error("payment provider returned no client secret")]
    MissingClientSecret,

    #[error("invalid checkout price")]
    Price(#[from] DiscountError),
}
