//! Checkout
//!
//! Opening embedded payment sessions for a product, with the visitor's country
//! coupon applied by the payment provider.

pub mod errors;
pub mod models;
mod stripe;

pub use errors::CheckoutError;
pub use models::{CheckoutCustomer, CheckoutProduct, CheckoutRequest, ClientSecret};
pub use stripe::{StripeCheckout, StripeConfig};

use async_trait::async_trait;
use mockall::automock;

#[automock]
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Open an embedded checkout session and return its client secret.
    async fn create_session(&self, request: CheckoutRequest) -> Result<ClientSecret, CheckoutError>;
}
