//! Checkout Models

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use storefront::catalog::{ProductUuid, PublicProduct, UserUuid};

/// Product details shown on the payment page.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutProduct {
    pub id: ProductUuid,
    pub name: String,
    pub description: String,
    pub image_url: String,

    /// Undiscounted price in major units; the coupon is applied by the provider.
    pub price: Decimal,
}

impl From<&PublicProduct> for CheckoutProduct {
    fn from(product: &PublicProduct) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            price: product.price,
        }
    }
}

/// Authenticated customer opening the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutCustomer {
    pub id: UserUuid,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    pub product: CheckoutProduct,
    pub customer: CheckoutCustomer,

    /// Provider coupon id resolved from the customer's country.
    pub coupon: Option<String>,
}

/// Embedded checkout client secret.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClientSecret(String);

impl ClientSecret {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(..)")
    }
}
