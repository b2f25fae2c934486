//! Stripe embedded checkout client.

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use rusty_money::iso::Currency;
use serde::Deserialize;
use storefront::discounts::minor_units;

use super::{CheckoutError, CheckoutProvider, CheckoutRequest, ClientSecret};

/// Configuration for the Stripe API.
#[derive(Clone)]
pub struct StripeConfig {
    /// API base address, e.g. `"https://api.stripe.com"`.
    pub api_base: String,

    /// Secret API key.
    pub secret_key: String,

    /// Page Stripe redirects to once the session completes.
    pub return_url: String,

    /// Currency products are priced in.
    pub currency: &'static Currency,
}

impl fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripeConfig")
            .field("api_base", &self.api_base)
            .field("return_url", &self.return_url)
            .field("currency", &self.currency.iso_alpha_code)
            .finish_non_exhaustive()
    }
}

/// HTTP client creating Stripe checkout sessions.
#[derive(Debug, Clone)]
pub struct StripeCheckout {
    config: StripeConfig,
    http: Client,
}

impl StripeCheckout {
    #[must_use]
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Form fields for `POST /v1/checkout/sessions`.
    fn session_form(&self, request: &CheckoutRequest) -> Result<Vec<(String, String)>, CheckoutError> {
        let product = &request.product;
        let unit_amount = minor_units(product.price, self.config.currency)?;

        let mut form = vec![
            field("ui_mode", "embedded"),
            field("mode", "payment"),
            field("return_url", &self.config.return_url),
            field("customer_email", &request.customer.email),
            field("line_items[0][quantity]", "1"),
            field(
                "line_items[0][price_data][currency]",
                &self.config.currency.iso_alpha_code.to_lowercase(),
            ),
            field(
                "line_items[0][price_data][unit_amount]",
                &unit_amount.to_string(),
            ),
            field("line_items[0][price_data][product_data][name]", &product.name),
            field("metadata[productId]", &product.id.to_string()),
            field("metadata[userId]", &request.customer.id.to_string()),
        ];

        if !product.description.is_empty() {
            form.push(field(
                "line_items[0][price_data][product_data][description]",
                &product.description,
            ));
        }

        if !product.image_url.is_empty() {
            form.push(field(
                "line_items[0][price_data][product_data][images][0]",
                &product.image_url,
            ));
        }

        if let Some(coupon) = &request.coupon {
            form.push(field("discounts[0][coupon]", coupon));
        }

        Ok(form)
    }
}

fn field(key: &str, value: &str) -> (String, String) {
    (key.to_string(), value.to_string())
}

#[async_trait]
impl CheckoutProvider for StripeCheckout {
    #[tracing::instrument(
        name = "checkout.create_session",
        skip(self, request),
        fields(
            product_uuid = %request.product.id,
            user_uuid = %request.customer.id,
            coupon = request.coupon.as_deref(),
        ),
        err
    )]
    async fn create_session(&self, request: CheckoutRequest) -> Result<ClientSecret, CheckoutError> {
        let url = format!("{}/v1/checkout/sessions", self.config.api_base);
        let form = self.session_form(&request)?;

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.secret_key)
            .form(&form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(CheckoutError::UnexpectedResponse(format!(
                "session request failed with status {status}: {text}"
            )));
        }

        let session: SessionResponse = response.json().await?;

        session
            .client_secret
            .map(ClientSecret::new)
            .ok_or(CheckoutError::MissingClientSecret)
    }
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    client_secret: Option<String>,
}
