//! App Context

use std::{path::Path, sync::Arc};

use rusty_money::iso;
use storefront::coupons::{CouponBook, CouponConfigError};
use thiserror::Error;

use crate::{
    database,
    domain::{
        catalog::PgCatalogRepository,
        checkout::{StripeCheckout, StripeConfig},
        storefront::{Storefront, StorefrontService, StorefrontSettings},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to load coupons")]
    Coupons(#[source] CouponConfigError),

    #[error("unknown currency {0}")]
    UnknownCurrency(String),
}

/// Settings needed to assemble the application.
#[derive(Debug, Clone)]
pub struct AppSettings<'a> {
    pub database_url: &'a str,
    pub coupons_file: &'a Path,
    pub currency: &'a str,
    pub free_label: &'a str,
    pub stripe_api_base: &'a str,
    pub stripe_secret_key: &'a str,
    pub stripe_return_url: &'a str,
}

#[derive(Clone)]
pub struct AppContext {
    pub storefront: Arc<dyn StorefrontService>,
}

impl AppContext {
    /// Build application context from settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the database is unreachable, the coupon file is
    /// invalid, or the currency code is not an ISO 4217 code.
    pub async fn from_settings(settings: AppSettings<'_>) -> Result<Self, AppInitError> {
        let currency = iso::find(&settings.currency.to_uppercase())
            .ok_or_else(|| AppInitError::UnknownCurrency(settings.currency.to_string()))?;

        let coupons = CouponBook::load(settings.coupons_file).map_err(AppInitError::Coupons)?;

        tracing::info!(coupon_count = coupons.len(), "loaded coupons");

        let pool = database::connect(settings.database_url)
            .await
            .map_err(AppInitError::Database)?;

        let checkout = StripeCheckout::new(StripeConfig {
            api_base: settings.stripe_api_base.trim_end_matches('/').to_string(),
            secret_key: settings.stripe_secret_key.to_string(),
            return_url: settings.stripe_return_url.to_string(),
            currency,
        });

        Ok(Self {
            storefront: Arc::new(Storefront::new(
                Arc::new(PgCatalogRepository::new(pool)),
                Arc::new(checkout),
                coupons,
                StorefrontSettings {
                    currency,
                    free_label: settings.free_label.to_string(),
                },
            )),
        })
    }
}
