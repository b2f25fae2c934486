//! Storefront Config

use std::path::PathBuf;

use clap::Args;

use crate::cache::token::RevalidateToken;

/// Pricing, coupon and request header settings.
#[derive(Debug, Args)]
pub struct StorefrontConfig {
    /// Coupon configuration file
    #[arg(long, env = "STOREFRONT_COUPONS_FILE", default_value = "config/coupons.yaml")]
    pub coupons_file: PathBuf,

    /// ISO 4217 code products are priced in
    #[arg(long, env = "STOREFRONT_CURRENCY", default_value = "USD")]
    pub currency: String,

    /// Label shown instead of a zero price
    #[arg(long, env = "STOREFRONT_FREE_LABEL", default_value = "Free")]
    pub free_label: String,

    /// Request header carrying the visitor's ISO 3166-1 alpha-2 country
    #[arg(long, env = "STOREFRONT_COUNTRY_HEADER", default_value = "x-user-country")]
    pub country_header: String,

    /// Bearer token required by the cache revalidation endpoint
    #[arg(
        long,
        env = "STOREFRONT_REVALIDATE_TOKEN",
        hide_env_values = true,
        value_parser = RevalidateToken::parse
    )]
    pub revalidate_token: RevalidateToken,
}
