//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig, logging::LoggingConfig, server::ServerRuntimeConfig,
    storefront::StorefrontConfig, stripe::StripeConfig,
};

pub(crate) mod db;
pub(crate) mod logging;
pub(crate) mod server;
pub(crate) mod storefront;
pub(crate) mod stripe;

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Stripe checkout settings.
    #[command(flatten)]
    pub stripe: StripeConfig,

    /// Pricing, coupon and request header settings.
    #[command(flatten)]
    pub storefront: StorefrontConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_when_only_required_values_are_given() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "storefront-json",
            "--database-url",
            "postgres://localhost/storefront",
            "--stripe-secret-key",
            "sk_test_123",
            "--stripe-return-url",
            "https://example.com/purchase/success",
            "--revalidate-token",
            "secret",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698");
        assert_eq!(config.storefront.country_header, "x-user-country");
        assert_eq!(config.storefront.currency, "USD");
        assert_eq!(config.storefront.free_label, "Free");
        assert_eq!(config.stripe.stripe_api_base, "https://api.stripe.com");
        assert!(
            config.storefront.revalidate_token.matches("secret"),
            "token should be parsed"
        );

        Ok(())
    }

    #[test]
    fn revalidate_token_is_required() {
        let result = ServerConfig::try_parse_from([
            "storefront-json",
            "--database-url",
            "postgres://localhost/storefront",
            "--stripe-secret-key",
            "sk_test_123",
            "--stripe-return-url",
            "https://example.com/purchase/success",
        ]);

        assert!(result.is_err(), "missing revalidation token accepted");
    }

    #[test]
    fn blank_revalidate_token_is_rejected() {
        let result = ServerConfig::try_parse_from([
            "storefront-json",
            "--database-url",
            "postgres://localhost/storefront",
            "--stripe-secret-key",
            "sk_test_123",
            "--stripe-return-url",
            "https://example.com/purchase/success",
            "--revalidate-token",
            " ",
        ]);

        assert!(result.is_err(), "blank revalidation token accepted");
    }
}
