//! Stripe Config

use clap::Args;

/// Stripe checkout settings.
#[derive(Args)]
pub struct StripeConfig {
    /// Stripe API base address
    #[arg(long, env = "STRIPE_API_BASE", default_value = "https://api.stripe.com")]
    pub stripe_api_base: String,

    /// Stripe secret key
    #[arg(long, env = "STRIPE_SECRET_KEY", hide_env_values = true)]
    pub stripe_secret_key: String,

    /// Page Stripe returns to after checkout; may contain `{CHECKOUT_SESSION_ID}`
    #[arg(long, env = "STRIPE_RETURN_URL")]
    pub stripe_return_url: String,
}

impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("stripe_api_base", &self.stripe_api_base)
            .field("stripe_return_url", &self.stripe_return_url)
            .finish_non_exhaustive()
    }
}
