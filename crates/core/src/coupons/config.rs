//! Coupon configuration
//!
//! Coupons are configured in a YAML document:
//!
//! ```yaml
//! coupons:
//!   - stripe_coupon_id: ppp_10
//!     discount_percentage: 0.1
//!     country_codes: [EG, MA, IN]
//! ```

use std::{fs, io, path::Path};

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::countries::CountryCode;

use super::{Coupon, CouponBook};

/// Errors raised while loading coupon configuration.
#[derive(Debug, Error)]
pub enum CouponConfigError {
    /// The configuration file could not be read.
    #[error("failed to read coupon file")]
    Io(#[from] io::Error),

    /// The document is not valid coupon YAML.
    #[error("invalid coupon configuration")]
    Yaml(#[from] serde_norway::Error),

    /// A discount percentage could not be represented.
    #[error("coupon {coupon} has an invalid discount percentage {value}: {reason}")]
    Percentage {
        /// Stripe coupon id of the offending entry.
        coupon: String,

        /// Configured value.
        value: Decimal,

        /// Why it was rejected.
        reason: String,
    },
}

#[derive(Debug, Deserialize)]
struct CouponsDocument {
    #[serde(default)]
    coupons: Vec<CouponEntry>,
}

#[derive(Debug, Deserialize)]
struct CouponEntry {
    stripe_coupon_id: String,
    discount_percentage: Decimal,
    #[serde(default)]
    country_codes: Vec<String>,
}

impl CouponBook {
    /// Parse a coupon book from YAML.
    ///
    /// Country codes that are not two letters are dropped; a coupon left with
    /// no countries simply never matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or a discount percentage
    /// cannot be represented.
    pub fn from_yaml(yaml: &str) -> Result<Self, CouponConfigError> {
        let document: CouponsDocument = serde_norway::from_str(yaml)?;

        let coupons = document
            .coupons
            .into_iter()
            .map(CouponEntry::into_coupon)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(coupons))
    }

    /// Load a coupon book from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CouponConfigError> {
        let yaml = fs::read_to_string(path)?;

        Self::from_yaml(&yaml)
    }
}

impl CouponEntry {
    fn into_coupon(self) -> Result<Coupon, CouponConfigError> {
        let discount = Percentage::try_from(self.discount_percentage.to_string().as_str())
            .map_err(|error| CouponConfigError::Percentage {
                coupon: self.stripe_coupon_id.clone(),
                value: self.discount_percentage,
                reason: error.to_string(),
            })?;

        let country_codes = self
            .country_codes
            .iter()
            .filter_map(|code| CountryCode::parse(code));

        Ok(Coupon::new(self.stripe_coupon_id, discount, country_codes))
    }
}
