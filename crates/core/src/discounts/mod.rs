//! Discounts
//!
//! Applying a country coupon to a product price, and converting prices to the
//! minor units the payment provider charges in.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::iso::Currency;
use serde::Serialize;
use thiserror::Error;

use crate::coupons::Coupon;

/// Errors specific to discount calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscountError {
    /// A price could not be represented in minor units.
    #[error("price {price} cannot be represented in {currency} minor units")]
    MinorUnitConversion {
        /// Price in major units.
        price: Decimal,

        /// ISO currency code.
        currency: &'static str,
    },
}

/// Apply a coupon to a price.
///
/// Returns the price unchanged when there is no coupon, the price is not
/// positive, or the coupon is misconfigured. Otherwise returns
/// `price * (1 - discount)`, unrounded.
pub fn apply_discount(price: Decimal, coupon: Option<&Coupon>) -> Decimal {
    match coupon {
        Some(coupon) if price > Decimal::ZERO && coupon.is_usable() => {
            price * (Decimal::ONE - coupon.discount_fraction())
        }
        _ => price,
    }
}

/// A price alongside its discounted counterpart, for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountedPrice {
    /// Price before any coupon
    pub original: Decimal,

    /// Price after the coupon, when one applied
    pub discounted: Option<Decimal>,

    /// Fraction taken off by the coupon, when one applied
    pub discount: Option<Decimal>,
}

impl DiscountedPrice {
    /// Price the customer pays.
    pub fn payable(&self) -> Decimal {
        self.discounted.unwrap_or(self.original)
    }
}

/// Price a product for a customer holding `coupon`.
///
/// Free products and missing coupons yield no discounted price, so callers can
/// render the plain price.
pub fn price_with_coupon(price: Decimal, coupon: Option<&Coupon>) -> DiscountedPrice {
    let applied = coupon.filter(|coupon| price > Decimal::ZERO && coupon.is_usable());

    DiscountedPrice {
        original: price,
        discounted: applied.map(|coupon| apply_discount(price, Some(coupon))),
        discount: applied.map(Coupon::discount_fraction),
    }
}

/// Convert a major-unit price into integer minor units of `currency`.
///
/// # Errors
///
/// Returns [`DiscountError::MinorUnitConversion`] if the scaled price overflows.
pub fn minor_units(price: Decimal, currency: &Currency) -> Result<i64, DiscountError> {
    let error = || DiscountError::MinorUnitConversion {
        price,
        currency: currency.iso_alpha_code,
    };

    let scale = 10_i64
        .checked_pow(currency.exponent)
        .map(Decimal::from)
        .ok_or_else(error)?;

    price
        .checked_mul(scale)
        .ok_or_else(error)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(error)
}

#[cfg(test)]
mod tests {
    use decimal_percentage::Percentage;
    use proptest::prelude::*;
    use rusty_money::iso;
    use testresult::TestResult;

    use crate::countries::CountryCode;

    use super::*;

    fn coupon(discount: &str) -> TestResult<Coupon> {
        Ok(Coupon::new(
            "ppp",
            Percentage::try_from(discount)?,
            CountryCode::parse("EG"),
        ))
    }

    #[test]
    fn ten_percent_off_one_hundred_is_ninety() -> TestResult {
        let coupon = coupon("0.1")?;

        assert_eq!(
            apply_discount(Decimal::from(100), Some(&coupon)),
            Decimal::from(90)
        );

        Ok(())
    }

    #[test]
    fn free_products_are_never_discounted() -> TestResult {
        let coupon = coupon("0.5")?;

        assert_eq!(apply_discount(Decimal::ZERO, Some(&coupon)), Decimal::ZERO);
        assert_eq!(
            price_with_coupon(Decimal::ZERO, Some(&coupon)),
            DiscountedPrice {
                original: Decimal::ZERO,
                discounted: None,
                discount: None,
            }
        );

        Ok(())
    }

    #[test]
    fn no_coupon_leaves_price_unchanged() {
        let price = Decimal::new(4999, 2);

        assert_eq!(apply_discount(price, None), price);
        assert_eq!(price_with_coupon(price, None).payable(), price);
    }

    #[test]
    fn misconfigured_coupon_leaves_price_unchanged() -> TestResult {
        let coupon = coupon("1.2")?;

        assert_eq!(
            apply_discount(Decimal::from(100), Some(&coupon)),
            Decimal::from(100)
        );

        Ok(())
    }

    #[test]
    fn price_with_coupon_reports_discount() -> TestResult {
        let coupon = coupon("0.25")?;
        let price = price_with_coupon(Decimal::from(200), Some(&coupon));

        assert_eq!(price.discounted, Some(Decimal::from(150)));
        assert_eq!(price.discount, Some(Decimal::new(25, 2)));
        assert_eq!(price.payable(), Decimal::from(150));

        Ok(())
    }

    #[test]
    fn minor_units_scales_by_currency_exponent() -> TestResult {
        assert_eq!(minor_units(Decimal::new(9999, 2), iso::USD)?, 9999);
        assert_eq!(minor_units(Decimal::from(90), iso::SAR)?, 9000);
        assert_eq!(minor_units(Decimal::from(90), iso::JPY)?, 90);

        Ok(())
    }

    #[test]
    fn minor_units_rounds_half_away_from_zero() -> TestResult {
        assert_eq!(minor_units(Decimal::new(10_005, 3), iso::USD)?, 1001);

        Ok(())
    }

    #[test]
    fn minor_units_overflow_returns_error() {
        let result = minor_units(Decimal::MAX, iso::USD);

        assert!(
            matches!(result, Err(DiscountError::MinorUnitConversion { .. })),
            "expected MinorUnitConversion, got {result:?}"
        );
    }

    proptest! {
        #[test]
        fn discount_matches_formula(minor in 0_i64..10_000_000, percent in 0_u32..100) {
            let price = Decimal::new(minor, 2);
            let fraction = Decimal::new(i64::from(percent), 2);
            let coupon = coupon(&fraction.to_string())
                .map_err(|error| TestCaseError::fail(format!("{error:?}")))?;

            let expected = if price > Decimal::ZERO {
                price * (Decimal::ONE - fraction)
            } else {
                price
            };

            let discounted = apply_discount(price, Some(&coupon));

            prop_assert_eq!(discounted, expected);
            prop_assert!(discounted >= Decimal::ZERO);
        }
    }
}
