//! Coupons
//!
//! Purchasing-power-parity coupons: a percentage discount offered to customers
//! browsing from particular countries.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::countries::CountryCode;

mod config;

pub use config::CouponConfigError;

/// A percentage discount applicable to a set of countries.
#[derive(Debug, Clone)]
pub struct Coupon {
    stripe_coupon_id: String,
    discount: Percentage,
    country_codes: SmallVec<[CountryCode; 8]>,
}

impl Coupon {
    /// Creates a new coupon.
    pub fn new<I>(stripe_coupon_id: impl Into<String>, discount: Percentage, country_codes: I) -> Self
    where
        I: IntoIterator<Item = CountryCode>,
    {
        Self {
            stripe_coupon_id: stripe_coupon_id.into(),
            discount,
            country_codes: country_codes.into_iter().collect(),
        }
    }

    /// Identifier of the coupon at the payment provider.
    pub fn stripe_coupon_id(&self) -> &str {
        &self.stripe_coupon_id
    }

    /// Discount as a percentage.
    pub fn discount(&self) -> Percentage {
        self.discount
    }

    /// Discount as a fraction of the price, e.g. `0.1` for 10% off.
    pub fn discount_fraction(&self) -> Decimal {
        // decimal_percentage doesn't expose the underlying Decimal
        self.discount * Decimal::ONE
    }

    /// Countries this coupon is offered in.
    pub fn country_codes(&self) -> &[CountryCode] {
        &self.country_codes
    }

    /// A coupon is usable when it names at least one country and its discount
    /// lies in `[0, 1)`, so it can never take a price to zero or below.
    pub fn is_usable(&self) -> bool {
        let fraction = self.discount_fraction();

        !self.country_codes.is_empty() && fraction >= Decimal::ZERO && fraction < Decimal::ONE
    }

    /// Whether this coupon is offered to customers in `country`.
    pub fn applies_to(&self, country: CountryCode) -> bool {
        self.is_usable() && self.country_codes.contains(&country)
    }
}

/// The configured coupons, in priority order.
///
/// Resolution is first-match: when a country appears in more than one coupon,
/// the coupon listed first wins, so the configuration order is significant.
#[derive(Debug, Clone, Default)]
pub struct CouponBook {
    coupons: Vec<Coupon>,
}

impl CouponBook {
    /// Creates a coupon book from coupons in priority order.
    pub fn new(coupons: Vec<Coupon>) -> Self {
        Self { coupons }
    }

    /// Find the coupon offered to a customer in `country`.
    ///
    /// Returns `None` when the country is unknown, when no coupon lists it, or
    /// when the only coupons listing it are misconfigured.
    pub fn resolve_coupon(&self, country: Option<CountryCode>) -> Option<&Coupon> {
        let country = country?;

        self.coupons.iter().find(|coupon| coupon.applies_to(country))
    }

    /// Iterate the coupons in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Coupon> {
        self.coupons.iter()
    }

    /// Number of configured coupons.
    pub fn len(&self) -> usize {
        self.coupons.len()
    }

    /// Whether no coupons are configured.
    pub fn is_empty(&self) -> bool {
        self.coupons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use testresult::TestResult;

    use super::*;

    fn country(code: &str) -> CountryCode {
        CountryCode::parse(code).unwrap_or_else(|| unreachable!("fixture codes are valid"))
    }

    fn coupon(id: &str, discount: &str, countries: &[&str]) -> TestResult<Coupon> {
        Ok(Coupon::new(
            id,
            Percentage::try_from(discount)?,
            countries.iter().map(|code| country(code)),
        ))
    }

    fn ppp_book() -> TestResult<CouponBook> {
        Ok(CouponBook::new(vec![coupon(
            "ppp_10",
            "0.1",
            &["EG", "MA", "IN"],
        )?]))
    }

    #[test]
    fn resolve_coupon_matches_listed_country() -> TestResult {
        let book = ppp_book()?;
        let coupon = book.resolve_coupon(Some(country("IN")));

        assert_eq!(coupon.map(Coupon::stripe_coupon_id), Some("ppp_10"));

        Ok(())
    }

    #[test]
    fn resolve_coupon_without_country_returns_none() -> TestResult {
        let book = ppp_book()?;

        assert!(book.resolve_coupon(None).is_none());

        Ok(())
    }

    #[test]
    fn resolve_coupon_prefers_first_listed() -> TestResult {
        let book = CouponBook::new(vec![
            coupon("ppp_40", "0.4", &["IN"])?,
            coupon("ppp_10", "0.1", &["IN", "EG"])?,
        ]);

        let coupon = book.resolve_coupon(Some(country("IN")));

        assert_eq!(coupon.map(Coupon::stripe_coupon_id), Some("ppp_40"));

        Ok(())
    }

    #[test]
    fn misconfigured_coupons_never_match() -> TestResult {
        let book = CouponBook::new(vec![
            coupon("no_countries", "0.1", &[])?,
            coupon("everything_off", "1", &["EG"])?,
        ]);

        assert!(book.resolve_coupon(Some(country("EG"))).is_none());

        Ok(())
    }

    #[test]
    fn misconfigured_coupon_falls_through_to_next() -> TestResult {
        let book = CouponBook::new(vec![
            coupon("everything_off", "1.5", &["EG"])?,
            coupon("ppp_10", "0.1", &["EG"])?,
        ]);

        let coupon = book.resolve_coupon(Some(country("EG")));

        assert_eq!(coupon.map(Coupon::stripe_coupon_id), Some("ppp_10"));

        Ok(())
    }

    proptest! {
        #[test]
        fn unlisted_countries_never_resolve(code in "[A-Z]{2}") {
            let book = ppp_book().map_err(|error| TestCaseError::fail(format!("{error:?}")))?;
            let unlisted = country(&code);

            prop_assume!(!["EG", "MA", "IN"].contains(&code.as_str()));
            prop_assert!(book.resolve_coupon(Some(unlisted)).is_none());
        }
    }
}
