//! Storefront
//!
//! Pricing, coupon and cache-tag logic behind the course storefront product pages.

pub mod catalog;
pub mod countries;
pub mod coupons;
pub mod discounts;
pub mod formatters;
pub mod prelude;
pub mod tags;
pub mod uuids;

#[cfg(test)]
pub(crate) mod fixtures;
