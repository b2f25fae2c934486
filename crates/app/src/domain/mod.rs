//! Domain modules

pub mod catalog;
pub mod checkout;
pub mod storefront;
