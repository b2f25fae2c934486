//! Storefront Models

use std::sync::Arc;

use rusty_money::iso::Currency;
use storefront::{
    catalog::PublicProduct, countries::CountryCode, discounts::DiscountedPrice,
    tags::CacheTagSet,
};

use crate::domain::checkout::CheckoutCustomer;

/// Who is looking at a product page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visitor {
    /// Signed-in customer, if any
    pub customer: Option<CheckoutCustomer>,

    /// Country detected from the request
    pub country: Option<CountryCode>,
}

/// Display settings shared by every product page.
#[derive(Debug, Clone)]
pub struct StorefrontSettings {
    /// Currency products are priced in
    pub currency: &'static Currency,

    /// Label shown instead of a zero price
    pub free_label: String,
}

/// Everything a product page renders.
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub product: Arc<PublicProduct>,
    pub price: DiscountedPrice,

    /// Payable price, formatted
    pub formatted_price: String,

    /// Undiscounted price, formatted, when a coupon applied
    pub formatted_original_price: Option<String>,

    pub course_count: usize,
    pub lesson_count: usize,

    /// e.g. `"2 courses"`
    pub courses_label: String,

    /// e.g. `"4 lessons"`
    pub lessons_label: String,

    /// Whether the visitor already purchased the product
    pub already_owned: bool,

    /// Tags the page was cached under
    pub tags: CacheTagSet,
}
