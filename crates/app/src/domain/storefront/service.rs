//! Storefront service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use storefront::{
    catalog::{ProductUuid, PublicProduct},
    countries::CountryCode,
    coupons::CouponBook,
    discounts::price_with_coupon,
    formatters::{format_plural, format_price},
    tags::CacheTagSet,
};

use crate::{
    cache::TagCache,
    domain::{
        catalog::CatalogRepository,
        checkout::{CheckoutCustomer, CheckoutProvider, CheckoutRequest, ClientSecret},
        storefront::{
            errors::StorefrontError,
            models::{ProductPage, StorefrontSettings, Visitor},
        },
    },
};

pub struct Storefront {
    catalog: Arc<dyn CatalogRepository>,
    checkout: Arc<dyn CheckoutProvider>,
    coupons: CouponBook,
    cache: TagCache,
    settings: StorefrontSettings,
}

impl Storefront {
    #[must_use]
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        checkout: Arc<dyn CheckoutProvider>,
        coupons: CouponBook,
        settings: StorefrontSettings,
    ) -> Self {
        Self {
            catalog,
            checkout,
            coupons,
            cache: TagCache::new(),
            settings,
        }
    }

    /// Cached product tree, loading and caching it on a miss.
    ///
    /// Missing products are not cached.
    async fn load_product(
        &self,
        product: ProductUuid,
    ) -> Result<(Arc<PublicProduct>, CacheTagSet), StorefrontError> {
        if let Some(cached) = self.cache.get(product) {
            tracing::debug!(product_uuid = %product, "product cache hit");

            return Ok(cached);
        }

        let loaded_at = self.cache.generation();
        let loaded = self
            .catalog
            .fetch_public_product(product)
            .await?
            .ok_or(StorefrontError::NotFound)?;

        Ok(self.cache.associate_tags(loaded, loaded_at))
    }

    async fn owned_by(
        &self,
        customer: Option<&CheckoutCustomer>,
        product: ProductUuid,
    ) -> Result<bool, StorefrontError> {
        match customer {
            Some(customer) => Ok(self.catalog.user_owns_product(customer.id, product).await?),
            None => Ok(false),
        }
    }
}

impl fmt::Debug for Storefront {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storefront")
            .field("coupons", &self.coupons)
            .field("cache", &self.cache)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl StorefrontService for Storefront {
    #[tracing::instrument(
        name = "storefront.product_page",
        skip(self, visitor),
        fields(
            product_uuid = %product,
            country = visitor.country.as_ref().map(CountryCode::as_str),
        ),
        err
    )]
    async fn product_page(
        &self,
        product: ProductUuid,
        visitor: Visitor,
    ) -> Result<ProductPage, StorefrontError> {
        let (loaded, tags) = self.load_product(product).await?;

        let coupon = self.coupons.resolve_coupon(visitor.country);
        let price = price_with_coupon(loaded.price, coupon);
        let already_owned = self.owned_by(visitor.customer.as_ref(), product).await?;

        let currency = self.settings.currency;
        let free_label = self.settings.free_label.as_str();

        let course_count = loaded.course_count();
        let lesson_count = loaded.lesson_count();

        Ok(ProductPage {
            formatted_price: format_price(price.payable(), currency, free_label),
            formatted_original_price: price
                .discounted
                .map(|_| format_price(price.original, currency, free_label)),
            courses_label: format_plural(course_count, "course", "courses"),
            lessons_label: format_plural(lesson_count, "lesson", "lessons"),
            course_count,
            lesson_count,
            already_owned,
            product: loaded,
            price,
            tags,
        })
    }

    #[tracing::instrument(
        name = "storefront.checkout",
        skip(self, customer),
        fields(
            product_uuid = %product,
            user_uuid = %customer.id,
            country = country.as_ref().map(CountryCode::as_str),
        ),
        err
    )]
    async fn checkout(
        &self,
        product: ProductUuid,
        customer: CheckoutCustomer,
        country: Option<CountryCode>,
    ) -> Result<ClientSecret, StorefrontError> {
        let (loaded, _) = self.load_product(product).await?;

        if self.owned_by(Some(&customer), product).await? {
            return Err(StorefrontError::AlreadyOwned);
        }

        let coupon = self.coupons.resolve_coupon(country);
        let price = price_with_coupon(loaded.price, coupon);

        let coupon = coupon
            .filter(|_| price.discounted.is_some())
            .map(|coupon| coupon.stripe_coupon_id().to_string());

        let secret = self
            .checkout
            .create_session(CheckoutRequest {
                product: loaded.as_ref().into(),
                customer,
                coupon,
            })
            .await?;

        Ok(secret)
    }

    #[tracing::instrument(
        name = "storefront.revalidate",
        skip(self, tags),
        fields(tag_count = tags.len())
    )]
    fn revalidate(&self, tags: CacheTagSet) -> usize {
        let evicted = self.cache.invalidate(&tags);

        tracing::info!(evicted, "revalidated product cache");

        evicted
    }
}

#[automock]
#[async_trait]
pub trait StorefrontService: Send + Sync {
    /// Build the product page for `visitor`.
    async fn product_page(
        &self,
        product: ProductUuid,
        visitor: Visitor,
    ) -> Result<ProductPage, StorefrontError>;

    /// Open a checkout session for `customer`, applying their country coupon.
    async fn checkout(
        &self,
        product: ProductUuid,
        customer: CheckoutCustomer,
        country: Option<CountryCode>,
    ) -> Result<ClientSecret, StorefrontError>;

    /// Evict cached products carrying any of `tags`.
    fn revalidate(&self, tags: CacheTagSet) -> usize;
}
