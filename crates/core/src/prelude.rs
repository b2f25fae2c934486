//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{
        CatalogRow, CourseUuid, LessonStatus, LessonUuid, ProductHeader, ProductStatus,
        ProductUuid, PublicCourse, PublicLesson, PublicProduct, PublicSection, SectionStatus,
        SectionUuid, UserUuid, count_courses, count_lessons,
    },
    countries::CountryCode,
    coupons::{Coupon, CouponBook, CouponConfigError},
    discounts::{DiscountError, DiscountedPrice, apply_discount, minor_units, price_with_coupon},
    formatters::{format_plural, format_price},
    tags::{CacheTag, CacheTagSet, EntityChange, derive_product_tags, invalidation_tags},
};
