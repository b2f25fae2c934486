//! Test helpers.

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use storefront::{
    catalog::{
        CourseUuid, LessonStatus, LessonUuid, ProductUuid, PublicCourse, PublicLesson,
        PublicProduct, PublicSection, SectionUuid,
    },
    discounts::DiscountedPrice,
    tags::derive_product_tags,
};
use storefront_app::{
    context::AppContext,
    domain::storefront::{MockStorefrontService, ProductPage},
};

use crate::{cache::token::RevalidateToken, state::State, visitor};

pub(crate) const REVALIDATE_TOKEN: &str = "revalidate-secret";

pub(crate) fn state_with_storefront(storefront: MockStorefrontService) -> Arc<State> {
    State::new(
        AppContext {
            storefront: Arc::new(storefront),
        },
        "x-user-country".to_string(),
        RevalidateToken::unchecked(REVALIDATE_TOKEN),
    )
    .shared()
}

pub(crate) fn storefront_service(storefront: MockStorefrontService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_storefront(storefront)))
            .hoop(visitor::handler)
            .push(route),
    )
}

/// Page for a two-course product, each course with one section of two lessons.
pub(crate) fn make_page(uuid: ProductUuid, discounted: bool) -> ProductPage {
    let course = || PublicCourse {
        id: CourseUuid::new(),
        name: "Course".to_string(),
        sections: vec![PublicSection {
            id: SectionUuid::new(),
            name: "Section".to_string(),
            lessons: vec![
                PublicLesson {
                    id: LessonUuid::new(),
                    name: "Preview".to_string(),
                    status: LessonStatus::Preview,
                },
                PublicLesson {
                    id: LessonUuid::new(),
                    name: "Lesson".to_string(),
                    status: LessonStatus::Public,
                },
            ],
        }],
    };

    let product = PublicProduct {
        id: uuid,
        name: "Bundle".to_string(),
        description: "Two courses".to_string(),
        price: Decimal::from(100),
        image_url: "https://example.com/bundle.png".to_string(),
        courses: vec![course(), course()],
    };

    let tags = derive_product_tags(&product);

    let price = DiscountedPrice {
        original: product.price,
        discounted: discounted.then_some(Decimal::from(90)),
        discount: discounted.then_some(Decimal::new(1, 1)),
    };

    ProductPage {
        formatted_price: if discounted { "$90" } else { "$100" }.to_string(),
        formatted_original_price: discounted.then(|| "$100".to_string()),
        course_count: 2,
        lesson_count: 4,
        courses_label: "2 courses".to_string(),
        lessons_label: "4 lessons".to_string(),
        already_owned: false,
        product: Arc::new(product),
        price,
        tags,
    }
}
