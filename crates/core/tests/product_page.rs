//! Integration tests for the product page derivations

use rust_decimal::Decimal;
use rusty_money::iso::USD;
use testresult::TestResult;

use storefront::prelude::*;

const COUPONS: &str = "
coupons:
  - stripe_coupon_id: ppp_10
    discount_percentage: 0.1
    country_codes: [EG, MA, IN]
";

fn course(lessons_per_section: &[usize]) -> PublicCourse {
    PublicCourse {
        id: CourseUuid::new(),
        name: "Course".to_string(),
        sections: lessons_per_section
            .iter()
            .map(|lessons| PublicSection {
                id: SectionUuid::new(),
                name: "Section".to_string(),
                lessons: (0..*lessons)
                    .map(|_| PublicLesson {
                        id: LessonUuid::new(),
                        name: "Lesson".to_string(),
                        status: LessonStatus::Public,
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn product(price: Decimal, courses: Vec<PublicCourse>) -> PublicProduct {
    PublicProduct {
        id: ProductUuid::new(),
        name: "Bundle".to_string(),
        description: "Two courses".to_string(),
        price,
        image_url: "https://example.com/bundle.png".to_string(),
        courses,
    }
}

#[test]
fn bundle_of_two_courses_for_egyptian_visitor() -> TestResult {
    let coupons = CouponBook::from_yaml(COUPONS)?;
    let product = product(Decimal::from(100), vec![course(&[2]), course(&[2])]);

    let coupon = coupons.resolve_coupon(CountryCode::parse("eg"));
    let price = price_with_coupon(product.price, coupon);

    assert_eq!(count_courses(&product), 2);
    assert_eq!(count_lessons(&product), 4);
    assert_eq!(derive_product_tags(&product).len(), 7);
    assert_eq!(price.discounted, Some(Decimal::from(90)));
    assert_eq!(
        format_plural(count_courses(&product), "course", "courses"),
        "2 courses"
    );

    Ok(())
}

#[test]
fn free_bundle_is_shown_as_free_everywhere() -> TestResult {
    let coupons = CouponBook::from_yaml(COUPONS)?;
    let product = product(Decimal::ZERO, vec![course(&[1])]);

    let coupon = coupons.resolve_coupon(CountryCode::parse("IN"));
    let price = price_with_coupon(product.price, coupon);

    assert!(coupon.is_some(), "India is covered by the PPP coupon");
    assert_eq!(price.discounted, None);
    assert_eq!(format_price(price.payable(), USD, "Free"), "Free");

    Ok(())
}

#[test]
fn visitor_from_uncovered_country_pays_full_price() -> TestResult {
    let coupons = CouponBook::from_yaml(COUPONS)?;
    let product = product(Decimal::from(100), vec![course(&[3])]);

    let coupon = coupons.resolve_coupon(CountryCode::parse("US"));

    assert_eq!(apply_discount(product.price, coupon), Decimal::from(100));

    Ok(())
}
