//! Product Page Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront::catalog::{PublicCourse, PublicLesson, PublicSection};
use storefront_app::domain::storefront::ProductPage;

/// Product page
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductPageResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: PriceResponse,

    /// Number of courses bundled by the product
    pub course_count: usize,

    /// Number of visible lessons across all courses
    pub lesson_count: usize,

    /// e.g. "2 courses"
    pub courses_label: String,

    /// e.g. "4 lessons"
    pub lessons_label: String,

    /// Whether the signed-in visitor already purchased the product
    pub already_owned: bool,

    pub courses: Vec<CourseResponse>,

    /// Tags this page is cached under
    pub cache_tags: Vec<String>,
}

/// Price shown to the visitor. Amounts are decimal strings in major units.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PriceResponse {
    pub original: String,
    pub discounted: Option<String>,

    /// Fraction taken off by the country coupon, e.g. "0.1"
    pub discount: Option<String>,

    /// Payable amount, formatted in the store currency
    pub formatted: String,

    /// Undiscounted amount, formatted, when a coupon applied
    pub formatted_original: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CourseResponse {
    pub id: Uuid,
    pub name: String,
    pub sections: Vec<SectionResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SectionResponse {
    pub id: Uuid,
    pub name: String,
    pub lessons: Vec<LessonResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LessonResponse {
    pub id: Uuid,
    pub name: String,
    pub status: String,

    /// Link to the free preview, for preview lessons only
    pub preview_path: Option<String>,
}

impl From<ProductPage> for ProductPageResponse {
    fn from(page: ProductPage) -> Self {
        let product = page.product.as_ref();

        ProductPageResponse {
            id: product.id.into_uuid(),
            name: product.name.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            price: PriceResponse {
                original: page.price.original.normalize().to_string(),
                discounted: page.price.discounted.map(|amount| amount.normalize().to_string()),
                discount: page.price.discount.map(|fraction| fraction.normalize().to_string()),
                formatted: page.formatted_price,
                formatted_original: page.formatted_original_price,
            },
            course_count: page.course_count,
            lesson_count: page.lesson_count,
            courses_label: page.courses_label,
            lessons_label: page.lessons_label,
            already_owned: page.already_owned,
            courses: product.courses.iter().map(CourseResponse::from).collect(),
            cache_tags: page.tags.iter().map(ToString::to_string).collect(),
        }
    }
}

impl From<&PublicCourse> for CourseResponse {
    fn from(course: &PublicCourse) -> Self {
        CourseResponse {
            id: course.id.into_uuid(),
            name: course.name.clone(),
            sections: course
                .sections
                .iter()
                .map(|section| section_response(course, section))
                .collect(),
        }
    }
}

fn section_response(course: &PublicCourse, section: &PublicSection) -> SectionResponse {
    SectionResponse {
        id: section.id.into_uuid(),
        name: section.name.clone(),
        lessons: section
            .lessons
            .iter()
            .map(|lesson| lesson_response(course, lesson))
            .collect(),
    }
}

fn lesson_response(course: &PublicCourse, lesson: &PublicLesson) -> LessonResponse {
    LessonResponse {
        id: lesson.id.into_uuid(),
        name: lesson.name.clone(),
        status: lesson.status.to_string(),
        preview_path: lesson.preview_path(course.id),
    }
}
