//! Catalog
//!
//! The public product tree rendered on a product page: a product, the courses
//! it bundles, their sections and their lessons. Every node in the tree has
//! already passed the public visibility predicates in [`visibility`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::uuids::TypedUuid;

pub mod assembly;
pub mod visibility;

pub use assembly::{CatalogRow, ProductHeader};
pub use visibility::{LessonStatus, ProductStatus, SectionStatus};

/// Product UUID
pub type ProductUuid = TypedUuid<PublicProduct>;

/// Course UUID
pub type CourseUuid = TypedUuid<PublicCourse>;

/// Course Section UUID
pub type SectionUuid = TypedUuid<PublicSection>;

/// Lesson UUID
pub type LessonUuid = TypedUuid<PublicLesson>;

/// Storefront customer.
#[derive(Debug)]
pub struct User;

/// User UUID
pub type UserUuid = TypedUuid<User>;

/// A publicly visible product with its nested courses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicProduct {
    /// Product id
    pub id: ProductUuid,

    /// Product name
    pub name: String,

    /// Product description
    pub description: String,

    /// Product price in major currency units
    pub price: Decimal,

    /// Product image
    pub image_url: String,

    /// Courses bundled by the product, in association order
    pub courses: Vec<PublicCourse>,
}

impl PublicProduct {
    /// Number of courses bundled by this product.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Number of lessons across every course and section.
    pub fn lesson_count(&self) -> usize {
        self.courses.iter().map(PublicCourse::lesson_count).sum()
    }
}

/// A course within a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicCourse {
    /// Course id
    pub id: CourseUuid,

    /// Course name
    pub name: String,

    /// Sections, ordered by their `order` column
    pub sections: Vec<PublicSection>,
}

impl PublicCourse {
    /// Number of visible sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of visible lessons across all sections.
    pub fn lesson_count(&self) -> usize {
        self.sections.iter().map(PublicSection::lesson_count).sum()
    }
}

/// A section within a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicSection {
    /// Section id
    pub id: SectionUuid,

    /// Section name
    pub name: String,

    /// Lessons, ordered by their `order` column
    pub lessons: Vec<PublicLesson>,
}

impl PublicSection {
    /// Number of visible lessons.
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }
}

/// A lesson within a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicLesson {
    /// Lesson id
    pub id: LessonUuid,

    /// Lesson name
    pub name: String,

    /// Lesson status; always publicly visible here
    pub status: LessonStatus,
}

impl PublicLesson {
    /// Path of the free preview for `preview` lessons.
    pub fn preview_path(&self, course: CourseUuid) -> Option<String> {
        (self.status == LessonStatus::Preview)
            .then(|| format!("/courses/{course}/lessons/{}", self.id))
    }
}

/// Count the courses bundled by a product.
pub fn count_courses(product: &PublicProduct) -> usize {
    product.course_count()
}

/// Count the lessons of a product, summed over every course and section.
pub fn count_lessons(product: &PublicProduct) -> usize {
    product.lesson_count()
}
