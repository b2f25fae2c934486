//! Cache Tags
//!
//! Cached product pages are labelled with tags naming every entity they were
//! rendered from. When an entity changes, [`invalidation_tags`] yields the tags
//! to revalidate and every cached page carrying one of them is expired.
//!
//! Tags follow four shapes:
//!
//! | scope     | format                      |
//! |-----------|-----------------------------|
//! | global    | `global:{kind}`             |
//! | identity  | `id:{id}-{kind}`            |
//! | course    | `course:{course_id}-{kind}` |
//! | user      | `user:{user_id}-{kind}`     |

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

use crate::catalog::{CourseUuid, LessonUuid, ProductUuid, PublicProduct, SectionUuid, UserUuid};

pub mod collection;

pub use collection::CacheTagSet;

/// An opaque cache invalidation key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheTag(String);

impl CacheTag {
    /// Wrap a raw tag string.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CacheTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The kind of data a tag covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKind {
    /// Products
    Products,
    /// Courses
    Courses,
    /// Course sections
    CourseSections,
    /// Lessons
    Lessons,
    /// Purchases
    Purchases,
}

impl CacheKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Courses => "courses",
            Self::CourseSections => "courseSections",
            Self::Lessons => "lessons",
            Self::Purchases => "purchases",
        }
    }
}

/// Tag covering every entity of a kind.
pub fn global_tag(kind: CacheKind) -> CacheTag {
    CacheTag(format!("global:{}", kind.as_str()))
}

/// Tag covering a single entity.
pub fn id_tag(id: impl fmt::Display, kind: CacheKind) -> CacheTag {
    CacheTag(format!("id:{id}-{}", kind.as_str()))
}

/// Tag covering the entities of a kind that belong to one course.
pub fn course_tag(course: CourseUuid, kind: CacheKind) -> CacheTag {
    CacheTag(format!("course:{course}-{}", kind.as_str()))
}

/// Tag covering the entities of a kind that belong to one user.
pub fn user_tag(user: UserUuid, kind: CacheKind) -> CacheTag {
    CacheTag(format!("user:{user}-{}", kind.as_str()))
}

/// Identity tag of a product.
pub fn product_id_tag(product: ProductUuid) -> CacheTag {
    id_tag(product, CacheKind::Products)
}

/// Identity tag of a course.
pub fn course_id_tag(course: CourseUuid) -> CacheTag {
    id_tag(course, CacheKind::Courses)
}

/// Tag covering the lessons of a course.
pub fn lesson_course_tag(course: CourseUuid) -> CacheTag {
    course_tag(course, CacheKind::Lessons)
}

/// Tag covering the sections of a course.
pub fn course_section_course_tag(course: CourseUuid) -> CacheTag {
    course_tag(course, CacheKind::CourseSections)
}

/// Tag covering the purchases of a user.
pub fn user_purchases_tag(user: UserUuid) -> CacheTag {
    user_tag(user, CacheKind::Purchases)
}

/// Derive the tags a cached product page must carry.
///
/// One product identity tag, then for every course its identity tag, its
/// lessons tag and its sections tag. A course listed twice contributes its
/// tags once.
pub fn derive_product_tags(product: &PublicProduct) -> CacheTagSet {
    let mut tags = CacheTagSet::new();

    tags.insert(product_id_tag(product.id));

    for course in &product.courses {
        tags.insert(course_id_tag(course.id));
        tags.insert(lesson_course_tag(course.id));
        tags.insert(course_section_course_tag(course.id));
    }

    tags
}

/// A change to stored catalog data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityChange {
    /// A product was created, updated or deleted.
    Product(ProductUuid),

    /// A course was created, updated or deleted.
    Course(CourseUuid),

    /// A course section was created, updated or deleted.
    Section {
        /// Section id
        section: SectionUuid,
        /// Owning course
        course: CourseUuid,
    },

    /// A lesson was created, updated or deleted.
    Lesson {
        /// Lesson id
        lesson: LessonUuid,
        /// Course owning the lesson's section
        course: CourseUuid,
    },

    /// A purchase was recorded or refunded.
    Purchase {
        /// Product purchased
        product: ProductUuid,
        /// Purchasing user
        user: UserUuid,
    },
}

/// Tags to revalidate after `change`.
pub fn invalidation_tags(change: EntityChange) -> CacheTagSet {
    match change {
        EntityChange::Product(product) => [
            global_tag(CacheKind::Products),
            product_id_tag(product),
        ]
        .into_iter()
        .collect(),
        EntityChange::Course(course) => [global_tag(CacheKind::Courses), course_id_tag(course)]
            .into_iter()
            .collect(),
        EntityChange::Section { section, course } => [
            global_tag(CacheKind::CourseSections),
            id_tag(section, CacheKind::CourseSections),
            course_section_course_tag(course),
        ]
        .into_iter()
        .collect(),
        EntityChange::Lesson { lesson, course } => [
            global_tag(CacheKind::Lessons),
            id_tag(lesson, CacheKind::Lessons),
            lesson_course_tag(course),
        ]
        .into_iter()
        .collect(),
        EntityChange::Purchase { product, user } => [
            global_tag(CacheKind::Purchases),
            id_tag(product, CacheKind::Purchases),
            user_purchases_tag(user),
        ]
        .into_iter()
        .collect(),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::fixtures::product_with_shape;

    use super::*;

    #[test]
    fn tag_formats_match_scopes() {
        let product = ProductUuid::new();
        let course = CourseUuid::new();

        assert_eq!(global_tag(CacheKind::Products).as_str(), "global:products");
        assert_eq!(
            product_id_tag(product).to_string(),
            format!("id:{product}-products")
        );
        assert_eq!(
            course_section_course_tag(course).to_string(),
            format!("course:{course}-courseSections")
        );
        assert_eq!(
            lesson_course_tag(course).to_string(),
            format!("course:{course}-lessons")
        );
    }

    #[test]
    fn two_courses_derive_seven_tags() {
        let product = product_with_shape(&[&[2], &[2]]);
        let tags = derive_product_tags(&product);

        assert_eq!(tags.len(), 7);
        assert!(tags.contains(product_id_tag(product.id).as_str()));

        for course in &product.courses {
            assert!(tags.contains(course_id_tag(course.id).as_str()));
            assert!(tags.contains(lesson_course_tag(course.id).as_str()));
            assert!(tags.contains(course_section_course_tag(course.id).as_str()));
        }
    }

    #[test]
    fn repeated_course_contributes_tags_once() {
        let mut product = product_with_shape(&[&[1]]);
        let repeated = product.courses[0].clone();

        product.courses.push(repeated);

        assert_eq!(derive_product_tags(&product).len(), 4);
    }

    #[test]
    fn lesson_change_expires_pages_of_its_course() {
        let product = product_with_shape(&[&[1], &[1]]);
        let course = product.courses[1].id;
        let lesson = product.courses[1].sections[0].lessons[0].id;

        let page = derive_product_tags(&product);
        let stale = invalidation_tags(EntityChange::Lesson { lesson, course });

        assert!(page.intersects(&stale));
    }

    #[test]
    fn unrelated_section_change_keeps_page() {
        let product = product_with_shape(&[&[1]]);
        let page = derive_product_tags(&product);

        let stale = invalidation_tags(EntityChange::Section {
            section: SectionUuid::new(),
            course: CourseUuid::new(),
        });

        assert!(!page.intersects(&stale));
    }

    #[test]
    fn product_change_expires_its_page() {
        let product = product_with_shape(&[]);
        let page = derive_product_tags(&product);

        assert!(page.intersects(&invalidation_tags(EntityChange::Product(product.id))));
    }

    proptest! {
        #[test]
        fn tag_count_is_one_plus_three_per_distinct_course(
            courses in 0_usize..12,
            repeats in prop::collection::vec(0_usize..12, 0..6),
        ) {
            let shape: Vec<&[usize]> = (0..courses).map(|_| &[1_usize][..]).collect();
            let mut product = product_with_shape(&shape);

            for index in repeats {
                if let Some(course) = product.courses.get(index).cloned() {
                    product.courses.push(course);
                }
            }

            prop_assert_eq!(derive_product_tags(&product).len(), 1 + 3 * courses);
        }
    }
}
