//! Test fixtures

use rust_decimal::Decimal;

use crate::catalog::{
    CourseUuid, LessonStatus, LessonUuid, ProductUuid, PublicCourse, PublicLesson, PublicProduct,
    PublicSection, SectionUuid,
};

pub(crate) fn lesson(name: &str, status: LessonStatus) -> PublicLesson {
    PublicLesson {
        id: LessonUuid::new(),
        name: name.to_string(),
        status,
    }
}

/// Build a product where `shape[c][s]` is the lesson count of section `s` in course `c`.
pub(crate) fn product_with_shape(shape: &[&[usize]]) -> PublicProduct {
    let courses = shape
        .iter()
        .enumerate()
        .map(|(course_number, sections)| PublicCourse {
            id: CourseUuid::new(),
            name: format!("Course {course_number}"),
            sections: sections
                .iter()
                .enumerate()
                .map(|(section_number, lessons)| PublicSection {
                    id: SectionUuid::new(),
                    name: format!("Section {section_number}"),
                    lessons: (0..*lessons)
                        .map(|lesson_number| {
                            lesson(&format!("Lesson {lesson_number}"), LessonStatus::Public)
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    PublicProduct {
        id: ProductUuid::new(),
        name: "Bundle".to_string(),
        description: "A bundle of courses".to_string(),
        price: Decimal::from(100),
        image_url: "https://example.com/bundle.png".to_string(),
        courses,
    }
}
