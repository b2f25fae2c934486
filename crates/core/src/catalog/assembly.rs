//! Product tree assembly
//!
//! The data layer returns one flat row per (course, section, lesson) triple,
//! left-joined so that courses without sections and sections without lessons
//! still produce a row. [`PublicProduct::assemble`] folds those rows back into
//! the nested tree.

use rust_decimal::Decimal;
use rustc_hash::{FxHashMap, FxHashSet};

use super::{
    CourseUuid, LessonStatus, LessonUuid, ProductUuid, PublicCourse, PublicLesson, PublicProduct,
    PublicSection, SectionUuid,
};

/// Product columns fetched alongside the tree rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductHeader {
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
}

/// One left-joined course/section/lesson row, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    /// Course id
    pub course_id: CourseUuid,

    /// Course name
    pub course_name: String,

    /// Section, if the course has any visible section
    pub section: Option<(SectionUuid, String)>,

    /// Lesson, if the section has any visible lesson
    pub lesson: Option<(LessonUuid, String, LessonStatus)>,
}

impl PublicProduct {
    /// Build the nested product tree from ordered rows.
    ///
    /// Courses, sections and lessons keep the order of their first appearance.
    /// A course reached through more than one association row is only listed
    /// once.
    pub fn assemble<I>(header: ProductHeader, rows: I) -> Self
    where
        I: IntoIterator<Item = CatalogRow>,
    {
        let mut courses: Vec<PublicCourse> = Vec::new();
        let mut course_index: FxHashMap<CourseUuid, usize> = FxHashMap::default();
        let mut section_index: FxHashMap<SectionUuid, usize> = FxHashMap::default();
        let mut seen_lessons: FxHashSet<LessonUuid> = FxHashSet::default();

        for row in rows {
            let course_position = *course_index.entry(row.course_id).or_insert_with(|| {
                courses.push(PublicCourse {
                    id: row.course_id,
                    name: row.course_name.clone(),
                    sections: Vec::new(),
                });

                courses.len() - 1
            });

            let Some((section_id, section_name)) = row.section else {
                continue;
            };

            let Some(course) = courses.get_mut(course_position) else {
                continue;
            };

            let section_position = *section_index.entry(section_id).or_insert_with(|| {
                course.sections.push(PublicSection {
                    id: section_id,
                    name: section_name,
                    lessons: Vec::new(),
                });

                course.sections.len() - 1
            });

            let Some((lesson_id, lesson_name, status)) = row.lesson else {
                continue;
            };

            if !seen_lessons.insert(lesson_id) {
                continue;
            }

            if let Some(section) = course.sections.get_mut(section_position) {
                section.lessons.push(PublicLesson {
                    id: lesson_id,
                    name: lesson_name,
                    status,
                });
            }
        }

        Self {
            id: header.id,
            name: header.name,
            description: header.description,
            price: header.price,
            image_url: header.image_url,
            courses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> ProductHeader {
        ProductHeader {
            id: ProductUuid::new(),
            name: "Web Dev Bundle".to_string(),
            description: "Everything".to_string(),
            price: Decimal::from(100),
            image_url: "https://example.com/bundle.png".to_string(),
        }
    }

    fn row(
        course: CourseUuid,
        section: Option<SectionUuid>,
        lesson: Option<LessonUuid>,
    ) -> CatalogRow {
        CatalogRow {
            course_id: course,
            course_name: format!("course {course}"),
            section: section.map(|id| (id, format!("section {id}"))),
            lesson: lesson.map(|id| (id, format!("lesson {id}"), LessonStatus::Public)),
        }
    }

    #[test]
    fn assemble_nests_rows_in_order() {
        let course = CourseUuid::new();
        let first_section = SectionUuid::new();
        let second_section = SectionUuid::new();
        let lessons = [LessonUuid::new(), LessonUuid::new(), LessonUuid::new()];

        let product = PublicProduct::assemble(
            header(),
            [
                row(course, Some(first_section), Some(lessons[0])),
                row(course, Some(first_section), Some(lessons[1])),
                row(course, Some(second_section), Some(lessons[2])),
            ],
        );

        assert_eq!(product.course_count(), 1);
        assert_eq!(product.courses[0].section_count(), 2);

        let ids: Vec<LessonUuid> = product.courses[0]
            .sections
            .iter()
            .flat_map(|section| section.lessons.iter().map(|lesson| lesson.id))
            .collect();

        assert_eq!(ids, lessons.to_vec());
    }

    #[test]
    fn assemble_keeps_empty_courses_and_sections() {
        let empty_course = CourseUuid::new();
        let course = CourseUuid::new();
        let empty_section = SectionUuid::new();

        let product = PublicProduct::assemble(
            header(),
            [
                row(empty_course, None, None),
                row(course, Some(empty_section), None),
            ],
        );

        assert_eq!(product.course_count(), 2);
        assert_eq!(product.courses[0].section_count(), 0);
        assert_eq!(product.courses[1].section_count(), 1);
        assert_eq!(product.lesson_count(), 0);
    }

    #[test]
    fn assemble_lists_repeated_course_once() {
        let course = CourseUuid::new();
        let section = SectionUuid::new();
        let lesson = LessonUuid::new();

        let product = PublicProduct::assemble(
            header(),
            [
                row(course, Some(section), Some(lesson)),
                row(course, Some(section), Some(lesson)),
            ],
        );

        assert_eq!(product.course_count(), 1);
        assert_eq!(product.lesson_count(), 1);
    }
}
