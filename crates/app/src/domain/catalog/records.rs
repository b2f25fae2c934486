//! Catalog Records

use sqlx::{FromRow, Row, postgres::PgRow};
use uuid::Uuid;

use storefront::catalog::{
    CatalogRow, CourseUuid, LessonStatus, LessonUuid, ProductHeader, ProductUuid, SectionUuid,
};

/// Product header row.
#[derive(Debug)]
pub(crate) struct ProductHeaderRecord(pub(crate) ProductHeader);

/// Left-joined course/section/lesson row.
#[derive(Debug)]
pub(crate) struct CatalogRowRecord(pub(crate) CatalogRow);

impl<'r> FromRow<'r, PgRow> for ProductHeaderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self(ProductHeader {
            id: ProductUuid::from_uuid(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            image_url: row.try_get("image_url")?,
        }))
    }
}

impl<'r> FromRow<'r, PgRow> for CatalogRowRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let section_id: Option<Uuid> = row.try_get("section_id")?;
        let section_name: Option<String> = row.try_get("section_name")?;

        let lesson_id: Option<Uuid> = row.try_get("lesson_id")?;
        let lesson_name: Option<String> = row.try_get("lesson_name")?;
        let lesson_status: Option<String> = row.try_get("lesson_status")?;

        let lesson_status = lesson_status
            .map(|status| status.parse::<LessonStatus>())
            .transpose()
            .map_err(|error| sqlx::Error::ColumnDecode {
                index: "lesson_status".to_string(),
                source: Box::new(error),
            })?;

        Ok(Self(CatalogRow {
            course_id: CourseUuid::from_uuid(row.try_get("course_id")?),
            course_name: row.try_get("course_name")?,
            section: section_id
                .zip(section_name)
                .map(|(id, name)| (SectionUuid::from_uuid(id), name)),
            lesson: lesson_id
                .zip(lesson_name)
                .zip(lesson_status)
                .map(|((id, name), status)| (LessonUuid::from_uuid(id), name, status)),
        }))
    }
}
