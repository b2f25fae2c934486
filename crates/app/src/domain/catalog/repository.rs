//! Catalog Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{PgPool, Postgres, Transaction, query_as, query_scalar};

use storefront::catalog::{
    LessonStatus, ProductStatus, ProductUuid, PublicProduct, SectionStatus, UserUuid,
};

use crate::domain::catalog::{
    errors::CatalogError,
    records::{CatalogRowRecord, ProductHeaderRecord},
};

const GET_PUBLIC_PRODUCT_SQL: &str = include_str!("sql/get_public_product.sql");
const LIST_PUBLIC_PRODUCT_ROWS_SQL: &str = include_str!("sql/list_public_product_rows.sql");
const USER_OWNS_PRODUCT_SQL: &str = include_str!("sql/user_owns_product.sql");

#[automock]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Fetch a product and its publicly visible courses, sections and lessons.
    ///
    /// Returns `None` when the product does not exist or is not public.
    async fn fetch_public_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<PublicProduct>, CatalogError>;

    /// Whether `user` holds an unrefunded purchase of `product`.
    async fn user_owns_product(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<bool, CatalogError>;
}

#[derive(Debug, Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn get_header(
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Option<ProductHeaderRecord>, sqlx::Error> {
        query_as::<Postgres, ProductHeaderRecord>(GET_PUBLIC_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(ProductStatus::publicly_visible())
            .fetch_optional(&mut **tx)
            .await
    }

    async fn list_rows(
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Vec<CatalogRowRecord>, sqlx::Error> {
        query_as::<Postgres, CatalogRowRecord>(LIST_PUBLIC_PRODUCT_ROWS_SQL)
            .bind(product.into_uuid())
            .bind(SectionStatus::publicly_visible())
            .bind(LessonStatus::publicly_visible())
            .fetch_all(&mut **tx)
            .await
    }
}

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    #[tracing::instrument(
        name = "catalog.fetch_public_product",
        skip(self),
        fields(product_uuid = %product, course_count = tracing::field::Empty),
        err
    )]
    async fn fetch_public_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<PublicProduct>, CatalogError> {
        let mut tx = self.pool.begin().await?;

        let Some(ProductHeaderRecord(header)) = Self::get_header(&mut tx, product).await? else {
            tx.commit().await?;

            return Ok(None);
        };

        let rows = Self::list_rows(&mut tx, product).await?;

        tx.commit().await?;

        let product =
            PublicProduct::assemble(header, rows.into_iter().map(|CatalogRowRecord(row)| row));

        tracing::Span::current().record("course_count", product.course_count());

        Ok(Some(product))
    }

    #[tracing::instrument(
        name = "catalog.user_owns_product",
        skip(self),
        fields(user_uuid = %user, product_uuid = %product),
        err
    )]
    async fn user_owns_product(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<bool, CatalogError> {
        let owned = query_scalar::<Postgres, bool>(USER_OWNS_PRODUCT_SQL)
            .bind(user.into_uuid())
            .bind(product.into_uuid())
            .fetch_one(&self.pool)
            .await?;

        Ok(owned)
    }
}
