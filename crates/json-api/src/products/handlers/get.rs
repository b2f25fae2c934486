//! Get Product Page Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductPageResponse},
    state::State,
};

/// Get Product Page Handler
///
/// Returns a public product with its visible courses, priced for the visitor's
/// country.
#[endpoint(
    tags("products"),
    summary = "Get Product Page",
    responses(
        (status_code = StatusCode::OK, description = "Product page"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductPageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let visitor = depot.visitor();

    let page = state
        .app
        .storefront
        .product_page(product.into_inner().into(), visitor)
        .await
        .map_err(into_status_error)?;

    Ok(Json(page.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront::{catalog::ProductUuid, countries::CountryCode};
    use storefront_app::domain::storefront::{MockStorefrontService, StorefrontError};

    use crate::test_helpers::{make_page, storefront_service};

    use super::*;

    fn make_service(storefront: MockStorefrontService) -> Service {
        storefront_service(
            storefront,
            Router::with_path("products/{product}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_returns_discounted_page() -> TestResult {
        let mut storefront = MockStorefrontService::new();
        let uuid = ProductUuid::new();
        let page = make_page(uuid, true);

        storefront
            .expect_product_page()
            .once()
            .withf(move |product, visitor| {
                *product == uuid && visitor.country == CountryCode::parse("EG")
            })
            .return_once(move |_, _| Ok(page));

        storefront.expect_checkout().never();
        storefront.expect_revalidate().never();

        let mut res = TestClient::get(format!("http://example.com/products/{uuid}"))
            .add_header("x-user-country", "EG", true)
            .send(&make_service(storefront))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ProductPageResponse = res.take_json().await?;

        assert_eq!(body.id, uuid.into_uuid());
        assert_eq!(body.price.discounted.as_deref(), Some("90"));
        assert_eq!(body.price.formatted, "$90");
        assert_eq!(body.course_count, 2);
        assert_eq!(body.lesson_count, 4);
        assert_eq!(body.cache_tags.len(), 7);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_404() -> TestResult {
        let mut storefront = MockStorefrontService::new();
        let uuid = ProductUuid::new();

        storefront
            .expect_product_page()
            .once()
            .return_once(|_, _| Err(StorefrontError::NotFound));

        storefront.expect_checkout().never();
        storefront.expect_revalidate().never();

        let res = TestClient::get(format!("http://example.com/products/{uuid}"))
            .send(&make_service(storefront))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_invalid_uuid_returns_400() -> TestResult {
        let mut storefront = MockStorefrontService::new();

        storefront.expect_product_page().never();

        let res = TestClient::get("http://example.com/products/not-a-uuid")
            .send(&make_service(storefront))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
