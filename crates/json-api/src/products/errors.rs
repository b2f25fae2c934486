//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::storefront::StorefrontError;

pub(crate) fn into_status_error(error: StorefrontError) -> StatusError {
    match error {
        StorefrontError::NotFound => StatusError::not_found().brief("Product not found"),
        StorefrontError::AlreadyOwned => {
            StatusError::conflict().brief("You already own this product")
        }
        StorefrontError::Catalog(source) => {
            error!(error = ?source, "failed to load product");

            StatusError::internal_server_error()
        }
        StorefrontError::Checkout(source) => {
            error!(error = ?source, "failed to create checkout session");

            StatusError::bad_gateway()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use storefront_app::domain::{catalog::CatalogError, checkout::CheckoutError};

    use super::*;

    #[test]
    fn maps_storefront_errors_to_status_codes() {
        let cases = [
            (StorefrontError::NotFound, StatusCode::NOT_FOUND),
            (StorefrontError::AlreadyOwned, StatusCode::CONFLICT),
            (
                StorefrontError::Catalog(CatalogError::Sql(sqlx::Error::PoolTimedOut)),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                StorefrontError::Checkout(CheckoutError::MissingClientSecret),
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(into_status_error(error).code, expected);
        }
    }
}
