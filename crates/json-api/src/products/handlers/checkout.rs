//! Product Checkout Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// Checkout Session Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutSessionResponse {
    /// Secret the embedded checkout form is mounted with
    pub client_secret: String,
}

/// Product Checkout Handler
///
/// Opens an embedded checkout session for the signed-in visitor, applying the
/// coupon for their country.
#[endpoint(
    tags("products"),
    summary = "Create Checkout Session",
    responses(
        (status_code = StatusCode::OK, description = "Checkout session created"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Visitor is not signed in"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Product already owned"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Payment provider failure"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CheckoutSessionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_or_401()?;
    let country = depot.visitor().country;

    let secret = state
        .app
        .storefront
        .checkout(product.into_inner().into(), customer, country)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CheckoutSessionResponse {
        client_secret: secret.expose().to_string(),
    }))
}
