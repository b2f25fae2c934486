//! Visitor middleware.
//!
//! Country and identity are supplied by the edge: the country header is set by
//! the CDN or proxy, and the user headers by the authentication proxy in front
//! of this service.

use std::sync::Arc;

use salvo::prelude::*;
use storefront::{catalog::UserUuid, countries::CountryCode};
use storefront_app::domain::{checkout::CheckoutCustomer, storefront::Visitor};

use crate::{extensions::*, state::State};

pub(crate) const USER_ID_HEADER: &str = "x-user-id";
pub(crate) const USER_EMAIL_HEADER: &str = "x-user-email";

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let country_header = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state.country_header.clone(),
        Err(error) => {
            res.render(error);

            return;
        }
    };

    let customer = match extract_customer(req) {
        Ok(customer) => customer,
        Err(error) => {
            res.render(error);

            return;
        }
    };

    let country = req
        .header::<String>(country_header.as_str())
        .as_deref()
        .and_then(CountryCode::parse);

    depot.insert_visitor(Visitor { customer, country });

    ctrl.call_next(req, depot, res).await;
}

fn extract_customer(req: &Request) -> Result<Option<CheckoutCustomer>, StatusError> {
    let Some(id) = req
        .header::<String>(USER_ID_HEADER)
        .filter(|value| !value.trim().is_empty())
    else {
        return Ok(None);
    };

    let id = id
        .trim()
        .parse::<UserUuid>()
        .or_400("invalid x-user-id header")?;

    let email = req
        .header::<String>(USER_EMAIL_HEADER)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| StatusError::bad_request().brief("missing x-user-email header"))?;

    Ok(Some(CheckoutCustomer { id, email }))
}
