//! Cache Revalidation Handler
//!
//! Called by the admin side after catalog writes with the tags produced for
//! the change, evicting every cached product page carrying any of them.

use std::sync::Arc;

use salvo::{
    http::header::AUTHORIZATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront::tags::{CacheTag, CacheTagSet};

use crate::{extensions::*, state::State};

/// Revalidate Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RevalidateRequest {
    /// Cache tags to evict, e.g. `"course:{uuid}-lessons"`
    pub tags: Vec<String>,
}

/// Revalidate Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RevalidateResponse {
    /// Number of cached product pages evicted
    pub evicted: usize,
}

/// Rejects requests without the configured bearer token before the body is read.
#[salvo::handler]
pub(crate) async fn authorize(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let authorized = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => extract_bearer_token(req)
            .is_some_and(|token| state.revalidate_token.matches(token)),
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();

            return;
        }
    };

    if !authorized {
        res.render(StatusError::unauthorized().brief("Missing or invalid revalidation token"));
        ctrl.skip_rest();

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

/// Revalidate Cache Handler
#[endpoint(
    tags("cache"),
    summary = "Revalidate Cache Tags",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Tags revalidated"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RevalidateRequest>,
    depot: &mut Depot,
) -> Result<Json<RevalidateResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let tags = json
        .into_inner()
        .tags
        .into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .map(CacheTag::new)
        .collect::<CacheTagSet>();

    let evicted = state.app.storefront.revalidate(tags);

    Ok(Json(RevalidateResponse { evicted }))
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
