//! App Router

use salvo::Router;

use crate::{cache, healthcheck, products, visitor};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("products/{product}")
                .hoop(visitor::handler)
                .get(products::get::handler)
                .push(Router::with_path("checkout").post(products::checkout::handler)),
        )
        .push(
            Router::with_path("cache/revalidate")
                .hoop(cache::revalidate::authorize)
                .post(cache::revalidate::handler),
        )
}
