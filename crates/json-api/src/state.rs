//! State

use std::sync::Arc;

use storefront_app::context::AppContext;

use crate::cache::token::RevalidateToken;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Header carrying the visitor's country code
    pub(crate) country_header: String,

    /// Bearer token guarding cache revalidation
    pub(crate) revalidate_token: RevalidateToken,
}

impl State {
    #[must_use]
    pub(crate) fn new(
        app: AppContext,
        country_header: String,
        revalidate_token: RevalidateToken,
    ) -> Self {
        Self {
            app,
            country_header,
            revalidate_token,
        }
    }

    #[must_use]
    pub(crate) fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
