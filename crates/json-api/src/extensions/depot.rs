//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use storefront_app::domain::{checkout::CheckoutCustomer, storefront::Visitor};

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_visitor(&mut self, visitor: Visitor);

    /// Visitor resolved by the visitor middleware, anonymous when absent.
    fn visitor(&self) -> Visitor;

    fn customer_or_401(&self) -> Result<CheckoutCustomer, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_visitor(&mut self, visitor: Visitor) {
        self.inject(visitor);
    }

    fn visitor(&self) -> Visitor {
        self.obtain::<Visitor>().cloned().unwrap_or_default()
    }

    fn customer_or_401(&self) -> Result<CheckoutCustomer, StatusError> {
        self.visitor()
            .customer
            .ok_or_else(|| StatusError::unauthorized().brief("Sign in to purchase this product"))
    }
}
