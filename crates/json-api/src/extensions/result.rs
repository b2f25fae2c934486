//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::warn;

/// Map errors to logged HTTP errors.
pub(crate) trait ResultExt<T> {
    /// Log the error and reject the request as malformed, using `context` as
    /// the response brief.
    fn or_400(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_400(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            warn!("{context}: {error}");

            StatusError::bad_request().brief(context.to_string())
        })
    }
}
