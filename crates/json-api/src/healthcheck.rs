//! Storefront JSON API Healthcheck Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving requests
    pub status: String,
}

/// Healthcheck handler
///
/// Liveness only; the database and payment provider are not checked.
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_healthcheck_body() -> TestResult {
        let router = Router::new().push(Router::with_path("healthcheck").get(handler));

        let body: Value = TestClient::get("http://example.com/healthcheck")
            .send(&Service::new(router))
            .await
            .take_json()
            .await?;

        assert_eq!(body, json!({ "status": "ok" }));

        Ok(())
    }
}
