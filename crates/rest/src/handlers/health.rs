//! Liveness probe handler.

use axum::Json;

/// Handler for `GET /health`.
///
/// Returns `200 OK` with a small JSON body once the server is accepting
/// requests. The in-memory backend has no dependencies to probe.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_body() {
        let Json(body) = health_handler().await;
        assert_eq!(body["status"], "ok");
    }
}
