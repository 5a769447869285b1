//! Health / heartbeat endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::warn;
use utoipa::OpenApi;

use crate::entities::ContactStore;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_health))]
pub struct HealthApi;

/// Register health-check routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(get_health))
}

/// Heartbeat endpoint.
///
/// Returns `{"status": "ok", "version": "...", "database": "ok"}` with HTTP
/// 200, or HTTP 503 with `"status": "degraded"` when the store does not
/// answer.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server and store are healthy", body = Value),
        (status = 503, description = "Store unreachable", body = Value)
    )
)]
pub async fn get_health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    let (status, overall, database) = match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "ok", "ok"),
        Err(e) => {
            warn!(error = %e, "health check could not reach the store");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
        }
    };
    (
        status,
        Json(json!({
            "status":   overall,
            "version":  env!("CARGO_PKG_VERSION"),
            "database": database,
        })),
    )
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Config;
    use crate::entities::test_support::{close, memory_store};

    fn state(store: crate::entities::AnyStore) -> Arc<AppState> {
        Arc::new(AppState {
            config: Arc::new(Config::default()),
            store: Arc::new(store),
        })
    }

    #[tokio::test]
    async fn health_response_has_ok_status() {
        let (status, Json(body)) = get_health(State(state(memory_store().await))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], "ok");
        assert!(!body["version"].as_str().unwrap_or("").is_empty());
    }

    #[tokio::test]
    async fn closed_store_reports_degraded() {
        let store = memory_store().await;
        close(&store).await;
        let (status, Json(body)) = get_health(State(state(store))).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "degraded");
    }
}
