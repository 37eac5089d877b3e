use axum::{Json, Router, routing::get};
use serde::Serialize;

use super::AppState;
use super::handlers::{config, proxy};

pub(crate) fn routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/api/config", get(config::get_config))
        .route(
            "/api/{*path}",
            get(proxy::forward)
                .post(proxy::forward)
                .put(proxy::forward)
                .delete(proxy::forward),
        )
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthzResponse {
    status: &'static str,
}

async fn health_handler() -> Json<HealthzResponse> {
    Json(HealthzResponse { status: "ok" })
}
