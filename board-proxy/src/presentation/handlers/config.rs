use axum::{
    Json,
    extract::State,
    http::{HeaderValue, header},
    response::IntoResponse,
};
use serde::Serialize;

use crate::presentation::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConfigResponse {
    pub(crate) api_url: String,
}

/// Адрес API для браузера. Не кэшируется, чтобы смена `API_URL` применялась сразу.
pub(crate) async fn get_config(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        Json(ConfigResponse {
            api_url: state.settings.api_url.clone(),
        }),
    )
}
