use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

pub(crate) type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let msg = match &self {
            AppError::Upstream(err) => {
                error!(error = %err, url = ?err.url().map(|u| u.as_str()), "backend request failed");
                "Backend request failed"
            }
            AppError::Internal(err) => {
                error!(error = ?err, "internal proxy error");
                "internal error"
            }
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: msg.to_string(),
            }),
        )
            .into_response()
    }
}
