use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, HeaderValue, Method, Uri, header},
    response::Response,
};
use tracing::{debug, info};

use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;

/// Пересылает запрос `/api/...` на бэкенд как есть.
///
/// Наружу уходят только `Content-Type: application/json` и `Authorization`
/// клиента. Ответ бэкенда (статус, `Content-Type`, тело) возвращается
/// без разбора, поэтому пустые и текстовые тела проходят без ошибок.
pub(crate) async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Response> {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let url = backend_url(&state.settings.backend_url, path_and_query);

    info!(%method, %url, body_len = body.len(), "forwarding request to backend");

    let mut request = state
        .http
        .request(method, &url)
        .header(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(auth) = headers.get(header::AUTHORIZATION) {
        request = request.header(header::AUTHORIZATION, auth.clone());
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;

    debug!(%url, status = status.as_u16(), body_len = bytes.len(), "backend responded");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}

pub(crate) fn backend_url(base: &str, path_and_query: &str) -> String {
    let base = base.trim_end_matches('/');
    if path_and_query.starts_with('/') {
        format!("{base}{path_and_query}")
    } else {
        format!("{base}/{path_and_query}")
    }
}

#[cfg(test)]
mod tests {
    use super::backend_url;

    #[test]
    fn backend_url_keeps_query() {
        assert_eq!(
            backend_url("http://backend:8080", "/api/posts?page=1&size=10"),
            "http://backend:8080/api/posts?page=1&size=10"
        );
    }

    #[test]
    fn backend_url_normalizes_slashes() {
        assert_eq!(
            backend_url("http://backend:8080/", "api/users/me"),
            "http://backend:8080/api/users/me"
        );
    }
}
