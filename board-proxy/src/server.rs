use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use crate::infrastructure::settings::Settings;
use crate::presentation::middleware::cors::apply_cors;
use crate::presentation::middleware::limit::apply_limits;
use crate::presentation::middleware::trace::apply_trace;
use crate::presentation::{AppState, http_handlers};

pub(crate) async fn run_http(settings: &Settings, state: AppState) -> anyhow::Result<()> {
    let app = build_app(settings, state)?;

    let listener = TcpListener::bind(&settings.http_addr).await?;

    info!("HTTP proxy listening on {}", settings.http_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

pub(crate) fn build_app(settings: &Settings, state: AppState) -> anyhow::Result<Router> {
    let app = build_router(settings, state);
    let app = apply_limits(app, settings);
    let app = apply_trace(app);
    apply_cors(app, settings)
}

pub(crate) fn build_router(settings: &Settings, state: AppState) -> Router {
    let router = http_handlers::routes(state);

    // Всё, что не /api, отдаётся из собранного фронтенда; неизвестные пути получают index.html.
    match &settings.static_dir {
        Some(dir) => {
            let index = dir.join("index.html");
            router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => router,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use wiremock::matchers::{body_json, header as header_eq, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_settings(backend_url: &str) -> Settings {
        Settings {
            backend_url: backend_url.to_string(),
            api_url: "http://api.example.test".to_string(),
            http_addr: "127.0.0.1:0".to_string(),
            static_dir: None,
            cors_origins: vec!["*".to_string()],
            log_level: "debug".to_string(),
            proxy_request_timeout_secs: 5,
            http_request_body_limit_bytes: 1024 * 1024,
            http_concurrency_limit: 16,
        }
    }

    fn app(settings: Settings) -> Router {
        let settings = Arc::new(settings);
        let state = AppState::new(settings.clone()).expect("state");
        build_app(&settings, state).expect("app")
    }

    async fn read_body(response: axum::response::Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body")
            .to_vec()
    }

    #[tokio::test]
    async fn healthz_returns_ok() {
        let app = app(test_settings("http://127.0.0.1:1"));

        let response = app
            .oneshot(Request::get("/healthz").body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&read_body(response).await).expect("json");
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn config_is_served_without_caching() {
        let app = app(test_settings("http://127.0.0.1:1"));

        let response = app
            .oneshot(Request::get("/api/config").body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).expect("cache header"),
            "no-store"
        );
        let body: Value = serde_json::from_slice(&read_body(response).await).expect("json");
        assert_eq!(body, json!({ "apiUrl": "http://api.example.test" }));
    }

    #[tokio::test]
    async fn get_keeps_query_and_authorization() {
        let backend = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/posts"))
            .and(query_param("page", "2"))
            .and(query_param("search", "rust"))
            .and(header_eq("authorization", "Bearer token-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [],
                "totalPages": 0,
                "totalElements": 0,
                "number": 2,
                "size": 10,
                "first": false,
                "last": true
            })))
            .expect(1)
            .mount(&backend)
            .await;

        let app = app(test_settings(&backend.uri()));
        let response = app
            .oneshot(
                Request::get("/api/posts?page=2&size=10&search=rust")
                    .header(header::AUTHORIZATION, "Bearer token-1")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&read_body(response).await).expect("json");
        assert_eq!(body["number"], 2);
    }

    #[tokio::test]
    async fn post_body_is_forwarded_as_json() {
        let backend = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/posts/5/comments"))
            .and(header_eq("content-type", "application/json"))
            .and(body_json(json!({ "content": "hi", "parentId": null })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 9 })))
            .expect(1)
            .mount(&backend)
            .await;

        let app = app(test_settings(&backend.uri()));
        let response = app
            .oneshot(
                Request::post("/api/posts/5/comments")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"content":"hi","parentId":null}"#))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn empty_delete_response_passes_through() {
        let backend = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/posts/3"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&backend)
            .await;

        let app = app(test_settings(&backend.uri()));
        let response = app
            .oneshot(
                Request::delete("/api/posts/3")
                    .header(header::AUTHORIZATION, "Bearer token-1")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert!(read_body(response).await.is_empty());
    }

    #[tokio::test]
    async fn plain_text_error_keeps_status_and_body() {
        let backend = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/posts/3"))
            .respond_with(ResponseTemplate::new(403).set_body_raw("Forbidden", "text/plain"))
            .mount(&backend)
            .await;

        let app = app(test_settings(&backend.uri()));
        let response = app
            .oneshot(
                Request::put("/api/posts/3")
                    .body(Body::from(r#"{"title":"t","content":"c"}"#))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .expect("content type")
            .to_str()
            .expect("ascii")
            .to_string();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(read_body(response).await, b"Forbidden");
    }

    #[tokio::test]
    async fn unreachable_backend_yields_json_error() {
        let app = app(test_settings("http://127.0.0.1:1"));

        let response = app
            .oneshot(Request::get("/api/posts").body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = serde_json::from_slice(&read_body(response).await).expect("json");
        assert_eq!(body, json!({ "error": "Backend request failed" }));
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let mut settings = test_settings("http://127.0.0.1:1");
        settings.http_request_body_limit_bytes = 16;
        let app = app(settings);

        let response = app
            .oneshot(
                Request::post("/api/posts")
                    .header(header::CONTENT_LENGTH, "64")
                    .body(Body::from(vec![b'x'; 64]))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn static_dir_falls_back_to_index() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("index.html"), "<html>board</html>").expect("write index");

        let mut settings = test_settings("http://127.0.0.1:1");
        settings.static_dir = Some(dir.path().to_path_buf());
        let app = app(settings);

        let response = app
            .oneshot(Request::get("/posts/42").body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_body(response).await, b"<html>board</html>");
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<std::sync::Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn text(&self) -> String {
            let buf = self.0.lock().expect("log buffer");
            String::from_utf8_lossy(&buf).into_owned()
        }
    }

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[tokio::test]
    async fn forwarded_target_is_logged_at_info() {
        let backend = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "content": [] })))
            .mount(&backend)
            .await;

        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(logs.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let app = app(test_settings(&backend.uri()));
        let response = app
            .oneshot(Request::get("/api/posts?page=0").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let target = format!("{}/api/posts?page=0", backend.uri());
        let captured = logs.text();
        assert!(captured.contains("forwarding request to backend"), "{captured}");
        assert!(captured.contains(&target), "{captured}");
        assert!(captured.contains("INFO"), "{captured}");
    }

    #[tokio::test]
    async fn no_content_delete_stays_empty() {
        let backend = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/posts/3/comments/4"))
            .and(header_eq("authorization", "Bearer token-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&backend)
            .await;

        let app = app(test_settings(&backend.uri()));
        let response = app
            .oneshot(
                Request::delete("/api/posts/3/comments/4")
                    .header(header::AUTHORIZATION, "Bearer token-1")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(read_body(response).await.is_empty());
    }

    #[tokio::test]
    async fn put_keeps_query_string() {
        let backend = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/posts/3"))
            .and(query_param("notify", "true"))
            .and(body_json(json!({ "title": "t", "content": "c" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 3 })))
            .expect(1)
            .mount(&backend)
            .await;

        let app = app(test_settings(&backend.uri()));
        let response = app
            .oneshot(
                Request::put("/api/posts/3?notify=true")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"title":"t","content":"c"}"#))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&read_body(response).await).expect("json");
        assert_eq!(body["id"], 3);
    }
}
