use board_client::{
    AuthResponse, BoardClientError, Comment, CommentRequest, LoginRequest, Page, Post, PostQuery,
    PostRequest, SignupRequest, error_message_from_body,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::messages::describe_error;
use crate::storage;

const API_BASE_URL: &str = match option_env!("WASM_API_BASE_URL") {
    Some(value) => value,
    None => "",
};

#[derive(Debug)]
pub(crate) enum ApiError {
    Network(String),
    Backend(BoardClientError),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Сервер недоступен: {msg}"),
            Self::Backend(err) => f.write_str(&describe_error(err)),
        }
    }
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn endpoint(path: &str) -> String {
    format!(
        "{}/{}",
        API_BASE_URL.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Токен берётся из `localStorage` перед каждым запросом.
fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match storage::load_session() {
        Some(session) => builder.header("Authorization", &format!("Bearer {}", session.token)),
        None => builder,
    }
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    Err(ApiError::Backend(BoardClientError::from_status(
        status,
        error_message_from_body(&text),
    )))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Backend(BoardClientError::Decode(err.to_string())))
}

async fn get_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let response = authorized(builder).send().await.map_err(network)?;
    decode(ensure_ok(response).await?).await
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    builder: RequestBuilder,
    body: &B,
) -> Result<T, ApiError> {
    let response = authorized(builder)
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    decode(ensure_ok(response).await?).await
}

async fn send_empty(builder: RequestBuilder) -> Result<(), ApiError> {
    let response = authorized(builder).send().await.map_err(network)?;
    ensure_ok(response).await?;
    Ok(())
}

pub(crate) async fn signup(
    username: &str,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    let payload = SignupRequest {
        username,
        email,
        password,
    };
    send_json(Request::post(&endpoint("/api/auth/signup")), &payload).await
}

pub(crate) async fn login(username: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let payload = LoginRequest { username, password };
    send_json(Request::post(&endpoint("/api/auth/login")), &payload).await
}

pub(crate) async fn list_posts(query: &PostQuery) -> Result<Page<Post>, ApiError> {
    let mut params = vec![
        ("page", query.page.to_string()),
        ("size", query.size.to_string()),
    ];
    if let Some(search) = &query.search {
        params.push(("search", search.clone()));
    }
    get_json(Request::get(&endpoint("/api/posts")).query(params)).await
}

pub(crate) async fn get_post(id: i64) -> Result<Post, ApiError> {
    get_json(Request::get(&endpoint(&format!("/api/posts/{id}")))).await
}

pub(crate) async fn create_post(title: &str, content: &str) -> Result<Post, ApiError> {
    let payload = PostRequest { title, content };
    send_json(Request::post(&endpoint("/api/posts")), &payload).await
}

pub(crate) async fn update_post(id: i64, title: &str, content: &str) -> Result<Post, ApiError> {
    let payload = PostRequest { title, content };
    send_json(Request::put(&endpoint(&format!("/api/posts/{id}"))), &payload).await
}

pub(crate) async fn delete_post(id: i64) -> Result<(), ApiError> {
    send_empty(Request::delete(&endpoint(&format!("/api/posts/{id}")))).await
}

pub(crate) async fn list_comments(post_id: i64) -> Result<Vec<Comment>, ApiError> {
    get_json(Request::get(&endpoint(&format!("/api/posts/{post_id}/comments")))).await
}

pub(crate) async fn create_comment(
    post_id: i64,
    content: &str,
    parent_id: Option<i64>,
) -> Result<Comment, ApiError> {
    let payload = CommentRequest { content, parent_id };
    send_json(
        Request::post(&endpoint(&format!("/api/posts/{post_id}/comments"))),
        &payload,
    )
    .await
}

pub(crate) async fn delete_comment(post_id: i64, comment_id: i64) -> Result<(), ApiError> {
    send_empty(Request::delete(&endpoint(&format!(
        "/api/posts/{post_id}/comments/{comment_id}"
    ))))
    .await
}
