use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{BoardClientError, BoardClientResult, error_message_from_body};
use crate::models::{
    ApiConfig, AuthResponse, Comment, CommentRequest, LoginRequest, Page, Post, PostQuery,
    PostRequest, SignupRequest, User,
};

#[derive(Debug, Clone)]
/// HTTP-клиент для REST API доски объявлений.
///
/// Токен передаётся в каждый вызов явно: хранением сессии занимается
/// [`crate::BoardClient`].
pub(crate) struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Создаёт HTTP-клиент с базовым URL (прокси или сам бэкенд).
    pub(crate) fn new(base_url: impl Into<String>) -> BoardClientResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Запрос с JSON-заголовком и, если есть токен, `Authorization: Bearer`.
    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = self.endpoint(path);
        debug!(%method, %url, authorized = token.is_some(), "sending request");

        let mut request = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn decode_error(response: Response) -> BoardClientError {
        let status = response.status();
        let url = response.url().to_string();

        let message = match response.text().await {
            Ok(body) => error_message_from_body(&body),
            Err(_) => None,
        };
        warn!(%status, %url, message = message.as_deref().unwrap_or(""), "request failed");

        BoardClientError::from_status(status.as_u16(), message)
    }

    async fn execute(request: RequestBuilder) -> BoardClientResult<Response> {
        let response = request
            .send()
            .await
            .map_err(BoardClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }
        Ok(response)
    }

    /// универсальный helper: запрос с необязательным json-payload и json-ответом
    async fn send_json<TReq, TRes>(
        &self,
        method: Method,
        path: &str,
        body: Option<&TReq>,
        token: Option<&str>,
    ) -> BoardClientResult<TRes>
    where
        TReq: Serialize + ?Sized,
        TRes: DeserializeOwned,
    {
        let mut request = self.request(method, path, token);
        if let Some(body) = body {
            request = request.json(body);
        }

        Self::execute(request)
            .await?
            .json::<TRes>()
            .await
            .map_err(BoardClientError::from_reqwest)
    }

    async fn get_json<TRes>(&self, path: &str, token: Option<&str>) -> BoardClientResult<TRes>
    where
        TRes: DeserializeOwned,
    {
        self.send_json::<(), TRes>(Method::GET, path, None, token)
            .await
    }

    /// Запрос, тело ответа которого не нужно (удаление отвечает пустым 200/204).
    async fn send_empty(&self, method: Method, path: &str, token: Option<&str>) -> BoardClientResult<()> {
        Self::execute(self.request(method, path, token)).await?;
        Ok(())
    }

    pub(crate) async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> BoardClientResult<AuthResponse> {
        let payload = SignupRequest {
            username,
            email,
            password,
        };
        self.send_json(Method::POST, "/api/auth/signup", Some(&payload), None)
            .await
    }

    pub(crate) async fn login(&self, username: &str, password: &str) -> BoardClientResult<AuthResponse> {
        let payload = LoginRequest { username, password };
        self.send_json(Method::POST, "/api/auth/login", Some(&payload), None)
            .await
    }

    pub(crate) async fn list_posts(
        &self,
        token: Option<&str>,
        query: &PostQuery,
    ) -> BoardClientResult<Page<Post>> {
        let request = self.request(Method::GET, "/api/posts", token).query(query);

        Self::execute(request)
            .await?
            .json::<Page<Post>>()
            .await
            .map_err(BoardClientError::from_reqwest)
    }

    pub(crate) async fn get_post(&self, token: Option<&str>, id: i64) -> BoardClientResult<Post> {
        self.get_json(&format!("/api/posts/{id}"), token).await
    }

    pub(crate) async fn create_post(
        &self,
        token: &str,
        title: &str,
        content: &str,
    ) -> BoardClientResult<Post> {
        let payload = PostRequest { title, content };
        self.send_json(Method::POST, "/api/posts", Some(&payload), Some(token))
            .await
    }

    pub(crate) async fn update_post(
        &self,
        token: &str,
        id: i64,
        title: &str,
        content: &str,
    ) -> BoardClientResult<Post> {
        let payload = PostRequest { title, content };
        self.send_json(
            Method::PUT,
            &format!("/api/posts/{id}"),
            Some(&payload),
            Some(token),
        )
        .await
    }

    pub(crate) async fn delete_post(&self, token: &str, id: i64) -> BoardClientResult<()> {
        self.send_empty(Method::DELETE, &format!("/api/posts/{id}"), Some(token))
            .await
    }

    pub(crate) async fn list_comments(
        &self,
        token: Option<&str>,
        post_id: i64,
    ) -> BoardClientResult<Vec<Comment>> {
        self.get_json(&format!("/api/posts/{post_id}/comments"), token)
            .await
    }

    pub(crate) async fn create_comment(
        &self,
        token: &str,
        post_id: i64,
        content: &str,
        parent_id: Option<i64>,
    ) -> BoardClientResult<Comment> {
        let payload = CommentRequest { content, parent_id };
        self.send_json(
            Method::POST,
            &format!("/api/posts/{post_id}/comments"),
            Some(&payload),
            Some(token),
        )
        .await
    }

    pub(crate) async fn delete_comment(
        &self,
        token: &str,
        post_id: i64,
        comment_id: i64,
    ) -> BoardClientResult<()> {
        self.send_empty(
            Method::DELETE,
            &format!("/api/posts/{post_id}/comments/{comment_id}"),
            Some(token),
        )
        .await
    }

    pub(crate) async fn current_user(&self, token: &str) -> BoardClientResult<User> {
        self.get_json("/api/users/me", Some(token)).await
    }

    pub(crate) async fn list_users(&self, token: Option<&str>) -> BoardClientResult<Vec<User>> {
        self.get_json("/api/users", token).await
    }

    pub(crate) async fn get_user(&self, token: Option<&str>, id: i64) -> BoardClientResult<User> {
        self.get_json(&format!("/api/users/{id}"), token).await
    }

    pub(crate) async fn delete_user(&self, token: &str, id: i64) -> BoardClientResult<()> {
        self.send_empty(Method::DELETE, &format!("/api/users/{id}"), Some(token))
            .await
    }

    pub(crate) async fn api_config(&self) -> BoardClientResult<ApiConfig> {
        self.get_json("/api/config", None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalizes_slashes() {
        let client = HttpClient::new("http://localhost:3000/").expect("client should build");
        let full = client.endpoint("/api/posts");
        assert_eq!(full, "http://localhost:3000/api/posts");
    }

    #[test]
    fn endpoint_keeps_nested_paths() {
        let client = HttpClient::new("http://localhost:3000").expect("client should build");
        let full = client.endpoint("api/posts/3/comments/9");
        assert_eq!(full, "http://localhost:3000/api/posts/3/comments/9");
    }
}
