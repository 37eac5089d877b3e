use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::error::{BoardClientError, BoardClientResult};
use crate::http_client::HttpClient;
use crate::models::{ApiConfig, AuthResponse, Comment, Page, Post, PostQuery, User};
use crate::session::Session;
use crate::validation::{CommentForm, LoginForm, PostForm};

#[derive(Debug, Clone)]
/// Клиент REST API доски объявлений.
pub struct BoardClient {
    http_client: HttpClient,
    session: Option<Session>,
    config: Arc<OnceCell<ApiConfig>>,
}

impl BoardClient {
    /// Создаёт клиент для базового URL, например `http://127.0.0.1:3000`.
    pub fn new(base_url: impl Into<String>) -> BoardClientResult<Self> {
        Ok(Self {
            http_client: HttpClient::new(base_url)?,
            session: None,
            config: Arc::new(OnceCell::new()),
        })
    }

    /// Базовый URL, с которым создан клиент.
    pub fn base_url(&self) -> &str {
        self.http_client.base_url()
    }

    /// Восстанавливает ранее сохранённую сессию.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Устанавливает сессию вручную.
    pub fn set_session(&mut self, session: Session) {
        self.session = Some(session);
    }

    /// Текущая сессия, если пользователь вошёл.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Выход: забывает сессию.
    pub fn clear_session(&mut self) {
        self.session = None;
    }

    /// Вошёл ли пользователь.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Регистрирует пользователя и сохраняет полученную сессию.
    ///
    /// Проверку формы (повтор пароля и т.п.) делает вызывающая сторона
    /// через [`crate::validation::SignupForm`].
    pub async fn signup(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> BoardClientResult<AuthResponse> {
        let auth = self.http_client.signup(username, email, password).await?;
        self.remember(&auth)?;
        Ok(auth)
    }

    /// Выполняет вход и сохраняет полученную сессию.
    pub async fn login(&mut self, username: &str, password: &str) -> BoardClientResult<AuthResponse> {
        let form = LoginForm::new(username, password);
        form.check()?;
        let auth = self
            .http_client
            .login(&form.username, &form.password)
            .await?;
        self.remember(&auth)?;
        Ok(auth)
    }

    /// Страница списка постов, с поиском по заголовку и содержимому.
    pub async fn list_posts(&self, query: &PostQuery) -> BoardClientResult<Page<Post>> {
        self.http_client.list_posts(self.token(), query).await
    }

    /// Пост по идентификатору. Бэкенд при этом увеличивает счётчик просмотров.
    pub async fn get_post(&self, id: i64) -> BoardClientResult<Post> {
        self.http_client.get_post(self.token(), id).await
    }

    /// Создаёт пост. Требует сессию.
    pub async fn create_post(&self, title: &str, content: &str) -> BoardClientResult<Post> {
        let token = self.require_token()?;
        PostForm::new(title, content).check()?;
        self.http_client.create_post(token, title, content).await
    }

    /// Обновляет пост. Требует сессию; чужой пост бэкенд отвергнет с 403.
    pub async fn update_post(&self, id: i64, title: &str, content: &str) -> BoardClientResult<Post> {
        let token = self.require_token()?;
        PostForm::new(title, content).check()?;
        self.http_client
            .update_post(token, id, title, content)
            .await
    }

    /// Удаляет пост. Требует сессию.
    pub async fn delete_post(&self, id: i64) -> BoardClientResult<()> {
        let token = self.require_token()?;
        self.http_client.delete_post(token, id).await
    }

    /// Все комментарии поста в порядке создания.
    pub async fn list_comments(&self, post_id: i64) -> BoardClientResult<Vec<Comment>> {
        self.http_client.list_comments(self.token(), post_id).await
    }

    /// Добавляет комментарий или, с `parent_id`, ответ на комментарий.
    /// Требует сессию.
    pub async fn create_comment(
        &self,
        post_id: i64,
        content: &str,
        parent_id: Option<i64>,
    ) -> BoardClientResult<Comment> {
        let token = self.require_token()?;
        CommentForm::new(content).check()?;
        self.http_client
            .create_comment(token, post_id, content, parent_id)
            .await
    }

    /// Удаляет комментарий. Требует сессию.
    pub async fn delete_comment(&self, post_id: i64, comment_id: i64) -> BoardClientResult<()> {
        let token = self.require_token()?;
        self.http_client
            .delete_comment(token, post_id, comment_id)
            .await
    }

    /// Профиль текущего пользователя. Требует сессию.
    pub async fn current_user(&self) -> BoardClientResult<User> {
        let token = self.require_token()?;
        self.http_client.current_user(token).await
    }

    /// Список пользователей.
    pub async fn list_users(&self) -> BoardClientResult<Vec<User>> {
        self.http_client.list_users(self.token()).await
    }

    /// Пользователь по идентификатору.
    pub async fn get_user(&self, id: i64) -> BoardClientResult<User> {
        self.http_client.get_user(self.token(), id).await
    }

    /// Удаляет пользователя. Требует сессию.
    pub async fn delete_user(&self, id: i64) -> BoardClientResult<()> {
        let token = self.require_token()?;
        self.http_client.delete_user(token, id).await
    }

    /// Конфигурация из `/api/config`.
    ///
    /// Запрашивается один раз; клоны клиента делят закэшированное значение.
    pub async fn api_config(&self) -> BoardClientResult<&ApiConfig> {
        self.config
            .get_or_try_init(|| self.http_client.api_config())
            .await
    }

    fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.token.as_str())
    }

    fn require_token(&self) -> BoardClientResult<&str> {
        self.token().ok_or(BoardClientError::Unauthorized)
    }

    fn remember(&mut self, auth: &AuthResponse) -> BoardClientResult<()> {
        let session = Session::from_auth(auth.clone()).ok_or_else(|| {
            BoardClientError::Decode("auth response contains an empty token".to_string())
        })?;
        self.session = Some(session);
        Ok(())
    }
}
