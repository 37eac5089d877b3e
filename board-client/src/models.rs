use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Размер страницы списка постов по умолчанию.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Публичная модель поста.
pub struct Post {
    /// Идентификатор поста.
    pub id: i64,
    /// Заголовок поста.
    pub title: String,
    /// Содержимое поста.
    pub content: String,
    /// Логин автора.
    pub author_username: String,
    /// Количество просмотров.
    #[serde(default)]
    pub view_count: i64,
    /// Дата и время создания (бэкенд отдаёт время без смещения).
    pub created_at: NaiveDateTime,
    /// Дата и время последнего обновления.
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Комментарий к посту. Ответ на другой комментарий имеет `parent_id`.
pub struct Comment {
    /// Идентификатор комментария.
    pub id: i64,
    /// Текст комментария.
    pub content: String,
    /// Логин автора.
    pub author_username: String,
    /// Идентификатор поста.
    pub post_id: i64,
    /// Родительский комментарий (только один уровень вложенности).
    #[serde(default)]
    pub parent_id: Option<i64>,
    /// Дата и время создания.
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Публичная модель пользователя.
pub struct User {
    /// Идентификатор пользователя.
    pub id: i64,
    /// Логин.
    pub username: String,
    /// Email.
    pub email: String,
    /// Роль (`USER`, `ADMIN`), если бэкенд её отдаёт.
    #[serde(default)]
    pub role: Option<String>,
    /// Дата регистрации, если бэкенд её отдаёт.
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Ответ после успешной регистрации или входа.
pub struct AuthResponse {
    /// JWT access token.
    pub token: String,
    /// Логин.
    pub username: String,
    /// Email.
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Страница выборки в формате бэкенда (`content` + метаданные пагинации).
pub struct Page<T> {
    /// Элементы текущей страницы.
    pub content: Vec<T>,
    /// Общее количество страниц.
    #[serde(default)]
    pub total_pages: u32,
    /// Общее количество элементов.
    #[serde(default)]
    pub total_elements: u64,
    /// Номер текущей страницы (с нуля).
    #[serde(default)]
    pub number: u32,
    /// Размер страницы.
    #[serde(default)]
    pub size: u32,
    /// Первая ли это страница.
    #[serde(default)]
    pub first: bool,
    /// Последняя ли это страница.
    #[serde(default)]
    pub last: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Параметры запроса списка постов.
pub struct PostQuery {
    /// Номер страницы, начиная с нуля.
    pub page: u32,
    /// Размер страницы.
    pub size: u32,
    /// Поиск по заголовку и содержимому; пустая строка не отправляется.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            search: None,
        }
    }
}

impl PostQuery {
    /// Запрос страницы `page` с поиском `search` (пустой поиск отбрасывается).
    pub fn new(page: u32, size: u32, search: Option<&str>) -> Self {
        let search = search
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        Self { page, size, search }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Конфигурация, которую отдаёт `/api/config`.
pub struct ApiConfig {
    /// Публичный адрес API.
    pub api_url: String,
}

#[derive(Debug, Serialize)]
/// Тело `POST /api/auth/signup`.
pub struct SignupRequest<'a> {
    /// Логин.
    pub username: &'a str,
    /// Email.
    pub email: &'a str,
    /// Пароль.
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
/// Тело `POST /api/auth/login`.
pub struct LoginRequest<'a> {
    /// Логин.
    pub username: &'a str,
    /// Пароль.
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
/// Тело создания и обновления поста.
pub struct PostRequest<'a> {
    /// Заголовок.
    pub title: &'a str,
    /// Содержимое.
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
/// Тело `POST /api/posts/{id}/comments`.
pub struct CommentRequest<'a> {
    /// Текст комментария.
    pub content: &'a str,
    /// Комментарий, на который отвечаем.
    pub parent_id: Option<i64>,
}
