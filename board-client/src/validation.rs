//! Проверка форм до отправки запроса.
//!
//! Каждая форма отдаёт ровно одно сообщение для пользователя: если нарушено
//! несколько правил, побеждает поле, стоящее раньше в порядке проверки.

use validator::{Validate, ValidationErrors};

use crate::error::{BoardClientError, BoardClientResult};

/// Максимальная длина заголовка поста.
pub const TITLE_MAX_CHARS: u64 = 200;

const POST_FIELDS_REQUIRED: &str = "Заполните заголовок и содержимое";

#[derive(Debug, Clone, Validate)]
/// Форма регистрации.
pub struct SignupForm {
    /// Логин.
    #[validate(length(min = 3, message = "Логин должен быть не короче 3 символов"))]
    pub username: String,
    /// Email.
    #[validate(email(message = "Некорректный email"))]
    pub email: String,
    /// Пароль.
    #[validate(length(min = 6, message = "Пароль должен быть не короче 6 символов"))]
    pub password: String,
    /// Повтор пароля.
    #[validate(must_match(other = "password", message = "Пароли не совпадают"))]
    pub confirm_password: String,
}

impl SignupForm {
    const ORDER: &'static [&'static str] = &["confirm_password", "password", "username", "email"];

    /// Форма с обрезанными пробелами в логине и email (пароль не трогаем).
    pub fn new(username: &str, email: &str, password: &str, confirm_password: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        }
    }

    /// Проверяет форму.
    pub fn check(&self) -> BoardClientResult<()> {
        self.validate()
            .map_err(|errors| first_error(&errors, Self::ORDER))
    }
}

#[derive(Debug, Clone, Validate)]
/// Форма входа.
pub struct LoginForm {
    /// Логин.
    #[validate(length(min = 1, message = "Введите логин и пароль"))]
    pub username: String,
    /// Пароль.
    #[validate(length(min = 1, message = "Введите логин и пароль"))]
    pub password: String,
}

impl LoginForm {
    const ORDER: &'static [&'static str] = &["username", "password"];

    /// Форма с обрезанным логином.
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            password: password.to_string(),
        }
    }

    /// Проверяет форму.
    pub fn check(&self) -> BoardClientResult<()> {
        self.validate()
            .map_err(|errors| first_error(&errors, Self::ORDER))
    }
}

#[derive(Debug, Clone, Validate)]
/// Форма создания и редактирования поста.
pub struct PostForm {
    /// Заголовок.
    #[validate(length(min = 1, max = 200, message = "Заголовок не длиннее 200 символов"))]
    pub title: String,
    /// Содержимое.
    #[validate(length(min = 1, message = "Заполните заголовок и содержимое"))]
    pub content: String,
}

impl PostForm {
    const ORDER: &'static [&'static str] = &["title", "content"];

    /// Форма с обрезанными пробелами: пустой после обрезки заголовок — пустой.
    pub fn new(title: &str, content: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
        }
    }

    /// Проверяет форму. Пустые поля важнее слишком длинного заголовка.
    pub fn check(&self) -> BoardClientResult<()> {
        if self.title.is_empty() || self.content.is_empty() {
            return Err(BoardClientError::Validation(POST_FIELDS_REQUIRED.to_string()));
        }
        self.validate()
            .map_err(|errors| first_error(&errors, Self::ORDER))
    }
}

#[derive(Debug, Clone, Validate)]
/// Форма комментария или ответа.
pub struct CommentForm {
    /// Текст.
    #[validate(length(min = 1, message = "Комментарий не может быть пустым"))]
    pub content: String,
}

impl CommentForm {
    const ORDER: &'static [&'static str] = &["content"];

    /// Форма с обрезанным текстом.
    pub fn new(content: &str) -> Self {
        Self {
            content: content.trim().to_string(),
        }
    }

    /// Проверяет форму.
    pub fn check(&self) -> BoardClientResult<()> {
        self.validate()
            .map_err(|errors| first_error(&errors, Self::ORDER))
    }
}

fn first_error(errors: &ValidationErrors, order: &[&str]) -> BoardClientError {
    let field_errors = errors.field_errors();

    let message = order
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errors| errors.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string());

    BoardClientError::Validation(message)
}
