use serde::{Deserialize, Serialize};

use crate::models::AuthResponse;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Сессия вошедшего пользователя: токен и данные, которые показывает UI.
///
/// Где хранить сессию, решает фронтенд: CLI пишет её в файл, wasm-клиент —
/// в `localStorage`.
pub struct Session {
    /// JWT access token.
    pub token: String,
    /// Логин.
    pub username: String,
    /// Email.
    pub email: String,
}

impl Session {
    /// Собирает сессию из ответа бэкенда. Пустой токен сессией не считается.
    pub fn from_auth(auth: AuthResponse) -> Option<Self> {
        let token = auth.token.trim().to_string();
        if token.is_empty() {
            return None;
        }
        Some(Self {
            token,
            username: auth.username,
            email: auth.email,
        })
    }

    /// Принадлежит ли пост или комментарий текущему пользователю.
    pub fn is_author(&self, author_username: &str) -> bool {
        self.username == author_username
    }
}

/// То же, что [`Session::is_author`], но для необязательной сессии.
pub fn is_author_of(session: Option<&Session>, author_username: &str) -> bool {
    session.is_some_and(|session| session.is_author(author_username))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(token: &str) -> AuthResponse {
        AuthResponse {
            token: token.to_string(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    #[test]
    fn from_auth_trims_token() {
        let session = Session::from_auth(auth("  abc.def.ghi ")).expect("session expected");
        assert_eq!(session.token, "abc.def.ghi");
        assert_eq!(session.username, "alice");
    }

    #[test]
    fn from_auth_rejects_blank_token() {
        assert!(Session::from_auth(auth("  ")).is_none());
    }

    #[test]
    fn authorship_is_decided_by_username() {
        let session = Session::from_auth(auth("t")).expect("session expected");
        assert!(session.is_author("alice"));
        assert!(!session.is_author("bob"));
        assert!(is_author_of(Some(&session), "alice"));
        assert!(!is_author_of(None, "alice"));
    }
}
