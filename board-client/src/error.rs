use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `board-client`.
pub enum BoardClientError {
    /// Ошибка HTTP-транспорта (`reqwest`).
    #[cfg(feature = "http")]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Требуется авторизация (нет сессии или токен отвергнут).
    #[error("unauthorized")]
    Unauthorized,

    /// Операция запрещена (например, чужой пост).
    #[error("forbidden")]
    Forbidden,

    /// Запрошенный ресурс не найден.
    #[error("not found")]
    NotFound,

    /// Некорректный запрос; сообщение взято из ответа бэкенда.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Ошибка на стороне бэкенда (5xx).
    #[error("server error {status}: {message}")]
    Server {
        /// HTTP-статус.
        status: u16,
        /// Сообщение из тела ответа.
        message: String,
    },

    /// Локальная проверка формы не пройдена.
    #[error("{0}")]
    Validation(String),

    /// Ответ бэкенда не удалось разобрать.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Результат операций `board-client`.
pub type BoardClientResult<T> = Result<T, BoardClientError>;

impl BoardClientError {
    /// Сопоставляет HTTP-статус ответа с вариантом ошибки.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| format!("http status {status}"));
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            500..=599 => Self::Server { status, message },
            _ => Self::InvalidRequest(message),
        }
    }

    #[cfg(feature = "http")]
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }
        if let Some(status) = err.status() {
            return Self::from_status(status.as_u16(), None);
        }
        Self::Http(err)
    }
}

/// Достаёт человекочитаемое сообщение из тела ответа с ошибкой.
///
/// Бэкенд отвечает то JSON-ом (`{"error": ...}` или `{"message": ...}`),
/// то простым текстом (`Username already exists`).
pub fn error_message_from_body(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.trim().is_empty() {
                    return Some(text.trim().to_string());
                }
            }
        }
        if let Some(text) = value.as_str() {
            return Some(text.to_string());
        }
    }

    Some(body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_distinguishes_auth_errors() {
        assert!(matches!(
            BoardClientError::from_status(401, None),
            BoardClientError::Unauthorized
        ));
        assert!(matches!(
            BoardClientError::from_status(403, None),
            BoardClientError::Forbidden
        ));
        assert!(matches!(
            BoardClientError::from_status(404, None),
            BoardClientError::NotFound
        ));
    }

    #[test]
    fn status_mapping_keeps_message_for_bad_request() {
        let err = BoardClientError::from_status(400, Some("Username already exists".to_string()));
        match err {
            BoardClientError::InvalidRequest(message) => {
                assert_eq!(message, "Username already exists")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn status_mapping_reports_server_errors() {
        let err = BoardClientError::from_status(502, None);
        assert!(matches!(err, BoardClientError::Server { status: 502, .. }));
    }

    #[test]
    fn body_message_prefers_json_error_field() {
        let message = error_message_from_body(r#"{"error":"Backend request failed"}"#);
        assert_eq!(message.as_deref(), Some("Backend request failed"));
    }

    #[test]
    fn body_message_falls_back_to_plain_text() {
        let message = error_message_from_body("Invalid credentials\n");
        assert_eq!(message.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn body_message_ignores_blank_body() {
        assert!(error_message_from_body("   ").is_none());
    }
}
