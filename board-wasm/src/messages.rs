#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

use board_client::BoardClientError;

pub(crate) const LOGIN_REQUIRED: &str = "Требуется вход";
pub(crate) const NOT_AUTHOR: &str = "Нет прав на редактирование этого поста";
pub(crate) const CONFIRM_DELETE_POST: &str = "Удалить пост?";
pub(crate) const CONFIRM_DELETE_COMMENT: &str = "Удалить комментарий?";

/// Текст ошибки для баннера. Сообщение бэкенда показывается как есть.
pub(crate) fn describe_error(err: &BoardClientError) -> String {
    match err {
        BoardClientError::Unauthorized => "Требуется авторизация".to_string(),
        BoardClientError::Forbidden => "Недостаточно прав для этой операции".to_string(),
        BoardClientError::NotFound => "Ресурс не найден".to_string(),
        BoardClientError::InvalidRequest(message) | BoardClientError::Validation(message) => {
            message.clone()
        }
        BoardClientError::Server { status, .. } => format!("Ошибка сервера ({status})"),
        other => format!("Неожиданный ответ сервера: {other}"),
    }
}

/// Первые `max_chars` символов текста для списка постов.
pub(crate) fn preview(content: &str, max_chars: usize) -> String {
    let content = content.trim();
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_is_shown_verbatim() {
        let err = BoardClientError::InvalidRequest("Username already exists".into());
        assert_eq!(describe_error(&err), "Username already exists");
    }

    #[test]
    fn server_error_hides_details() {
        let err = BoardClientError::Server {
            status: 502,
            message: "Bad Gateway".into(),
        };
        assert_eq!(describe_error(&err), "Ошибка сервера (502)");
    }

    #[test]
    fn preview_cuts_on_char_boundary() {
        assert_eq!(preview("Привет, мир", 6), "Привет…");
        assert_eq!(preview("  коротко ", 20), "коротко");
    }
}
