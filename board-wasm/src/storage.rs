#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

use board_client::Session;

const TOKEN_KEY: &str = "token";
const USERNAME_KEY: &str = "username";
const EMAIL_KEY: &str = "email";

/// Собирает сессию из значений `localStorage`. Без непустого токена сессии нет.
fn session_from_parts(
    token: Option<String>,
    username: Option<String>,
    email: Option<String>,
) -> Option<Session> {
    let token = token?.trim().to_string();
    if token.is_empty() {
        return None;
    }
    Some(Session {
        token,
        username: username.unwrap_or_default(),
        email: email.unwrap_or_default(),
    })
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, String> {
    let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
    window
        .local_storage()
        .map_err(|_| "failed to access localStorage".to_string())?
        .ok_or_else(|| "localStorage is not available".to_string())
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn load_session() -> Option<Session> {
    let storage = local_storage().ok()?;
    let read = |key: &str| storage.get_item(key).ok().flatten();
    session_from_parts(read(TOKEN_KEY), read(USERNAME_KEY), read(EMAIL_KEY))
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn save_session(session: &Session) -> Result<(), String> {
    let storage = local_storage()?;
    for (key, value) in [
        (TOKEN_KEY, session.token.as_str()),
        (USERNAME_KEY, session.username.as_str()),
        (EMAIL_KEY, session.email.as_str()),
    ] {
        storage
            .set_item(key, value)
            .map_err(|_| format!("failed to save {key}"))?;
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn clear_session() -> Result<(), String> {
    let storage = local_storage()?;
    for key in [TOKEN_KEY, USERNAME_KEY, EMAIL_KEY] {
        storage
            .remove_item(key)
            .map_err(|_| format!("failed to clear {key}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_requires_token() {
        assert!(session_from_parts(None, Some("alice".into()), None).is_none());
        assert!(session_from_parts(Some("  ".into()), Some("alice".into()), None).is_none());
    }

    #[test]
    fn session_trims_token() {
        let session = session_from_parts(
            Some(" abc.def.ghi ".into()),
            Some("alice".into()),
            Some("alice@example.com".into()),
        )
        .expect("session expected");
        assert_eq!(session.token, "abc.def.ghi");
        assert_eq!(session.username, "alice");
        assert_eq!(session.email, "alice@example.com");
    }

    #[test]
    fn missing_profile_fields_become_empty() {
        let session = session_from_parts(Some("t".into()), None, None).expect("session expected");
        assert!(session.username.is_empty());
        assert!(session.email.is_empty());
    }
}
