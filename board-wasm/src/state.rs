use board_client::Session;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::messages::LOGIN_REQUIRED;
use crate::storage;
use crate::view::{View, resolve};

/// Общее состояние страницы. Все компоненты читают одну и ту же сессию,
/// поэтому вход и выход сразу отражаются в навигации.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AppState {
    pub(crate) session: RwSignal<Option<Session>>,
    pub(crate) view: RwSignal<View>,
    pub(crate) error: RwSignal<Option<String>>,
    pub(crate) loading: RwSignal<bool>,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self {
            session: RwSignal::new(storage::load_session()),
            view: RwSignal::new(View::Home),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    pub(crate) fn set_error(&self, message: impl Into<String>) {
        let message = message.into();
        web_sys::console::error_1(&JsValue::from_str(&message));
        self.error.set(Some(message));
    }

    pub(crate) fn clear_error(&self) {
        self.error.set(None);
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        self.session.with(Option::is_some)
    }

    pub(crate) fn username(&self) -> Option<String> {
        self.session
            .with(|session| session.as_ref().map(|s| s.username.clone()))
    }

    /// Переход на экран. Закрытые экраны без входа ведут на `Login`.
    pub(crate) fn navigate(&self, target: View) {
        let resolved = resolve(target, self.is_authenticated());
        if resolved != target {
            self.set_error(LOGIN_REQUIRED);
        } else {
            self.clear_error();
        }
        self.view.set(resolved);
    }

    pub(crate) fn sign_in(&self, session: Session) {
        if let Err(err) = storage::save_session(&session) {
            self.set_error(err);
            return;
        }
        self.session.set(Some(session));
        self.navigate(View::Home);
    }

    pub(crate) fn sign_out(&self) {
        if let Err(err) = storage::clear_session() {
            self.set_error(err);
            return;
        }
        self.session.set(None);
        self.navigate(View::Home);
    }
}

/// Подтверждение через `window.confirm`.
pub(crate) fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
