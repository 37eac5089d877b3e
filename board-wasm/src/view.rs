#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

/// Экран приложения. Переключается сигналом `AppState::view`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum View {
    #[default]
    Home,
    Post(i64),
    Create,
    Edit(i64),
    Login,
    Signup,
}

impl View {
    pub(crate) fn requires_auth(self) -> bool {
        matches!(self, View::Create | View::Edit(_))
    }

    /// Куда возвращаться по кнопке «Отмена» или после неудачной загрузки.
    pub(crate) fn back(self) -> View {
        match self {
            View::Edit(id) => View::Post(id),
            _ => View::Home,
        }
    }
}

/// Экран, который реально откроется при переходе на `target`.
pub(crate) fn resolve(target: View, authenticated: bool) -> View {
    if target.requires_auth() && !authenticated {
        return View::Login;
    }
    target
}
