use board_client::Session;
use board_client::validation::{LoginForm, SignupForm};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::messages::describe_error;
use crate::state::AppState;
use crate::view::View;

fn finish_auth(
    state: AppState,
    result: Result<board_client::AuthResponse, ApiError>,
    form_error: RwSignal<Option<String>>,
) {
    match result {
        Ok(auth) => match Session::from_auth(auth) {
            Some(session) => state.sign_in(session),
            None => form_error.set(Some("Сервер не вернул токен".to_string())),
        },
        Err(err) => form_error.set(Some(err.to_string())),
    }
}

#[component]
pub(crate) fn LoginPage(state: AppState) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form_error.set(None);

        let form = LoginForm::new(&username.get_untracked(), &password.get_untracked());
        if let Err(err) = form.check() {
            form_error.set(Some(describe_error(&err)));
            return;
        }

        state.loading.set(true);
        spawn_local(async move {
            let result = api::login(&form.username, &form.password).await;
            finish_auth(state, result, form_error);
            state.loading.set(false);
        });
    };

    view! {
        <section class="auth-form">
            <h1>"Вход"</h1>
            <Show when=move || form_error.with(Option::is_some)>
                <div class="error-banner">{move || form_error.get().unwrap_or_default()}</div>
            </Show>
            <form on:submit=on_submit>
                <input
                    placeholder="Логин"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Пароль"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || state.loading.get()>
                    {move || if state.loading.get() { "Вход..." } else { "Войти" }}
                </button>
            </form>
            <p>
                "Нет аккаунта? "
                <a href="#" on:click=move |ev| {
                    ev.prevent_default();
                    state.navigate(View::Signup);
                }>"Регистрация"</a>
            </p>
        </section>
    }
}

#[component]
pub(crate) fn SignupPage(state: AppState) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form_error.set(None);

        let form = SignupForm::new(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm_password.get_untracked(),
        );
        if let Err(err) = form.check() {
            form_error.set(Some(describe_error(&err)));
            return;
        }

        state.loading.set(true);
        spawn_local(async move {
            let result = api::signup(&form.username, &form.email, &form.password).await;
            finish_auth(state, result, form_error);
            state.loading.set(false);
        });
    };

    view! {
        <section class="auth-form">
            <h1>"Регистрация"</h1>
            <Show when=move || form_error.with(Option::is_some)>
                <div class="error-banner">{move || form_error.get().unwrap_or_default()}</div>
            </Show>
            <form on:submit=on_submit>
                <input
                    placeholder="Логин (не короче 3 символов)"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Пароль (не короче 6 символов)"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Повторите пароль"
                    prop:value=move || confirm_password.get()
                    on:input=move |ev| confirm_password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || state.loading.get()>
                    {move || if state.loading.get() { "Регистрация..." } else { "Зарегистрироваться" }}
                </button>
            </form>
            <p>
                "Уже есть аккаунт? "
                <a href="#" on:click=move |ev| {
                    ev.prevent_default();
                    state.navigate(View::Login);
                }>"Вход"</a>
            </p>
        </section>
    }
}
