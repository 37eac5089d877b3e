use leptos::prelude::*;

use crate::state::AppState;
use crate::view::View;

#[component]
pub(crate) fn Navbar(state: AppState) -> impl IntoView {
    let username = move || state.username().unwrap_or_default();

    view! {
        <nav class="navbar">
            <a class="brand" href="#" on:click=move |ev| {
                ev.prevent_default();
                state.navigate(View::Home);
            }>
                "Доска объявлений"
            </a>

            <div class="nav-links">
                <button on:click=move |_| state.navigate(View::Home)>"Главная"</button>

                <Show
                    when=move || state.is_authenticated()
                    fallback=move || view! {
                        <button on:click=move |_| state.navigate(View::Login)>"Вход"</button>
                        <button class="primary" on:click=move |_| state.navigate(View::Signup)>
                            "Регистрация"
                        </button>
                    }
                >
                    <button on:click=move |_| state.navigate(View::Create)>"Написать"</button>
                    <span class="nav-user">{username}</span>
                    <button class="primary" on:click=move |_| state.sign_out()>"Выйти"</button>
                </Show>
            </div>
        </nav>
    }
}
