use leptos::prelude::*;

use crate::components::auth_forms::{LoginPage, SignupPage};
use crate::components::navbar::Navbar;
use crate::components::post_detail::PostPage;
use crate::components::post_form::PostFormPage;
use crate::components::post_list::HomePage;
use crate::state::AppState;
use crate::view::View;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    let error_text = move || state.error.get().unwrap_or_default();

    let page = move || match state.view.get() {
        View::Home => view! { <HomePage state=state /> }.into_any(),
        View::Post(id) => view! { <PostPage state=state id=id /> }.into_any(),
        View::Create => view! { <PostFormPage state=state editing=None /> }.into_any(),
        View::Edit(id) => view! { <PostFormPage state=state editing=Some(id) /> }.into_any(),
        View::Login => view! { <LoginPage state=state /> }.into_any(),
        View::Signup => view! { <SignupPage state=state /> }.into_any(),
    };

    view! {
        <Navbar state=state />
        <main class="page">
            <section class="container">
                <Show when=move || state.error.with(Option::is_some)>
                    <div class="error-banner">
                        <strong>"Ошибка: "</strong>
                        {error_text}
                        <button class="link" on:click=move |_| state.clear_error()>"×"</button>
                    </div>
                </Show>

                {page}
            </section>
        </main>
    }
}
