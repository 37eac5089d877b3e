use board_client::validation::{PostForm, TITLE_MAX_CHARS};
use board_client::{Post, is_author_of};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::messages::{NOT_AUTHOR, describe_error};
use crate::state::AppState;
use crate::view::View;

/// Форма создания (`editing = None`) или редактирования поста.
#[component]
pub(crate) fn PostFormPage(state: AppState, editing: Option<i64>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);
    let current_view = match editing {
        Some(id) => View::Edit(id),
        None => View::Create,
    };

    if let Some(id) = editing {
        state.loading.set(true);
        spawn_local(async move {
            match api::get_post(id).await {
                Ok(post) => prefill(state, id, &post, title, content),
                Err(err) => {
                    state.navigate(View::Home);
                    state.set_error(err.to_string());
                }
            }
            state.loading.set(false);
        });
    }

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form_error.set(None);

        let form = PostForm::new(&title.get_untracked(), &content.get_untracked());
        if let Err(err) = form.check() {
            form_error.set(Some(describe_error(&err)));
            return;
        }

        state.loading.set(true);
        spawn_local(async move {
            let saved = match editing {
                Some(id) => api::update_post(id, &form.title, &form.content).await,
                None => api::create_post(&form.title, &form.content).await,
            };
            match saved {
                Ok(post) => state.navigate(View::Post(post.id)),
                Err(err) => form_error.set(Some(err.to_string())),
            }
            state.loading.set(false);
        });
    };

    let heading = if editing.is_some() {
        "Редактирование поста"
    } else {
        "Новый пост"
    };

    view! {
        <section class="post-form">
            <h1>{heading}</h1>

            <Show when=move || form_error.with(Option::is_some)>
                <div class="error-banner">{move || form_error.get().unwrap_or_default()}</div>
            </Show>

            <form on:submit=on_submit>
                <label>
                    "Заголовок"
                    <input
                        maxlength=TITLE_MAX_CHARS.to_string()
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Содержимое"
                    <textarea
                        rows="15"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="actions">
                    <button type="submit" disabled=move || state.loading.get()>
                        {move || if state.loading.get() { "Сохранение..." } else { "Сохранить" }}
                    </button>
                    <button type="button" on:click=move |_| state.navigate(current_view.back())>
                        "Отмена"
                    </button>
                </div>
            </form>
        </section>
    }
}

/// Заполняет форму редактирования. Чужой пост открывается на просмотр.
fn prefill(
    state: AppState,
    id: i64,
    post: &Post,
    title: RwSignal<String>,
    content: RwSignal<String>,
) {
    let allowed = state
        .session
        .with_untracked(|s| is_author_of(s.as_ref(), &post.author_username));
    if !allowed {
        state.navigate(View::Post(id));
        state.set_error(NOT_AUTHOR);
        return;
    }
    title.set(post.title.clone());
    content.set(post.content.clone());
}
