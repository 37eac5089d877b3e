use board_client::time::format_relative_now;
use board_client::{Comment, Post, is_author_of};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::comment_section::CommentSection;
use crate::messages::CONFIRM_DELETE_POST;
use crate::state::{AppState, confirm};
use crate::view::View;

/// Пост целиком: кнопки автора и ветки комментариев.
#[component]
pub(crate) fn PostPage(state: AppState, id: i64) -> impl IntoView {
    let post = RwSignal::new(None::<Post>);
    let comments = RwSignal::new(Vec::<Comment>::new());

    state.loading.set(true);
    spawn_local(async move {
        match api::get_post(id).await {
            Ok(loaded) => post.set(Some(loaded)),
            Err(err) => {
                state.navigate(View::Home);
                state.set_error(err.to_string());
            }
        }
        state.loading.set(false);
    });

    // Комментарии не критичны: пост показываем и без них.
    spawn_local(async move {
        match api::list_comments(id).await {
            Ok(loaded) => comments.set(loaded),
            Err(err) => web_sys::console::warn_1(&err.to_string().into()),
        }
    });

    let is_author = move || {
        post.with(|p| {
            p.as_ref().is_some_and(|p| {
                state
                    .session
                    .with(|s| is_author_of(s.as_ref(), &p.author_username))
            })
        })
    };

    let on_delete = move |_| {
        if !confirm(CONFIRM_DELETE_POST) {
            return;
        }
        state.loading.set(true);
        spawn_local(async move {
            match api::delete_post(id).await {
                Ok(()) => state.navigate(View::Home),
                Err(err) => state.set_error(err.to_string()),
            }
            state.loading.set(false);
        });
    };

    view! {
        <Show
            when=move || post.with(Option::is_some)
            fallback=move || view! {
                <p class="empty">
                    {move || if state.loading.get() { "Загрузка..." } else { "Пост не найден." }}
                </p>
            }
        >
            <article class="post">
                <header>
                    <h1>{move || post.with(|p| p.as_ref().map(|p| p.title.clone()))}</h1>
                    <div class="meta">
                        <span class="author">
                            {move || post.with(|p| p.as_ref().map(|p| p.author_username.clone()))}
                        </span>
                        <span>
                            {move || post.with(|p| {
                                p.as_ref().map(|p| format!("Просмотров: {}", p.view_count))
                            })}
                        </span>
                        <span>
                            {move || post.with(|p| p.as_ref().map(|p| format_relative_now(p.created_at)))}
                        </span>
                    </div>
                    <Show when=is_author>
                        <div class="actions">
                            <button on:click=move |_| state.navigate(View::Edit(id))>"Изменить"</button>
                            <button
                                class="danger"
                                disabled=move || state.loading.get()
                                on:click=on_delete
                            >
                                "Удалить"
                            </button>
                        </div>
                    </Show>
                </header>
                <div class="content">
                    {move || post.with(|p| p.as_ref().map(|p| p.content.clone()))}
                </div>
            </article>

            <CommentSection state=state post_id=id comments=comments />
        </Show>
    }
}
