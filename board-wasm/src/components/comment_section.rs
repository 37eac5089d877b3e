use board_client::threads::{CommentThread, build_threads};
use board_client::time::format_relative_now;
use board_client::validation::CommentForm;
use board_client::{Comment, is_author_of};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::messages::{CONFIRM_DELETE_COMMENT, LOGIN_REQUIRED, describe_error};
use crate::state::{AppState, confirm};

fn refresh(state: AppState, post_id: i64, comments: RwSignal<Vec<Comment>>) {
    spawn_local(async move {
        match api::list_comments(post_id).await {
            Ok(loaded) => comments.set(loaded),
            Err(err) => state.set_error(err.to_string()),
        }
    });
}

/// Отправляет комментарий (или ответ, если есть `parent_id`) и перечитывает список.
fn submit(
    state: AppState,
    post_id: i64,
    comments: RwSignal<Vec<Comment>>,
    text: RwSignal<String>,
    parent_id: Option<i64>,
    on_done: impl FnOnce() + 'static,
) {
    if !state.is_authenticated() {
        state.set_error(LOGIN_REQUIRED);
        return;
    }
    let form = CommentForm::new(&text.get_untracked());
    if let Err(err) = form.check() {
        state.set_error(describe_error(&err));
        return;
    }

    state.loading.set(true);
    state.clear_error();
    spawn_local(async move {
        match api::create_comment(post_id, &form.content, parent_id).await {
            Ok(_) => {
                text.set(String::new());
                on_done();
                refresh(state, post_id, comments);
            }
            Err(err) => state.set_error(err.to_string()),
        }
        state.loading.set(false);
    });
}

#[component]
pub(crate) fn CommentSection(
    state: AppState,
    post_id: i64,
    comments: RwSignal<Vec<Comment>>,
) -> impl IntoView {
    let new_comment = RwSignal::new(String::new());
    let reply_to = RwSignal::new(None::<i64>);
    let reply_content = RwSignal::new(String::new());

    let threads = Memo::new(move |_| comments.with(|list| build_threads(list)));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submit(state, post_id, comments, new_comment, None, || {});
    };

    let on_reply = Callback::new(move |parent_id: i64| {
        submit(state, post_id, comments, reply_content, Some(parent_id), move || {
            reply_to.set(None)
        });
    });

    let on_delete = Callback::new(move |comment_id: i64| {
        if !confirm(CONFIRM_DELETE_COMMENT) {
            return;
        }
        spawn_local(async move {
            match api::delete_comment(post_id, comment_id).await {
                Ok(()) => refresh(state, post_id, comments),
                Err(err) => state.set_error(err.to_string()),
            }
        });
    });

    let placeholder = move || {
        if state.is_authenticated() {
            "Напишите комментарий..."
        } else {
            "Войдите, чтобы оставить комментарий"
        }
    };

    view! {
        <section class="comments">
            <h2>{move || format!("Комментарии ({})", comments.with(Vec::len))}</h2>

            <form on:submit=on_submit>
                <textarea
                    rows="3"
                    placeholder=placeholder
                    disabled=move || !state.is_authenticated() || state.loading.get()
                    prop:value=move || new_comment.get()
                    on:input=move |ev| new_comment.set(event_target_value(&ev))
                ></textarea>
                <button
                    type="submit"
                    disabled=move || {
                        !state.is_authenticated()
                            || state.loading.get()
                            || new_comment.with(|t| t.trim().is_empty())
                    }
                >
                    {move || if state.loading.get() { "Отправка..." } else { "Отправить" }}
                </button>
            </form>

            <For
                each=move || threads.get()
                key=CommentThread::render_key
                children=move |thread: CommentThread| {
                    let root_id = thread.comment.id;
                    let replies = thread.replies;
                    view! {
                        <div class="thread">
                            <CommentItem state=state comment=thread.comment on_delete=on_delete />
                            <button
                                class="link"
                                on:click=move |_| {
                                    reply_content.set(String::new());
                                    reply_to.update(|current| {
                                        *current = match *current {
                                            Some(open) if open == root_id => None,
                                            _ => Some(root_id),
                                        };
                                    });
                                }
                            >
                                "Ответить"
                            </button>

                            <Show when=move || reply_to.get() == Some(root_id)>
                                <form on:submit=move |ev: SubmitEvent| {
                                    ev.prevent_default();
                                    on_reply.run(root_id);
                                }>
                                    <textarea
                                        rows="2"
                                        placeholder="Напишите ответ..."
                                        prop:value=move || reply_content.get()
                                        on:input=move |ev| reply_content.set(event_target_value(&ev))
                                    ></textarea>
                                    <button type="button" on:click=move |_| {
                                        reply_to.set(None);
                                        reply_content.set(String::new());
                                    }>
                                        "Отмена"
                                    </button>
                                    <button
                                        type="submit"
                                        disabled=move || {
                                            state.loading.get()
                                                || reply_content.with(|t| t.trim().is_empty())
                                        }
                                    >
                                        "Ответить"
                                    </button>
                                </form>
                            </Show>

                            <div class="replies">
                                {replies
                                    .into_iter()
                                    .map(|reply| view! {
                                        <CommentItem state=state comment=reply on_delete=on_delete />
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                }
            />
        </section>
    }
}

#[component]
fn CommentItem(state: AppState, comment: Comment, on_delete: Callback<i64>) -> impl IntoView {
    let id = comment.id;
    let author = comment.author_username.clone();
    let can_delete = move || state.session.with(|s| is_author_of(s.as_ref(), &author));

    view! {
        <div class="comment">
            <div class="meta">
                <span class="author">{comment.author_username}</span>
                " • "
                <span>{format_relative_now(comment.created_at)}</span>
            </div>
            <p>{comment.content}</p>
            <Show when=can_delete>
                <button class="link danger" on:click=move |_| on_delete.run(id)>
                    "Удалить"
                </button>
            </Show>
        </div>
    }
}
