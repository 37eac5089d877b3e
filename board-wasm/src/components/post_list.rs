use board_client::pagination::PageWindow;
use board_client::time::format_relative_now;
use board_client::{DEFAULT_PAGE_SIZE, Page, Post, PostQuery};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::pagination::Pagination;
use crate::messages::preview;
use crate::state::AppState;
use crate::view::View;

const PREVIEW_CHARS: usize = 160;

fn load_page(state: AppState, posts: RwSignal<Option<Page<Post>>>, query: PostQuery) {
    state.loading.set(true);

    spawn_local(async move {
        match api::list_posts(&query).await {
            Ok(page) => posts.set(Some(page)),
            Err(err) => state.set_error(err.to_string()),
        }
        state.loading.set(false);
    });
}

/// Главная: поиск, список постов и пагинатор.
#[component]
pub(crate) fn HomePage(state: AppState) -> impl IntoView {
    let posts = RwSignal::new(None::<Page<Post>>);
    let search_input = RwSignal::new(String::new());
    let search = RwSignal::new(None::<String>);
    let page = RwSignal::new(0_u32);

    let reload = move || {
        let query = PostQuery::new(
            page.get_untracked(),
            DEFAULT_PAGE_SIZE,
            search.get_untracked().as_deref(),
        );
        load_page(state, posts, query);
    };
    reload();

    let on_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        let value = search_input.get_untracked();
        search.set(Some(value.trim().to_string()).filter(|v| !v.is_empty()));
        page.set(0);
        state.clear_error();
        reload();
    };

    let on_reset = move |_| {
        search_input.set(String::new());
        search.set(None);
        page.set(0);
        state.clear_error();
        reload();
    };

    let on_select = Callback::new(move |target: u32| {
        page.set(target);
        state.clear_error();
        reload();
    });

    let window = Signal::derive(move || {
        let total_pages = posts.with(|p| p.as_ref().map(|p| p.total_pages).unwrap_or(0));
        PageWindow::new(page.get(), total_pages)
    });

    let items = move || posts.with(|p| p.as_ref().map(|p| p.content.clone()).unwrap_or_default());

    view! {
        <section class="home">
            <form class="search" on:submit=on_search>
                <input
                    placeholder="Поиск по заголовку или содержимому..."
                    prop:value=move || search_input.get()
                    on:input=move |ev| search_input.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || state.loading.get()>"Найти"</button>
                <Show when=move || search.with(Option::is_some)>
                    <button
                        type="button"
                        disabled=move || state.loading.get()
                        on:click=on_reset
                    >
                        "Сбросить"
                    </button>
                </Show>
            </form>

            <Show
                when=move || !items().is_empty()
                fallback=move || view! {
                    <p class="empty">
                        {move || if state.loading.get() { "Загрузка..." } else { "Постов пока нет." }}
                    </p>
                }
            >
                <ul class="post-list">
                    <For
                        each=items
                        key=|post| post.id
                        children=move |post| view! { <PostListItem state=state post=post /> }
                    />
                </ul>
            </Show>

            <Pagination window=window on_select=on_select />
        </section>
    }
}

#[component]
fn PostListItem(state: AppState, post: Post) -> impl IntoView {
    let id = post.id;

    view! {
        <li class="post-item" on:click=move |_| state.navigate(View::Post(id))>
            <h3>{post.title}</h3>
            <p class="preview">{preview(&post.content, PREVIEW_CHARS)}</p>
            <div class="meta">
                <span>{post.author_username}</span>
                <span>{format!("Просмотров: {}", post.view_count)}</span>
                <span>{format_relative_now(post.created_at)}</span>
            </div>
        </li>
    }
}
