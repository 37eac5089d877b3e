use board_client::pagination::PageWindow;
use leptos::prelude::*;

#[component]
pub(crate) fn Pagination(
    #[prop(into)] window: Signal<PageWindow>,
    on_select: Callback<u32>,
) -> impl IntoView {
    let go = move |page: u32| on_select.run(page);

    view! {
        <Show when=move || window.with(PageWindow::is_visible)>
            <nav class="pagination">
                <button
                    disabled=move || !window.with(PageWindow::has_prev)
                    on:click=move |_| go(window.with(|w| w.current.saturating_sub(1)))
                >
                    "‹"
                </button>

                <Show when=move || window.with(PageWindow::show_first)>
                    <button on:click=move |_| go(0)>"1"</button>
                    <Show when=move || window.with(PageWindow::leading_gap)>
                        <span class="gap">"…"</span>
                    </Show>
                </Show>

                <For
                    each=move || window.with(PageWindow::pages)
                    key=|page| *page
                    children=move |page| {
                        view! {
                            <button
                                class:active=move || window.with(|w| w.current == page)
                                on:click=move |_| go(page)
                            >
                                {page + 1}
                            </button>
                        }
                    }
                />

                <Show when=move || window.with(PageWindow::show_last)>
                    <Show when=move || window.with(PageWindow::trailing_gap)>
                        <span class="gap">"…"</span>
                    </Show>
                    <button on:click=move |_| {
                        if let Some(last) = window.with(PageWindow::last_page) {
                            go(last);
                        }
                    }>
                        {move || window.with(|w| w.total_pages)}
                    </button>
                </Show>

                <button
                    disabled=move || !window.with(PageWindow::has_next)
                    on:click=move |_| go(window.with(|w| w.current + 1))
                >
                    "›"
                </button>
            </nav>
        </Show>
    }
}
