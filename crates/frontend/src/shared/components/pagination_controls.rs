use crate::shared::icons::icon;
use leptos::prelude::*;

/// Previous / next buttons for server-side paging (pages are 1-based)
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<i64>,
    #[prop(into)] total_pages: Signal<i64>,
    on_page_change: Callback<i64>,
) -> impl IntoView {
    let total = move || total_pages.get().max(1);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() - 1)
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
                " Previous"
            </button>
            <span class="pagination-info">
                {move || format!("Page {} of {}", current_page.get(), total())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=move || current_page.get() >= total()
                title="Next page"
            >
                "Next "
                {icon("chevron-right")}
            </button>
        </div>
    }
}
