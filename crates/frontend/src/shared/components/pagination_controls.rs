use crate::shared::icons::icon;
use leptos::prelude::*;

/// Pager for the catalog table. The page size is fixed, so only page changes are reported.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    /// Items across all pages
    #[prop(into)]
    total_count: Signal<u64>,

    on_page_change: Callback<usize>,
) -> impl IntoView {
    let at_start = move || current_page.get() == 0;
    let at_end = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=at_start
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=at_start
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    // "1 / 1" even when there is nothing to show
                    let page = current_page.get();
                    let total = total_pages.get().max(1);
                    format!("{} / {} ({})", page + 1, total, total_count.get())
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=at_end
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=at_end
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
