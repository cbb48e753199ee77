use crate::shared::icons::icon;
use leptos::prelude::*;

/// Numbered page navigation for the catalog grid
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when a numbered page is chosen
    on_page_change: Callback<usize>,

    on_prev: Callback<()>,

    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <nav class="pagination-controls" aria-label="Pagination">
            <button
                class="pagination-btn"
                on:click=move |_| on_prev.run(())
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                (1..=total_pages.get().max(1))
                    .map(|page| {
                        view! {
                            <button
                                class="pagination-btn"
                                class:pagination-btn--active=page == current
                                aria-current=if page == current { Some("page") } else { None }
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </nav>
    }
}
