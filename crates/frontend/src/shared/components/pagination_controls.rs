use leptos::prelude::*;

/// Pager for the product grid: previous/next arrows around an editable
/// 1-indexed page field. Out-of-range entries clamp to the valid range.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed, already clamped by the query engine)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (at least 1)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when the page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let go = move |page: usize| {
        let total = total_pages.get_untracked().max(1);
        on_page_change.run(page.clamp(1, total));
    };

    view! {
        <div class="pagination">
            <button
                class="pagination__btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        go(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                aria-label="Trang trước"
            >
                "←"
            </button>

            <div class="pagination__status">
                <span class="pagination__label">"Trang"</span>
                <input
                    class="pagination__input"
                    type="number"
                    min="1"
                    max=move || total_pages.get().to_string()
                    prop:value=move || current_page.get().to_string()
                    on:change=move |ev| {
                        if let Ok(n) = event_target_value(&ev).parse::<usize>() {
                            go(n);
                        }
                    }
                />
                <span class="pagination__total">{move || format!("/ {}", total_pages.get())}</span>
            </div>

            <button
                class="pagination__btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        go(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                aria-label="Trang sau"
            >
                "→"
            </button>
        </div>
    }
}
