use leptos::prelude::*;

use crate::analytics::pipeline::PAGE_SIZE;

/// Pagination controls for the fixed-size table pages (1-based)
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Count of filtered items across all pages
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when the page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let range_info = move || {
        let page = current_page.get();
        let count = total_count.get();
        if count == 0 {
            return "No products".to_string();
        }
        let from = (page - 1) * PAGE_SIZE + 1;
        let to = (page * PAGE_SIZE).min(count);
        format!("Showing {} to {} of {} products", from, to, count)
    };

    // A sliding window of up to five numbered page buttons
    let page_numbers = move || {
        let page = current_page.get();
        let total = total_pages.get();
        let visible = total.min(5);
        (0..visible)
            .map(|i| {
                if total <= 5 || page <= 3 {
                    i + 1
                } else if page >= total - 2 {
                    total - 4 + i
                } else {
                    page - 2 + i
                }
            })
            .collect::<Vec<usize>>()
    };

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{range_info}</span>
            <div class="pagination-buttons">
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=move || current_page.get() <= 1
                >
                    "Previous"
                </button>
                {move || page_numbers().into_iter().map(|n| {
                    view! {
                        <button
                            class=move || if current_page.get() == n {
                                "pagination-btn pagination-btn--current"
                            } else {
                                "pagination-btn"
                            }
                            on:click=move |_| on_page_change.run(n)
                        >
                            {n.to_string()}
                        </button>
                    }
                }).collect_view()}
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page < total_pages.get() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=move || current_page.get() >= total_pages.get()
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
